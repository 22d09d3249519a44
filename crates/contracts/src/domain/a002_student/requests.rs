//! REST calls of the student screen.

use super::aggregate::{Student, StudentDto, StudentId};
use crate::domain::common::AggregateRoot;
use crate::shared::{ApiError, ApiRequest};

/// `GET /alunos`
pub fn list() -> ApiRequest {
    ApiRequest::get(Student::collection_path())
}

/// `POST /alunos` (400 when the student is underage)
pub fn create(dto: &StudentDto) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(Student::collection_path(), dto)
}

/// `PUT /alunos/{id}`
pub fn update(id: StudentId, dto: &StudentDto) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(Student::item_path(id), dto)
}

/// `DELETE /alunos/{id}`
pub fn delete(id: StudentId) -> ApiRequest {
    ApiRequest::delete(Student::item_path(id))
}
