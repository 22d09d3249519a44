use contracts::domain::a002_student::aggregate::{Student, StudentDto, StudentId};
use contracts::domain::a002_student::requests;
use contracts::shared::{ApiError, ApiResponse};

use crate::shared::api_client::api;

/// Fetch all students
pub async fn fetch_students() -> Result<Vec<Student>, ApiError> {
    api()
        .send::<Vec<Student>>(&requests::list())
        .await
        .map(ApiResponse::into_data)
}

/// Create a student, or update it when `id` is set.
///
/// The server rejects minors with a 400 and a plain-text reason.
pub async fn save_student(id: Option<StudentId>, dto: &StudentDto) -> Result<(), ApiError> {
    let request = match id {
        Some(id) => requests::update(id, dto)?,
        None => requests::create(dto)?,
    };
    api().acknowledge(&request).await
}

/// Delete a student
pub async fn delete_student(id: StudentId) -> Result<(), ApiError> {
    api().acknowledge(&requests::delete(id)).await
}
