use contracts::domain::a001_course::aggregate::{Course, CourseDto, CourseId};
use contracts::domain::a001_course::requests;
use contracts::shared::{ApiError, ApiResponse};

use crate::shared::api_client::api;

/// Fetch all courses
pub async fn fetch_courses() -> Result<Vec<Course>, ApiError> {
    api()
        .send::<Vec<Course>>(&requests::list())
        .await
        .map(ApiResponse::into_data)
}

/// Create a course, or update it when `id` is set.
///
/// The list is refetched afterwards, so whatever the server echoes back is
/// not read.
pub async fn save_course(id: Option<CourseId>, dto: &CourseDto) -> Result<(), ApiError> {
    let request = match id {
        Some(id) => requests::update(id, dto)?,
        None => requests::create(dto)?,
    };
    api().acknowledge(&request).await
}

/// Delete a course
pub async fn delete_course(id: CourseId) -> Result<(), ApiError> {
    api().acknowledge(&requests::delete(id)).await
}
