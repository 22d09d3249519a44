use contracts::domain::a001_course::aggregate::{Course, CourseId};
use contracts::domain::a002_student::aggregate::Student;
use contracts::domain::a003_enrollment::aggregate::{EnrollDto, Enrollment};
use contracts::domain::a003_enrollment::requests;
use contracts::shared::{ApiError, ApiResponse};
use futures::future::join;

use crate::domain::a001_course::api::fetch_courses;
use crate::domain::a002_student::api::fetch_students;
use crate::shared::api_client::api;

/// Everything the enrollment screen needs on first render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageData {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
}

impl PageData {
    /// Students and courses are required; a failed enrollment list only
    /// leaves the table empty.
    pub fn assemble(
        students: Result<Vec<Student>, ApiError>,
        courses: Result<Vec<Course>, ApiError>,
        enrollments: Result<Vec<Enrollment>, ApiError>,
    ) -> Result<Self, ApiError> {
        let students = students?;
        let courses = courses?;
        let enrollments = enrollments.unwrap_or_else(|e| {
            log::warn!("enrollment list unavailable, showing none: {}", e);
            Vec::new()
        });
        Ok(Self {
            students,
            courses,
            enrollments,
        })
    }
}

/// Table contents after a post-mutation refetch.
///
/// `None` means "keep what is on screen": a failed refetch must not wipe
/// rows the server still holds.
pub fn refreshed_enrollments(
    result: Result<Vec<Enrollment>, ApiError>,
) -> Option<Vec<Enrollment>> {
    match result {
        Ok(list) => Some(list),
        Err(e) => {
            log::warn!("enrollment refresh failed, keeping current rows: {}", e);
            None
        }
    }
}

/// Fetch students and courses together, then enrollments on their own
pub async fn load_page_data() -> Result<PageData, ApiError> {
    let (students, courses) = join(fetch_students(), fetch_courses()).await;
    if students.is_err() || courses.is_err() {
        return PageData::assemble(students, courses, Ok(Vec::new()));
    }
    let enrollments = fetch_enrollments().await;
    PageData::assemble(students, courses, enrollments)
}

/// Fetch all enrollments
pub async fn fetch_enrollments() -> Result<Vec<Enrollment>, ApiError> {
    api()
        .send::<Vec<Enrollment>>(&requests::list())
        .await
        .map(ApiResponse::into_data)
}

/// Enroll a student (409 when already enrolled)
pub async fn enroll(dto: &EnrollDto) -> Result<(), ApiError> {
    api().acknowledge(&requests::enroll(dto)?).await
}

/// Remove an enrollment (404 when it does not exist)
pub async fn unenroll(dto: &EnrollDto) -> Result<(), ApiError> {
    api().acknowledge(&requests::unenroll(dto)?).await
}

/// Students enrolled in a course. A `null` body reads as an empty list.
pub async fn fetch_students_by_course(course_id: CourseId) -> Result<Vec<Student>, ApiError> {
    api()
        .send::<Option<Vec<Student>>>(&requests::students_by_course(course_id))
        .await
        .map(|response| response.into_data().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_student::aggregate::StudentId;

    fn course() -> Course {
        Course {
            id: CourseId(1),
            name: "Rust".into(),
            description: "Sistemas".into(),
            enrollments: None,
        }
    }

    fn enrollment() -> Enrollment {
        Enrollment {
            student_id: StudentId(1),
            course_id: CourseId(1),
            enrolled_at: String::new(),
            student: None,
            course: None,
        }
    }

    #[test]
    fn enrollment_failure_alone_is_tolerated() {
        let data = PageData::assemble(
            Ok(Vec::new()),
            Ok(vec![course()]),
            Err(ApiError::from_response(500, "")),
        )
        .unwrap();
        assert_eq!(data.courses.len(), 1);
        assert!(data.enrollments.is_empty());
    }

    #[test]
    fn student_or_course_failure_fails_the_page() {
        let err = PageData::assemble(
            Err(ApiError::NoResponse("offline".into())),
            Ok(vec![course()]),
            Ok(vec![enrollment()]),
        )
        .unwrap_err();
        assert!(err.is_no_response());

        let err = PageData::assemble(
            Ok(Vec::new()),
            Err(ApiError::from_response(503, "")),
            Ok(vec![enrollment()]),
        )
        .unwrap_err();
        assert!(err.is_status(503));
    }

    #[test]
    fn full_load_keeps_everything() {
        let data = PageData::assemble(Ok(Vec::new()), Ok(vec![course()]), Ok(vec![enrollment()]))
            .unwrap();
        assert_eq!(data.enrollments, vec![enrollment()]);
    }

    #[test]
    fn failed_refresh_keeps_current_rows() {
        let mut rows = vec![enrollment()];
        if let Some(list) = refreshed_enrollments(Err(ApiError::NoResponse("offline".into()))) {
            rows = list;
        }
        assert_eq!(rows, vec![enrollment()]);
    }

    #[test]
    fn successful_refresh_replaces_rows() {
        assert_eq!(refreshed_enrollments(Ok(Vec::new())), Some(Vec::new()));
        assert_eq!(
            refreshed_enrollments(Ok(vec![enrollment()])),
            Some(vec![enrollment()])
        );
    }
}
