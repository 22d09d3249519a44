//! REST calls of the enrollment screen and the per-course report.

use super::aggregate::EnrollDto;
use crate::domain::a001_course::aggregate::CourseId;
use crate::domain::common::AggregateId;
use crate::shared::{ApiError, ApiRequest};

const ENROLLMENTS: &str = "/matriculas";
const UNENROLL: &str = "/matriculas/desmatricular";
const STUDENTS_BY_COURSE: &str = "/relatorios/alunos-por-curso";

/// `GET /matriculas`
pub fn list() -> ApiRequest {
    ApiRequest::get(ENROLLMENTS)
}

/// `POST /matriculas` (409 when the pair already exists)
pub fn enroll(dto: &EnrollDto) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(ENROLLMENTS, dto)
}

/// `POST /matriculas/desmatricular` (404 when the pair does not exist)
pub fn unenroll(dto: &EnrollDto) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(UNENROLL, dto)
}

/// `GET /relatorios/alunos-por-curso/{courseId}`
pub fn students_by_course(course_id: CourseId) -> ApiRequest {
    ApiRequest::get(format!("{}/{}", STUDENTS_BY_COURSE, course_id.as_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_student::aggregate::StudentId;
    use crate::shared::HttpMethod;
    use serde_json::json;

    fn dto() -> EnrollDto {
        EnrollDto {
            student_id: StudentId(1),
            course_id: CourseId(2),
        }
    }

    #[test]
    fn enroll_is_one_post_with_the_pair() {
        let req = enroll(&dto()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/matriculas");
        assert_eq!(req.body, Some(json!({ "alunoId": 1, "cursoId": 2 })));
    }

    #[test]
    fn unenroll_posts_to_its_own_path() {
        let req = unenroll(&dto()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/matriculas/desmatricular");
        assert_eq!(req.body, Some(json!({ "alunoId": 1, "cursoId": 2 })));
    }

    #[test]
    fn report_path_includes_course() {
        let req = students_by_course(CourseId(42));
        assert_eq!(req, ApiRequest::get("/relatorios/alunos-por-curso/42"));
        assert_eq!(list().path, "/matriculas");
    }
}
