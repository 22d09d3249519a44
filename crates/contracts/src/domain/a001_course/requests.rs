//! REST calls of the course screen.

use super::aggregate::{Course, CourseDto, CourseId};
use crate::domain::common::AggregateRoot;
use crate::shared::{ApiError, ApiRequest};

/// `GET /cursos`
pub fn list() -> ApiRequest {
    ApiRequest::get(Course::collection_path())
}

/// `POST /cursos`
pub fn create(dto: &CourseDto) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(Course::collection_path(), dto)
}

/// `PUT /cursos/{id}`
pub fn update(id: CourseId, dto: &CourseDto) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(Course::item_path(id), dto)
}

/// `DELETE /cursos/{id}`
pub fn delete(id: CourseId) -> ApiRequest {
    ApiRequest::delete(Course::item_path(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_course::aggregate::CourseForm;
    use crate::shared::HttpMethod;
    use serde_json::json;

    #[test]
    fn submitting_the_form_is_one_post() {
        let form = CourseForm {
            name: " Banco de Dados ".into(),
            description: "SQL e modelagem".into(),
        };
        let req = create(&form.to_dto().unwrap()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/cursos");
        assert_eq!(
            req.body,
            Some(json!({ "nome": "Banco de Dados", "descricao": "SQL e modelagem" }))
        );
    }

    #[test]
    fn update_and_delete_target_the_record() {
        let dto = CourseDto {
            name: "A".into(),
            description: "B".into(),
        };
        let req = update(CourseId(3), &dto).unwrap();
        assert_eq!((req.method, req.path.as_str()), (HttpMethod::Put, "/cursos/3"));

        let req = delete(CourseId(3));
        assert_eq!((req.method, req.path.as_str()), (HttpMethod::Delete, "/cursos/3"));
        assert_eq!(req.body, None);
    }

    #[test]
    fn list_has_no_body() {
        assert_eq!(list(), ApiRequest::get("/cursos"));
    }
}
