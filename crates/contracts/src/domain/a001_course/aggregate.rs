use serde::{Deserialize, Serialize};

use crate::domain::a003_enrollment::aggregate::Enrollment;
use crate::domain::common::aggregate_id::parse_numeric_id;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::validation::{require, ValidationError};

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned course identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub i64);

impl CourseId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CourseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_numeric_id(s, "course").map(CourseId)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Course as returned by `GET /cursos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "descricao", default)]
    pub description: String,

    #[serde(rename = "matriculas", default, skip_serializing_if = "Option::is_none")]
    pub enrollments: Option<Vec<Enrollment>>,
}

impl AggregateRoot for Course {
    type Id = CourseId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "cursos"
    }

    fn element_name() -> &'static str {
        "Curso"
    }

    fn list_name() -> &'static str {
        "Cursos"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /cursos` and `PUT /cursos/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDto {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "descricao")]
    pub description: String,
}

/// Raw state of the course form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub name: String,
    pub description: String,
}

impl CourseForm {
    pub fn from_course(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            description: course.description.clone(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Build the request body. The name is trimmed, the description is
    /// sent as typed.
    pub fn to_dto(&self) -> Result<CourseDto, ValidationError> {
        let name = require("Nome", &self.name)?;
        require("Descrição", &self.description)?;
        Ok(CourseDto {
            name: name.to_string(),
            description: self.description.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_server_course() {
        let raw = json!({ "id": 7, "nome": "Rust", "descricao": "Sistemas", "matriculas": [] });
        let course: Course = serde_json::from_value(raw).unwrap();
        assert_eq!(course.id, CourseId(7));
        assert_eq!(course.name, "Rust");
        assert_eq!(course.enrollments, Some(Vec::new()));
    }

    #[test]
    fn form_trims_name_only() {
        let form = CourseForm {
            name: "  Rust Avançado ".into(),
            description: " Ownership e lifetimes".into(),
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({ "nome": "Rust Avançado", "descricao": " Ownership e lifetimes" })
        );
    }

    #[test]
    fn form_requires_both_fields() {
        let form = CourseForm {
            name: "Rust".into(),
            description: "  ".into(),
        };
        assert!(!form.is_complete());
        assert_eq!(
            form.to_dto(),
            Err(ValidationError::Required { field: "Descrição" })
        );
    }

    #[test]
    fn id_round_trips_through_strings() {
        let id = CourseId::new(12);
        assert_eq!(CourseId::from_string(&id.as_string()), Ok(id));
        assert_eq!(Course::item_path(id), "/cursos/12");
        assert_eq!(Course::full_name(), "a001_cursos");
    }
}
