use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a003_enrollment::aggregate::Enrollment;
use crate::domain::common::aggregate_id::parse_numeric_id;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::validation::{
    age_on, check_birth_date, is_valid_email, parse_iso_date, require, ValidationError,
};

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned student identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl StudentId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for StudentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_numeric_id(s, "student").map(StudentId)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Student as returned by `GET /alunos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,

    #[serde(rename = "nome")]
    pub name: String,

    pub email: String,

    /// Kept as sent by the server, which may append a time component
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,

    #[serde(rename = "idade", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(rename = "matriculas", default, skip_serializing_if = "Option::is_none")]
    pub enrollments: Option<Vec<Enrollment>>,
}

impl Student {
    pub fn birth_date_value(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.birth_date).ok()
    }

    /// Birth date in the `YYYY-MM-DD` form a date input expects
    pub fn birth_date_input(&self) -> String {
        self.birth_date
            .split('T')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    /// Age reported by the server, or computed from the birth date
    pub fn age_at(&self, today: NaiveDate) -> Option<u32> {
        self.age
            .or_else(|| self.birth_date_value().map(|birth| age_on(birth, today)))
    }
}

impl AggregateRoot for Student {
    type Id = StudentId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "alunos"
    }

    fn element_name() -> &'static str {
        "Aluno"
    }

    fn list_name() -> &'static str {
        "Alunos"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /alunos` and `PUT /alunos/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDto {
    #[serde(rename = "nome")]
    pub name: String,

    pub email: String,

    /// Serialized as `YYYY-MM-DD`
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
}

/// Raw state of the student form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    /// Value of the date input (`YYYY-MM-DD`, empty when unset)
    pub birth_date: String,
}

impl StudentForm {
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            birth_date: student.birth_date_input(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.birth_date.trim().is_empty()
    }

    /// Validate and build the request body.
    ///
    /// `today` is the upper bound for the birth date; a later date never
    /// produces a DTO.
    pub fn to_dto(&self, today: NaiveDate) -> Result<StudentDto, ValidationError> {
        let name = require("Nome", &self.name)?;
        let email = require("Email", &self.email)?;
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        let birth_date = parse_iso_date(require("Data de nascimento", &self.birth_date)?)?;
        check_birth_date(birth_date, today)?;

        Ok(StudentDto {
            name: name.to_string(),
            email: email.to_string(),
            birth_date,
        })
    }
}
