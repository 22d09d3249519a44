use serde::{Deserialize, Serialize};

use crate::domain::a001_course::aggregate::{Course, CourseId};
use crate::domain::a002_student::aggregate::{Student, StudentId};
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::validation::ValidationError;

// ============================================================================
// ID Type
// ============================================================================

/// Composite identity of an enrollment. The server keeps it unique; the
/// client never checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrollmentKey {
    #[serde(rename = "alunoId")]
    pub student_id: StudentId,

    #[serde(rename = "cursoId")]
    pub course_id: CourseId,
}

impl AggregateId for EnrollmentKey {
    fn as_string(&self) -> String {
        format!("{}-{}", self.student_id.as_string(), self.course_id.as_string())
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let (student, course) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid enrollment key: {}", s))?;
        Ok(Self {
            student_id: StudentId::from_string(student)?,
            course_id: CourseId::from_string(course)?,
        })
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Enrollment as returned by `GET /matriculas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "alunoId")]
    pub student_id: StudentId,

    #[serde(rename = "cursoId")]
    pub course_id: CourseId,

    #[serde(rename = "dataMatricula", default)]
    pub enrolled_at: String,

    #[serde(rename = "aluno", default, skip_serializing_if = "Option::is_none")]
    pub student: Option<Box<Student>>,

    #[serde(rename = "curso", default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Box<Course>>,
}

impl Enrollment {
    pub fn key(&self) -> EnrollmentKey {
        EnrollmentKey {
            student_id: self.student_id,
            course_id: self.course_id,
        }
    }

    /// Body that removes this enrollment
    pub fn unenroll_dto(&self) -> EnrollDto {
        EnrollDto {
            student_id: self.student_id,
            course_id: self.course_id,
        }
    }
}

impl AggregateRoot for Enrollment {
    type Id = EnrollmentKey;

    fn id(&self) -> Self::Id {
        self.key()
    }

    /// Name of the embedded student, empty when the server sent a bare link
    fn description(&self) -> &str {
        self.student.as_deref().map_or("", |s| s.name.as_str())
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "matriculas"
    }

    fn element_name() -> &'static str {
        "Matrícula"
    }

    fn list_name() -> &'static str {
        "Matrículas"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /matriculas` and `POST /matriculas/desmatricular`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollDto {
    #[serde(rename = "alunoId")]
    pub student_id: StudentId,

    #[serde(rename = "cursoId")]
    pub course_id: CourseId,
}

/// Raw state of the enrollment form: the two `<select>` values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollForm {
    pub student_id: String,
    pub course_id: String,
}

impl EnrollForm {
    pub fn is_complete(&self) -> bool {
        !self.student_id.trim().is_empty() && !self.course_id.trim().is_empty()
    }

    pub fn to_dto(&self) -> Result<EnrollDto, ValidationError> {
        if self.student_id.trim().is_empty() {
            return Err(ValidationError::Required { field: "Aluno" });
        }
        if self.course_id.trim().is_empty() {
            return Err(ValidationError::Required { field: "Curso" });
        }
        let student_id = StudentId::from_string(&self.student_id)
            .map_err(|_| ValidationError::InvalidSelection { field: "aluno" })?;
        let course_id = CourseId::from_string(&self.course_id)
            .map_err(|_| ValidationError::InvalidSelection { field: "curso" })?;
        Ok(EnrollDto {
            student_id,
            course_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_with_embedded_records() {
        let raw = json!({
            "alunoId": 1,
            "cursoId": 2,
            "dataMatricula": "2024-02-01T10:00:00",
            "aluno": { "id": 1, "nome": "João", "email": "j@x.com", "dataNascimento": "1995-01-15" },
            "curso": { "id": 2, "nome": "Rust", "descricao": "Sistemas" }
        });
        let enrollment: Enrollment = serde_json::from_value(raw).unwrap();
        assert_eq!(enrollment.key().as_string(), "1-2");
        assert_eq!(enrollment.description(), "João");
        assert_eq!(Enrollment::collection_path(), "/matriculas");
        assert_eq!(enrollment.student.as_ref().map(|s| s.name.as_str()), Some("João"));
        assert_eq!(enrollment.course.as_ref().map(|c| c.name.as_str()), Some("Rust"));
    }

    #[test]
    fn decodes_bare_link() {
        let enrollment: Enrollment =
            serde_json::from_value(json!({ "alunoId": 3, "cursoId": 4 })).unwrap();
        assert!(enrollment.student.is_none());
        assert_eq!(enrollment.enrolled_at, "");
    }

    #[test]
    fn key_round_trip() {
        let key = EnrollmentKey {
            student_id: StudentId(10),
            course_id: CourseId(20),
        };
        assert_eq!(EnrollmentKey::from_string(&key.as_string()), Ok(key));
        assert!(EnrollmentKey::from_string("10").is_err());
    }

    #[test]
    fn form_parses_selections() {
        let form = EnrollForm {
            student_id: "5".into(),
            course_id: "8".into(),
        };
        assert_eq!(
            serde_json::to_value(form.to_dto().unwrap()).unwrap(),
            json!({ "alunoId": 5, "cursoId": 8 })
        );
    }

    #[test]
    fn form_rejects_missing_or_placeholder_selection() {
        let form = EnrollForm {
            student_id: String::new(),
            course_id: "8".into(),
        };
        assert!(!form.is_complete());
        assert_eq!(form.to_dto(), Err(ValidationError::Required { field: "Aluno" }));

        let form = EnrollForm {
            student_id: "no-alunos".into(),
            course_id: "8".into(),
        };
        assert_eq!(
            form.to_dto(),
            Err(ValidationError::InvalidSelection { field: "aluno" })
        );
    }
}
