//! Toasts of the enrollment screen and the per-course report.

use contracts::domain::a002_student::aggregate::Student;
use contracts::shared::{ApiError, ValidationError};

use crate::shared::toast::Toast;

const ENROLL_FAILED_TITLE: &str = "Erro ao realizar matrícula";
const ALREADY_ENROLLED: &str = "Este aluno já está matriculado neste curso.";
const ENROLL_FAILED_GENERIC: &str = "Não foi possível criar a matrícula.";
const UNENROLL_FAILED_TITLE: &str = "Erro ao cancelar matrícula";
const ENROLLMENT_NOT_FOUND: &str = "Matrícula não encontrada.";
const UNENROLL_FAILED_GENERIC: &str = "Não foi possível cancelar a matrícula.";

pub fn page_load_failed(_err: &ApiError) -> Toast {
    Toast::destructive(
        "Erro ao carregar dados",
        "Não foi possível carregar as informações. Tente novamente.",
    )
}

pub fn enrolled() -> Toast {
    Toast::success("Matrícula realizada!", "A matrícula foi criada com sucesso.")
}

pub fn enroll_failed(err: &ApiError) -> Toast {
    let description = if err.is_status(409) {
        err.server_message().unwrap_or(ALREADY_ENROLLED)
    } else {
        err.server_text().unwrap_or(ENROLL_FAILED_GENERIC)
    };
    Toast::destructive(ENROLL_FAILED_TITLE, description)
}

pub fn invalid_form(err: &ValidationError) -> Toast {
    Toast::destructive(ENROLL_FAILED_TITLE, err.to_string())
}

pub fn unenrolled() -> Toast {
    Toast::success(
        "Matrícula cancelada!",
        "O aluno foi desmatriculado do curso.",
    )
}

pub fn unenroll_failed(err: &ApiError) -> Toast {
    let description = if err.is_status(404) {
        err.server_message().unwrap_or(ENROLLMENT_NOT_FOUND)
    } else {
        err.server_text().unwrap_or(UNENROLL_FAILED_GENERIC)
    };
    Toast::destructive(UNENROLL_FAILED_TITLE, description)
}

/// Toast for an enroll request, and whether the table should be refetched.
///
/// Only an accepted enrollment touches local state; a rejected one (409
/// included) leaves every list as it was.
pub fn enroll_outcome(result: &Result<(), ApiError>) -> (Toast, bool) {
    match result {
        Ok(()) => (enrolled(), true),
        Err(e) => (enroll_failed(e), false),
    }
}

/// Same as [`enroll_outcome`] for the unenroll action.
pub fn unenroll_outcome(result: &Result<(), ApiError>) -> (Toast, bool) {
    match result {
        Ok(()) => (unenrolled(), true),
        Err(e) => (unenroll_failed(e), false),
    }
}

pub fn unenroll_prompt(student: &str, course: &str) -> String {
    format!(
        "Tem certeza que deseja desmatricular \"{}\" do curso \"{}\"?",
        student, course
    )
}

/// Students to list for a report request, plus the toast to show.
///
/// Any failure empties the list. A 404 only means the course has nobody
/// enrolled yet, so its toast is informative rather than destructive.
pub fn report_outcome(result: Result<Vec<Student>, ApiError>) -> (Vec<Student>, Option<Toast>) {
    match result {
        Ok(students) => (students, None),
        Err(e) if e.is_status(404) => (
            Vec::new(),
            Some(Toast::success(
                "Nenhum aluno encontrado",
                "Este curso ainda não possui alunos matriculados.",
            )),
        ),
        Err(_) => (
            Vec::new(),
            Some(Toast::destructive(
                "Erro ao buscar relatório",
                "Não foi possível carregar os alunos matriculados.",
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_student::aggregate::StudentId;

    #[test]
    fn conflict_uses_server_text() {
        let err = ApiError::from_response(409, "Aluno já matriculado neste curso.");
        let toast = enroll_failed(&err);
        assert!(toast.is_destructive());
        assert_eq!(toast.description, "Aluno já matriculado neste curso.");
    }

    #[test]
    fn conflict_without_text_has_default() {
        let err = ApiError::from_response(409, "");
        assert_eq!(enroll_failed(&err).description, ALREADY_ENROLLED);
    }

    #[test]
    fn conflict_reads_structured_message() {
        let err = ApiError::from_response(409, r#"{"message":"Duplicada"}"#);
        assert_eq!(enroll_failed(&err).description, "Duplicada");
    }

    #[test]
    fn other_enroll_failures() {
        let err = ApiError::from_response(400, "Curso lotado");
        assert_eq!(enroll_failed(&err).description, "Curso lotado");

        let err = ApiError::NoResponse("offline".into());
        assert_eq!(enroll_failed(&err).description, ENROLL_FAILED_GENERIC);
    }

    #[test]
    fn rejected_enrollment_leaves_state_alone() {
        let (toast, refresh) =
            enroll_outcome(&Err(ApiError::from_response(409, "Aluno já matriculado neste curso.")));
        assert!(toast.is_destructive());
        assert_eq!(toast.description, "Aluno já matriculado neste curso.");
        assert!(!refresh);
    }

    #[test]
    fn accepted_enrollment_refreshes() {
        let (toast, refresh) = enroll_outcome(&Ok(()));
        assert!(!toast.is_destructive());
        assert_eq!(toast.title, "Matrícula realizada!");
        assert!(refresh);
    }

    #[test]
    fn unenroll_outcomes() {
        let (toast, refresh) = unenroll_outcome(&Err(ApiError::from_response(404, "")));
        assert_eq!(toast.description, ENROLLMENT_NOT_FOUND);
        assert!(!refresh);

        let (toast, refresh) = unenroll_outcome(&Ok(()));
        assert_eq!(toast.title, "Matrícula cancelada!");
        assert!(refresh);
    }

    #[test]
    fn unenroll_not_found() {
        let err = ApiError::from_response(404, "");
        assert_eq!(unenroll_failed(&err).description, ENROLLMENT_NOT_FOUND);

        let err = ApiError::from_response(404, "Matrícula inexistente");
        assert_eq!(unenroll_failed(&err).description, "Matrícula inexistente");

        let err = ApiError::from_response(500, "");
        assert_eq!(unenroll_failed(&err).description, UNENROLL_FAILED_GENERIC);
    }

    #[test]
    fn report_not_found_is_informative() {
        let (students, toast) = report_outcome(Err(ApiError::from_response(404, "")));
        assert!(students.is_empty());
        let toast = toast.unwrap();
        assert!(!toast.is_destructive());
        assert_eq!(toast.title, "Nenhum aluno encontrado");
    }

    #[test]
    fn report_other_failure_is_destructive() {
        let (students, toast) = report_outcome(Err(ApiError::NoResponse("offline".into())));
        assert!(students.is_empty());
        let toast = toast.unwrap();
        assert!(toast.is_destructive());
        assert_eq!(toast.title, "Erro ao buscar relatório");
    }

    #[test]
    fn report_success_is_silent() {
        let student = Student {
            id: StudentId(1),
            name: "Ana".into(),
            email: "ana@x.com".into(),
            birth_date: "2000-01-01".into(),
            age: None,
            enrollments: None,
        };
        let (students, toast) = report_outcome(Ok(vec![student.clone()]));
        assert_eq!(students, vec![student]);
        assert!(toast.is_none());
    }
}
