//! Toasts of the student screen.

use contracts::shared::{ApiError, ValidationError};

use crate::shared::toast::Toast;

const SAVE_FAILED_TITLE: &str = "Erro ao salvar aluno";
const SAVE_FAILED_GENERIC: &str =
    "Não foi possível salvar o aluno. Verifique os dados e tente novamente.";
const SAVE_FAILED_BAD_REQUEST: &str = "Dados inválidos. Verifique se o aluno é maior de idade.";

pub fn load_failed(_err: &ApiError) -> Toast {
    Toast::destructive(
        "Erro ao carregar alunos",
        "Não foi possível carregar a lista de alunos. Tente novamente.",
    )
}

pub fn saved(editing: bool) -> Toast {
    if editing {
        Toast::success(
            "Aluno atualizado!",
            "As informações do aluno foram atualizadas com sucesso.",
        )
    } else {
        Toast::success("Aluno cadastrado!", "O novo aluno foi adicionado ao sistema.")
    }
}

/// A plain-text server reason wins over any status-based message.
pub fn save_failed(err: &ApiError) -> Toast {
    let description = match err.server_text() {
        Some(text) => text.to_string(),
        None if err.is_status(400) => SAVE_FAILED_BAD_REQUEST.to_string(),
        None => SAVE_FAILED_GENERIC.to_string(),
    };
    Toast::destructive(SAVE_FAILED_TITLE, description)
}

pub fn invalid_form(err: &ValidationError) -> Toast {
    Toast::destructive(SAVE_FAILED_TITLE, err.to_string())
}

pub fn deleted() -> Toast {
    Toast::success(
        "Aluno excluído!",
        "O aluno foi removido do sistema com sucesso.",
    )
}

pub fn delete_failed(_err: &ApiError) -> Toast {
    Toast::destructive(
        "Erro ao excluir aluno",
        "Não foi possível excluir o aluno. Verifique se não há matrículas associadas.",
    )
}

pub fn delete_prompt(name: &str) -> String {
    format!(
        "Tem certeza que deseja excluir o aluno \"{}\"? Esta ação não pode ser desfeita.",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_text_is_shown_verbatim() {
        let err = ApiError::from_response(400, "Aluno deve ser maior de idade.");
        let toast = save_failed(&err);
        assert!(toast.is_destructive());
        assert_eq!(toast.title, "Erro ao salvar aluno");
        assert_eq!(toast.description, "Aluno deve ser maior de idade.");
    }

    #[test]
    fn quoted_json_reason_is_unquoted() {
        let err = ApiError::from_response(400, r#""Email já cadastrado""#);
        assert_eq!(save_failed(&err).description, "Email já cadastrado");
    }

    #[test]
    fn bad_request_without_text_hints_at_age() {
        let err = ApiError::from_response(400, r#"{"errors":{"Nome":["obrigatório"]}}"#);
        assert_eq!(save_failed(&err).description, SAVE_FAILED_BAD_REQUEST);

        let err = ApiError::from_response(400, "");
        assert_eq!(save_failed(&err).description, SAVE_FAILED_BAD_REQUEST);
    }

    #[test]
    fn other_failures_are_generic() {
        let err = ApiError::from_response(500, "");
        assert_eq!(save_failed(&err).description, SAVE_FAILED_GENERIC);

        let err = ApiError::NoResponse("offline".into());
        assert_eq!(save_failed(&err).description, SAVE_FAILED_GENERIC);
    }

    #[test]
    fn future_birth_date_is_reported_before_any_request() {
        let toast = invalid_form(&ValidationError::BirthDateInFuture);
        assert!(toast.is_destructive());
        assert!(toast.description.contains("posterior a hoje"));
    }

    #[test]
    fn delete_failure_mentions_enrollments() {
        let toast = delete_failed(&ApiError::from_response(409, "conflict"));
        assert!(toast.description.ends_with("Verifique se não há matrículas associadas."));
        assert!(!deleted().is_destructive());
    }
}
