//! Toasts of the course screen.
//!
//! Course failures never show server text: every error collapses to a fixed
//! message per operation.

use contracts::shared::validation::ValidationError;
use contracts::shared::ApiError;

use crate::shared::toast::Toast;

pub fn load_failed(_err: &ApiError) -> Toast {
    Toast::destructive(
        "Erro ao carregar cursos",
        "Não foi possível carregar a lista de cursos. Tente novamente.",
    )
}

pub fn saved(editing: bool) -> Toast {
    if editing {
        Toast::success(
            "Curso atualizado!",
            "As informações do curso foram atualizadas com sucesso.",
        )
    } else {
        Toast::success("Curso criado!", "O novo curso foi adicionado ao sistema.")
    }
}

pub fn save_failed(_err: &ApiError) -> Toast {
    Toast::destructive(
        "Erro ao salvar curso",
        "Não foi possível salvar o curso. Verifique os dados e tente novamente.",
    )
}

pub fn invalid_form(err: &ValidationError) -> Toast {
    Toast::destructive("Erro ao salvar curso", err.to_string())
}

pub fn deleted() -> Toast {
    Toast::success(
        "Curso excluído!",
        "O curso foi removido do sistema com sucesso.",
    )
}

pub fn delete_failed(_err: &ApiError) -> Toast {
    Toast::destructive(
        "Erro ao excluir curso",
        "Não foi possível excluir o curso. Verifique se não há matrículas associadas.",
    )
}

/// Body of the delete confirmation
pub fn delete_prompt(name: &str) -> String {
    format!(
        "Tem certeza que deseja excluir o curso \"{}\"? Esta ação não pode ser desfeita.",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_failure_ignores_server_text() {
        let err = ApiError::from_response(400, "Nome já existe");
        let toast = save_failed(&err);
        assert!(toast.is_destructive());
        assert!(toast.description.starts_with("Não foi possível salvar o curso"));
    }

    #[test]
    fn delete_failure_mentions_enrollments() {
        let toast = delete_failed(&ApiError::NoResponse("offline".into()));
        assert!(toast.is_destructive());
        assert!(toast.description.ends_with("Verifique se não há matrículas associadas."));
    }

    #[test]
    fn success_toasts_are_not_destructive() {
        assert!(!saved(true).is_destructive());
        assert_eq!(saved(false).title, "Curso criado!");
        assert!(!deleted().is_destructive());
    }

    #[test]
    fn prompt_quotes_course_name() {
        assert!(delete_prompt("Rust").contains("\"Rust\""));
    }
}
