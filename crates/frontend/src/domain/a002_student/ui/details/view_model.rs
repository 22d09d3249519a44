use crate::domain::a002_student::{api, feedback};
use crate::shared::date_utils;
use crate::shared::toast::ToastService;
use contracts::domain::a002_student::aggregate::{Student, StudentForm, StudentId};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the student create/edit form
#[derive(Clone, Copy)]
pub struct StudentDetailsViewModel {
    pub form: RwSignal<StudentForm>,
    pub editing: RwSignal<Option<StudentId>>,
    pub saving: RwSignal<bool>,
}

impl StudentDetailsViewModel {
    pub fn new(student: Option<&Student>) -> Self {
        Self {
            form: RwSignal::new(student.map(StudentForm::from_student).unwrap_or_default()),
            editing: RwSignal::new(student.map(|s| s.id)),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.get().is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(StudentForm::is_complete) && !self.saving.get()
    }

    /// Validate against today's date, then send one POST or PUT.
    ///
    /// A birth date after today never leaves the browser.
    pub fn save_command(&self, toast: ToastService, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }

        let today = date_utils::today();
        let dto = match self.form.with_untracked(|f| f.to_dto(today)) {
            Ok(dto) => dto,
            Err(e) => {
                log::debug!("student form rejected: {}", e);
                toast.show(feedback::invalid_form(&e));
                return;
            }
        };

        let id = self.editing.get_untracked();
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::save_student(id, &dto).await {
                Ok(()) => {
                    toast.show(feedback::saved(id.is_some()));
                    on_saved.run(());
                }
                Err(e) => toast.show(feedback::save_failed(&e)),
            }
            saving.try_set(false);
        });
    }
}
