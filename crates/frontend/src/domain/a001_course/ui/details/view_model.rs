use crate::domain::a001_course::{api, feedback};
use crate::shared::toast::ToastService;
use contracts::domain::a001_course::aggregate::{Course, CourseForm, CourseId};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the course create/edit form
#[derive(Clone, Copy)]
pub struct CourseDetailsViewModel {
    pub form: RwSignal<CourseForm>,
    pub editing: RwSignal<Option<CourseId>>,
    pub saving: RwSignal<bool>,
}

impl CourseDetailsViewModel {
    pub fn new(course: Option<&Course>) -> Self {
        Self {
            form: RwSignal::new(course.map(CourseForm::from_course).unwrap_or_default()),
            editing: RwSignal::new(course.map(|c| c.id)),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.get().is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(CourseForm::is_complete) && !self.saving.get()
    }

    /// Validate, send one POST or PUT, then report through `toast`.
    ///
    /// `on_saved` runs only after the server accepted the change.
    pub fn save_command(&self, toast: ToastService, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }

        let dto = match self.form.with_untracked(CourseForm::to_dto) {
            Ok(dto) => dto,
            Err(e) => {
                toast.show(feedback::invalid_form(&e));
                return;
            }
        };

        let id = self.editing.get_untracked();
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::save_course(id, &dto).await {
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
