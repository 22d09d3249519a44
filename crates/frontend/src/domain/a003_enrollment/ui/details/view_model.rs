use crate::domain::a003_enrollment::{api, feedback};
use crate::shared::toast::ToastService;
use contracts::domain::a003_enrollment::aggregate::EnrollForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the "new enrollment" form
#[derive(Clone, Copy)]
pub struct EnrollmentDetailsViewModel {
    pub form: RwSignal<EnrollForm>,
    pub saving: RwSignal<bool>,
}

impl EnrollmentDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EnrollForm::default()),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(EnrollForm::is_complete) && !self.saving.get()
    }

    /// One POST per submission. Duplicates are left to the server (409).
    pub fn enroll_command(&self, toast: ToastService, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }

        let dto = match self.form.with_untracked(EnrollForm::to_dto) {
            Ok(dto) => dto,
            Err(e) => {
                toast.show(feedback::invalid_form(&e));
                return;
            }
        };

        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            let (msg, accepted) = feedback::enroll_outcome(&api::enroll(&dto).await);
            toast.show(msg);
            if accepted {
                on_saved.run(());
            }
            saving.try_set(false);
        });
    }
}

impl Default for EnrollmentDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
