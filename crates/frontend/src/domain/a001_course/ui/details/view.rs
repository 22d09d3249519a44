use super::view_model::CourseDetailsViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::shared::toast::use_toast;
use contracts::domain::a001_course::aggregate::Course;
use leptos::prelude::*;

#[component]
pub fn CourseDetails(
    course: Option<Course>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CourseDetailsViewModel::new(course.as_ref());
    let toast = use_toast();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(toast, on_saved);
    };

    view! {
        <form class="details-form" on:submit=on_submit>
            <Input
                id="nome"
                label="Nome do Curso"
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                required=true
            />
            <Input
                id="descricao"
                label="Descrição"
                value=Signal::derive(move || vm.form.with(|f| f.description.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.description = v))
                required=true
            />

            <div class="details-actions">
                <Button button_type="submit" disabled=Signal::derive(move || !vm.is_form_valid())>
                    {move || if vm.is_edit_mode() { "Atualizar Curso" } else { "Criar Curso" }}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancelar"
                </Button>
            </div>
        </form>
    }
}
