use super::view_model::StudentDetailsViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::shared::date_utils;
use crate::shared::toast::use_toast;
use contracts::domain::a002_student::aggregate::Student;
use leptos::prelude::*;

#[component]
pub fn StudentDetails(
    student: Option<Student>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = StudentDetailsViewModel::new(student.as_ref());
    let toast = use_toast();
    let max_birth_date = date_utils::today_iso();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(toast, on_saved);
    };

    view! {
        <form class="details-form" on:submit=on_submit>
            <Input
                id="nome"
                label="Nome Completo"
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                required=true
            />
            <Input
                id="email"
                label="Email"
                input_type="email"
                value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.email = v))
                required=true
            />
            <Input
                id="dataNascimento"
                label="Data de Nascimento"
                input_type="date"
                max=max_birth_date
                value=Signal::derive(move || vm.form.with(|f| f.birth_date.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.birth_date = v))
                required=true
            />

            <div class="details-actions">
                <Button button_type="submit" disabled=Signal::derive(move || !vm.is_form_valid())>
                    {move || if vm.is_edit_mode() { "Atualizar Aluno" } else { "Cadastrar Aluno" }}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancelar"
                </Button>
            </div>
        </form>
    }
}
