use super::view_model::EnrollmentDetailsViewModel;
use crate::shared::components::ui::{Button, Select};
use crate::shared::toast::use_toast;
use contracts::domain::a001_course::aggregate::Course;
use contracts::domain::a002_student::aggregate::Student;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
pub fn EnrollmentDetails(
    #[prop(into)] students: Signal<Vec<Student>>,
    #[prop(into)] courses: Signal<Vec<Course>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EnrollmentDetailsViewModel::new();
    let toast = use_toast();

    let student_options = Signal::derive(move || {
        students.with(|list| {
            list.iter()
                .map(|s| (s.id.as_string(), format!("{} - {}", s.name, s.email)))
                .collect::<Vec<_>>()
        })
    });
    let course_options = Signal::derive(move || {
        courses.with(|list| {
            list.iter()
                .map(|c| (c.id.as_string(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.enroll_command(toast, on_saved);
    };

    view! {
        <form class="details-form" on:submit=on_submit>
            <Select
                id="alunoId"
                label="Aluno"
                placeholder="Selecione um aluno"
                empty_label="Nenhum aluno cadastrado"
                value=Signal::derive(move || vm.form.with(|f| f.student_id.clone()))
                on_change=Callback::new(move |v: String| vm.form.update(|f| f.student_id = v))
                options=student_options
            />
            <Select
                id="cursoId"
                label="Curso"
                placeholder="Selecione um curso"
                empty_label="Nenhum curso cadastrado"
                value=Signal::derive(move || vm.form.with(|f| f.course_id.clone()))
                on_change=Callback::new(move |v: String| vm.form.update(|f| f.course_id = v))
                options=course_options
            />

            <div class="details-actions">
                <Button button_type="submit" disabled=Signal::derive(move || !vm.is_form_valid())>
                    "Realizar Matrícula"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancelar"
                </Button>
            </div>
        </form>
    }
}
