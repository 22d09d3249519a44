use crate::domain::a003_enrollment::{api, feedback};
use crate::shared::components::ui::{Badge, Select};
use crate::shared::date_utils;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_course::aggregate::{Course, CourseId};
use contracts::domain::a002_student::aggregate::Student;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

/// "Students per course" report.
///
/// `enrolled` is owned by the page so the stat cards can count it.
#[component]
#[allow(non_snake_case)]
pub fn EnrollmentReport(
    #[prop(into)] courses: Signal<Vec<Course>>,
    enrolled: RwSignal<Vec<Student>>,
) -> impl IntoView {
    let toast = use_toast();
    let selected = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);

    let course_options = Signal::derive(move || {
        courses.with(|list| {
            list.iter()
                .map(|c| (c.id.as_string(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let selected_name = move || {
        let id = selected.get();
        courses.with(|list| {
            list.iter()
                .find(|c| c.id.as_string() == id)
                .map(|c| c.name.clone())
                .unwrap_or_default()
        })
    };

    let on_select = Callback::new(move |value: String| {
        selected.set(value.clone());
        let Ok(course_id) = CourseId::from_string(&value) else {
            enrolled.set(Vec::new());
            return;
        };

        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_students_by_course(course_id).await;
            // A newer selection owns the list now
            if selected.try_get_untracked().as_deref() != Some(value.as_str()) {
                return;
            }
            let (students, toast_msg) = feedback::report_outcome(result);
            enrolled.try_set(students);
            if let Some(msg) = toast_msg {
                toast.show(msg);
            }
            set_loading.try_set(false);
        });
    });

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{icon("report")} "Relatório de Alunos por Curso"</h2>
                <p class="card__description">"Selecione um curso para ver os alunos matriculados"</p>
            </div>
            <div class="card__content">
                <Select
                    id="relatorioCurso"
                    label="Selecionar Curso para Relatório"
                    placeholder="Selecione um curso para ver os alunos"
                    value=selected
                    on_change=on_select
                    options=course_options
                />

                <Show when=move || !selected.with(String::is_empty)>
                    <h4 class="report__title">
                        {move || format!("Alunos matriculados em: {}", selected_name())}
                    </h4>
                    {move || {
                        if loading.get() {
                            view! { <div class="loading">"Carregando alunos..."</div> }.into_any()
                        } else if enrolled.with(Vec::is_empty) {
                            view! {
                                <div class="empty-state">"Nenhum aluno matriculado neste curso ainda."</div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <Table>
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"Nome"</TableHeaderCell>
                                            <TableHeaderCell>"Email"</TableHeaderCell>
                                            <TableHeaderCell>"Data de Nascimento"</TableHeaderCell>
                                            <TableHeaderCell>"Status"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {enrolled.get().into_iter().map(|student| {
                                            let birth_date = date_utils::format_date(&student.birth_date);
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {icon("students")}
                                                            {student.name}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{student.email}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{birth_date}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <Badge variant="secondary">"Matriculado"</Badge>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            }
                            .into_any()
                        }
                    }}
                </Show>
            </div>
        </div>
    }
}
