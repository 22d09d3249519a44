use crate::domain::a003_enrollment::api::{self, PageData};
use crate::domain::a003_enrollment::feedback;
use crate::domain::a003_enrollment::ui::details::EnrollmentDetails;
use crate::domain::a003_enrollment::ui::report::EnrollmentReport;
use crate::shared::components::ui::Button;
use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::confirm_dialog::ConfirmDialog;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{aggregate_page_id, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;
use contracts::domain::a001_course::aggregate::Course;
use contracts::domain::a002_student::aggregate::Student;
use contracts::domain::a003_enrollment::aggregate::{EnrollDto, Enrollment};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

/// One line of the enrollment table, with names resolved
#[derive(Clone, Debug, PartialEq)]
pub struct EnrollmentRow {
    pub dto: EnrollDto,
    pub student_name: String,
    pub student_email: String,
    pub course_name: String,
    pub enrolled_at: String,
}

impl EnrollmentRow {
    /// Prefer the records embedded by the server, then the loaded lists,
    /// then a placeholder built from the id.
    pub fn resolve(enrollment: &Enrollment, students: &[Student], courses: &[Course]) -> Self {
        let student = enrollment
            .student
            .as_deref()
            .or_else(|| students.iter().find(|s| s.id == enrollment.student_id));
        let course = enrollment
            .course
            .as_deref()
            .or_else(|| courses.iter().find(|c| c.id == enrollment.course_id));

        Self {
            dto: enrollment.unenroll_dto(),
            student_name: student
                .map(|s| s.name.clone())
                .unwrap_or_else(|| format!("Aluno #{}", enrollment.student_id.value())),
            student_email: student.map(|s| s.email.clone()).unwrap_or_default(),
            course_name: course
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("Curso #{}", enrollment.course_id.value())),
            enrolled_at: if enrollment.enrolled_at.is_empty() {
                "-".to_string()
            } else {
                date_utils::format_date(&enrollment.enrolled_at)
            },
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EnrollmentList() -> impl IntoView {
    let toast = use_toast();
    let students = RwSignal::new(Vec::<Student>::new());
    let courses = RwSignal::new(Vec::<Course>::new());
    let enrollments = RwSignal::new(Vec::<Enrollment>::new());
    let enrolled_in_report = RwSignal::new(Vec::<Student>::new());
    let (loading, set_loading) = signal(true);
    let (show_modal, set_show_modal) = signal(false);
    let confirm_open = RwSignal::new(false);
    let pending_unenroll = RwSignal::new(None::<EnrollmentRow>);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::load_page_data().await {
                Ok(PageData {
                    students: s,
                    courses: c,
                    enrollments: e,
                }) => {
                    students.try_set(s);
                    courses.try_set(c);
                    enrollments.try_set(e);
                }
                Err(e) => {
                    log::error!("Erro ao carregar dados: {}", e);
                    toast.show(feedback::page_load_failed(&e));
                }
            }
            set_loading.try_set(false);
        });
    };

    let refresh_enrollments = move || {
        spawn_local(async move {
            if let Some(list) = api::refreshed_enrollments(api::fetch_enrollments().await) {
                enrollments.try_set(list);
            }
        });
    };

    let close_modal = Callback::new(move |_| set_show_modal.set(false));
    let on_enrolled = Callback::new(move |_| {
        close_modal.run(());
        refresh_enrollments();
    });

    let rows = Memo::new(move |_| {
        let students = students.get();
        let courses = courses.get();
        enrollments.with(|list| {
            list.iter()
                .map(|e| EnrollmentRow::resolve(e, &students, &courses))
                .collect::<Vec<_>>()
        })
    });

    let ask_unenroll = move |row: EnrollmentRow| {
        pending_unenroll.set(Some(row));
        confirm_open.set(true);
    };

    let on_unenroll_confirm = Callback::new(move |_| {
        let Some(row) = pending_unenroll.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let (msg, removed) = feedback::unenroll_outcome(&api::unenroll(&row.dto).await);
            toast.show(msg);
            if removed {
                refresh_enrollments();
            }
            pending_unenroll.try_set(None);
        });
    });

    let unenroll_prompt = Signal::derive(move || {
        pending_unenroll.with(|row| {
            row.as_ref()
                .map(|r| feedback::unenroll_prompt(&r.student_name, &r.course_name))
                .unwrap_or_default()
        })
    });

    let missing_prerequisites =
        move || !loading.get() && (students.with(Vec::is_empty) || courses.with(Vec::is_empty));

    load();

    view! {
        <PageFrame page_id={aggregate_page_id::<Enrollment>(PAGE_CAT_LIST)} category=PAGE_CAT_LIST>
            <PageHeader title="Gerenciamento de Matrículas" subtitle="Gerencie matrículas e visualize relatórios">
                <Button on_click=Callback::new(move |_| set_show_modal.set(true))>
                    {icon("plus")}
                    "Nova Matrícula"
                </Button>
            </PageHeader>

            <Show when=missing_prerequisites>
                <div class="card card--notice">
                    <p>"Para criar matrículas, certifique-se de ter alunos e cursos cadastrados."</p>
                    <p class="card__description">
                        {move || format!(
                            "Alunos: {} | Cursos: {}",
                            students.with(Vec::len),
                            courses.with(Vec::len),
                        )}
                    </p>
                </div>
            </Show>

            <div class="stat-grid">
                <StatCard
                    label="Alunos Cadastrados"
                    icon_name="students"
                    value=Signal::derive(move || students.with(Vec::len))
                    tone=StatTone::Success
                />
                <StatCard
                    label="Cursos Disponíveis"
                    icon_name="courses"
                    value=Signal::derive(move || courses.with(Vec::len))
                    tone=StatTone::Accent
                />
                <StatCard
                    label="Matrículas"
                    icon_name="enrollments"
                    value=Signal::derive(move || enrollments.with(Vec::len))
                />
                <StatCard
                    label="Alunos no Curso Selecionado"
                    icon_name="report"
                    value=Signal::derive(move || enrolled_in_report.with(Vec::len))
                    tone=StatTone::Info
                />
            </div>

            {move || show_modal.get().then(|| view! {
                <Modal
                    title="Nova Matrícula".to_string()
                    subtitle="Selecione o aluno e o curso para realizar a matrícula"
                    on_close=close_modal
                >
                    <EnrollmentDetails
                        students=students
                        courses=courses
                        on_saved=on_enrolled
                        on_cancel=close_modal
                    />
                </Modal>
            })}

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">{icon("enrollments")} "Matrículas"</h2>
                    <p class="card__description">
                        {move || format!("Total de {} matrículas", enrollments.with(Vec::len))}
                    </p>
                </div>
                <div class="card__content">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="loading">"Carregando matrículas..."</div> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Aluno"</TableHeaderCell>
                                    <TableHeaderCell>"Email"</TableHeaderCell>
                                    <TableHeaderCell>"Curso"</TableHeaderCell>
                                    <TableHeaderCell>"Data da Matrícula"</TableHeaderCell>
                                    <TableHeaderCell>"Ações"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || rows.get().into_iter().map(|row| {
                                    let for_unenroll = row.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row.student_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.student_email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.course_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.enrolled_at}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        variant="destructive"
                                                        size="sm"
                                                        title="Desmatricular"
                                                        on_click=Callback::new(move |_| ask_unenroll(for_unenroll.clone()))
                                                    >
                                                        {icon("x")}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </Show>
                </div>
            </div>

            <EnrollmentReport courses=courses enrolled=enrolled_in_report />

            <ConfirmDialog
                open=confirm_open
                title="Cancelar Matrícula"
                description=unenroll_prompt
                on_confirm=on_unenroll_confirm
                confirm_text="Desmatricular"
                cancel_text="Voltar"
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_course::aggregate::CourseId;
    use contracts::domain::a002_student::aggregate::StudentId;

    fn student(id: i64, name: &str) -> Student {
        Student {
            id: StudentId(id),
            name: name.into(),
            email: format!("{}@x.com", name.to_lowercase()),
            birth_date: "2000-01-01".into(),
            age: None,
            enrollments: None,
        }
    }

    fn course(id: i64, name: &str) -> Course {
        Course {
            id: CourseId(id),
            name: name.into(),
            description: String::new(),
            enrollments: None,
        }
    }

    fn link(student_id: i64, course_id: i64) -> Enrollment {
        Enrollment {
            student_id: StudentId(student_id),
            course_id: CourseId(course_id),
            enrolled_at: "2024-02-01T10:00:00".into(),
            student: None,
            course: None,
        }
    }

    #[test]
    fn resolves_names_from_loaded_lists() {
        let row = EnrollmentRow::resolve(
            &link(1, 2),
            &[student(1, "Ana")],
            &[course(2, "Rust")],
        );
        assert_eq!(row.student_name, "Ana");
        assert_eq!(row.student_email, "ana@x.com");
        assert_eq!(row.course_name, "Rust");
        assert_eq!(row.enrolled_at, "01/02/2024");
        assert_eq!(row.dto, EnrollDto { student_id: StudentId(1), course_id: CourseId(2) });
    }

    #[test]
    fn embedded_records_win() {
        let mut enrollment = link(1, 2);
        enrollment.student = Some(Box::new(student(1, "Bruno")));
        let row = EnrollmentRow::resolve(&enrollment, &[student(1, "Ana")], &[]);
        assert_eq!(row.student_name, "Bruno");
        assert_eq!(row.course_name, "Curso #2");
    }

    #[test]
    fn unknown_ids_get_placeholders() {
        let mut enrollment = link(7, 9);
        enrollment.enrolled_at.clear();
        let row = EnrollmentRow::resolve(&enrollment, &[], &[]);
        assert_eq!(row.student_name, "Aluno #7");
        assert_eq!(row.student_email, "");
        assert_eq!(row.enrolled_at, "-");
    }
}
