use crate::domain::a002_student::ui::details::StudentDetails;
use crate::domain::a002_student::{api, feedback};
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::PageHeader;
use crate::shared::confirm_dialog::ConfirmDialog;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{aggregate_page_id, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;
use contracts::domain::a002_student::aggregate::Student;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

#[component]
#[allow(non_snake_case)]
pub fn StudentList() -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<Student>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (show_modal, set_show_modal) = signal(false);
    let (editing, set_editing) = signal::<Option<Student>>(None);
    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<Student>);

    // A failed load keeps whatever was listed before
    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_students().await {
                Ok(students) => {
                    set_items.try_set(students);
                }
                Err(e) => toast.show(feedback::load_failed(&e)),
            }
            set_loading.try_set(false);
        });
    };

    let open_create = move || {
        set_editing.set(None);
        set_show_modal.set(true);
    };

    let open_edit = move |student: Student| {
        set_editing.set(Some(student));
        set_show_modal.set(true);
    };

    let close_modal = Callback::new(move |_| {
        set_show_modal.set(false);
        set_editing.set(None);
    });

    let on_saved = Callback::new(move |_| {
        close_modal.run(());
        fetch();
    });

    let ask_delete = move |student: Student| {
        pending_delete.set(Some(student));
        confirm_open.set(true);
    };

    let on_delete_confirm = Callback::new(move |_| {
        let Some(student) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_student(student.id).await {
                Ok(()) => {
                    toast.show(feedback::deleted());
                    fetch();
                }
                Err(e) => toast.show(feedback::delete_failed(&e)),
            }
            pending_delete.try_set(None);
        });
    });

    let delete_prompt = Signal::derive(move || {
        pending_delete.with(|c| {
            c.as_ref()
                .map(|c| feedback::delete_prompt(&c.name))
                .unwrap_or_default()
        })
    });

    let today = date_utils::today();

    fetch();

    view! {
        <PageFrame page_id={aggregate_page_id::<Student>(PAGE_CAT_LIST)} category=PAGE_CAT_LIST>
            <PageHeader title="Gerenciamento de Alunos" subtitle="Gerencie todos os alunos cadastrados">
                <Button on_click=Callback::new(move |_| open_create())>
                    {icon("plus")}
                    "Novo Aluno"
                </Button>
            </PageHeader>

            {move || show_modal.get().then(|| {
                let student = editing.get_untracked();
                let (title, subtitle) = if student.is_some() {
                    ("Editar Aluno", "Atualize as informações do aluno")
                } else {
                    ("Novo Aluno", "Preencha os dados do novo aluno")
                };
                view! {
                    <Modal title=title.to_string() subtitle=subtitle on_close=close_modal>
                        <StudentDetails student=student on_saved=on_saved on_cancel=close_modal />
                    </Modal>
                }
            })}

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">{icon("students")} "Alunos Cadastrados"</h2>
                    <p class="card__description">
                        {move || format!("Total de {} alunos no sistema", items.with(Vec::len))}
                    </p>
                </div>
                <div class="card__content">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="loading">"Carregando alunos..."</div> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Nome"</TableHeaderCell>
                                    <TableHeaderCell>"Email"</TableHeaderCell>
                                    <TableHeaderCell>"Data de Nascimento"</TableHeaderCell>
                                    <TableHeaderCell>"Idade"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Ações"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || items.get().into_iter().map(|student| {
                                    let age = student
                                        .age_at(today)
                                        .map(|a| format!("{} anos", a))
                                        .unwrap_or_default();
                                    let birth_date = date_utils::format_date(&student.birth_date);
                                    let for_edit = student.clone();
                                    let for_delete = student.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{student.name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{student.email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{birth_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{age}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant="secondary">"Ativo"</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="table__actions">
                                                        <Button
                                                            variant="secondary"
                                                            size="sm"
                                                            title="Editar"
                                                            on_click=Callback::new(move |_| open_edit(for_edit.clone()))
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            variant="destructive"
                                                            size="sm"
                                                            title="Excluir"
                                                            on_click=Callback::new(move |_| ask_delete(for_delete.clone()))
                                                        >
                                                            {icon("delete")}
                                                        </Button>
                                                    </div>
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

            <ConfirmDialog
                open=confirm_open
                title="Excluir Aluno"
                description=delete_prompt
                on_confirm=on_delete_confirm
                confirm_text="Excluir"
                cancel_text="Cancelar"
            />
        </PageFrame>
    }
}
