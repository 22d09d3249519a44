use crate::domain::a001_course::ui::details::CourseDetails;
use crate::domain::a001_course::{api, feedback};
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::PageHeader;
use crate::shared::confirm_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{aggregate_page_id, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;
use contracts::domain::a001_course::aggregate::Course;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

#[component]
#[allow(non_snake_case)]
pub fn CourseList() -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<Course>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (show_modal, set_show_modal) = signal(false);
    let (editing, set_editing) = signal::<Option<Course>>(None);
    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<Course>);

    // A failed load keeps whatever was listed before
    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_courses().await {
                Ok(courses) => {
                    set_items.try_set(courses);
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

    let open_edit = move |course: Course| {
        set_editing.set(Some(course));
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

    let ask_delete = move |course: Course| {
        pending_delete.set(Some(course));
        confirm_open.set(true);
    };

    let on_delete_confirm = Callback::new(move |_| {
        let Some(course) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_course(course.id).await {
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

    fetch();

    view! {
        <PageFrame page_id={aggregate_page_id::<Course>(PAGE_CAT_LIST)} category=PAGE_CAT_LIST>
            <PageHeader title="Gerenciamento de Cursos" subtitle="Gerencie todos os cursos disponíveis">
                <Button on_click=Callback::new(move |_| open_create())>
                    {icon("plus")}
                    "Novo Curso"
                </Button>
            </PageHeader>

            {move || show_modal.get().then(|| {
                let course = editing.get_untracked();
                let (title, subtitle) = if course.is_some() {
                    ("Editar Curso", "Atualize as informações do curso")
                } else {
                    ("Novo Curso", "Preencha os dados do novo curso")
                };
                view! {
                    <Modal title=title.to_string() subtitle=subtitle on_close=close_modal>
                        <CourseDetails course=course on_saved=on_saved on_cancel=close_modal />
                    </Modal>
                }
            })}

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">{icon("courses")} "Cursos Cadastrados"</h2>
                    <p class="card__description">
                        {move || format!("Total de {} cursos disponíveis", items.with(Vec::len))}
                    </p>
                </div>
                <div class="card__content">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="loading">"Carregando cursos..."</div> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Nome"</TableHeaderCell>
                                    <TableHeaderCell>"Descrição"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Ações"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || items.get().into_iter().map(|course| {
                                    let for_edit = course.clone();
                                    let for_delete = course.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{course.name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{course.description}</TableCellLayout>
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
                title="Excluir Curso"
                description=delete_prompt
                on_confirm=on_delete_confirm
                confirm_text="Excluir"
                cancel_text="Cancelar"
            />
        </PageFrame>
    }
}
