use crate::domain::a001_course::ui::list::CourseList;
use crate::domain::a002_student::ui::list::StudentList;
use crate::domain::a003_enrollment::ui::list::EnrollmentList;
use crate::layout::Shell;
use crate::pages::{HomePage, NotFoundPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/cursos") view=CourseList />
                    <Route path=path!("/alunos") view=StudentList />
                    <Route path=path!("/matriculas") view=EnrollmentList />
                </Routes>
            </Shell>
        </Router>
    }
}
