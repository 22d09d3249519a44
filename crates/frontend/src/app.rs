use crate::routes::AppRoutes;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are raised from every screen and rendered once by the shell
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
