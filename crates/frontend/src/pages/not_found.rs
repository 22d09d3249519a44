use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--custom" category=PAGE_CAT_CUSTOM>
            <div class="card card--notice">
                <h2 class="card__title">"Página não encontrada"</h2>
                <p class="card__description">"O endereço acessado não existe."</p>
                <A href="/">"Voltar para o início"</A>
            </div>
        </PageFrame>
    }
}
