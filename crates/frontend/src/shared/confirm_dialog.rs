use crate::shared::components::ui::Button;
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Yes/no dialog in front of a destructive action.
///
/// Rendered only while `open` is true. Cancelling, closing or confirming
/// all reset `open`; `on_confirm` runs before that.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] description: Signal<String>,
    on_confirm: Callback<()>,
    #[prop(optional, into)] confirm_text: MaybeProp<String>,
    #[prop(optional, into)] cancel_text: MaybeProp<String>,
) -> impl IntoView {
    let close = Callback::new(move |_| open.set(false));

    move || {
        open.get().then(|| {
            let title = title.clone();
            let confirm_label = confirm_text.get().unwrap_or_else(|| "Confirmar".to_string());
            let cancel_label = cancel_text.get().unwrap_or_else(|| "Cancelar".to_string());
            view! {
                <Modal title=title on_close=close>
                    <p class="confirm-dialog__description">{move || description.get()}</p>
                    <div class="confirm-dialog__actions">
                        <Button variant="secondary" on_click=Callback::new(move |_| close.run(()))>
                            {cancel_label}
                        </Button>
                        <Button
                            variant="destructive"
                            on_click=Callback::new(move |_| {
                                on_confirm.run(());
                                close.run(());
                            })
                        >
                            {confirm_label}
                        </Button>
                    </div>
                </Modal>
            }
        })
    }
}
