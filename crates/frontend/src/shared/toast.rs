//! Transient notifications.
//!
//! Pages never surface a failed request any other way: every request site
//! turns its outcome into a [`Toast`] and keeps its previous state.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// How long a toast stays on screen unless dismissed
const TOAST_DURATION_MS: u32 = 5_000;

/// Older toasts are dropped beyond this
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: Uuid,
    pub toast: Toast,
}

/// Push `entry` and drop the oldest entries past `MAX_VISIBLE`.
fn push_bounded(entries: &mut Vec<ToastEntry>, entry: ToastEntry) {
    entries.push(entry);
    if entries.len() > MAX_VISIBLE {
        let excess = entries.len() - MAX_VISIBLE;
        entries.drain(..excess);
    }
}

/// Toast stack shared through context
#[derive(Clone, Copy)]
pub struct ToastService {
    entries: RwSignal<Vec<ToastEntry>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
        }
    }

    /// Show a toast and schedule its dismissal
    pub fn show(&self, toast: Toast) {
        let id = Uuid::new_v4();
        if toast.is_destructive() {
            log::warn!("toast: {} - {}", toast.title, toast.description);
        } else {
            log::info!("toast: {} - {}", toast.title, toast.description);
        }
        self.entries
            .update(|entries| push_bounded(entries, ToastEntry { id, toast }));

        let entries = self.entries;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            entries.try_update(|list| list.retain(|e| e.id != id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.entries.update(|list| list.retain(|e| e.id != id));
    }

    pub fn entries(&self) -> Vec<ToastEntry> {
        self.entries.get()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast service from context. Panics outside `App`.
pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack; mounted once by the shell
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || service.entries()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let class = match entry.toast.variant {
                        ToastVariant::Destructive => "toast toast--destructive",
                        ToastVariant::Default => "toast",
                    };
                    view! {
                        <div class=class on:click=move |_| service.dismiss(id)>
                            <div class="toast__title">{entry.toast.title}</div>
                            <div class="toast__description">{entry.toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: u128) -> ToastEntry {
        ToastEntry {
            id: Uuid::from_u128(n),
            toast: Toast::success(format!("t{n}"), ""),
        }
    }

    #[test]
    fn constructors_set_variant() {
        assert!(!Toast::success("a", "b").is_destructive());
        assert!(Toast::destructive("a", "b").is_destructive());
        assert_eq!(ToastVariant::default(), ToastVariant::Default);
    }

    #[test]
    fn stack_keeps_newest() {
        let mut list = Vec::new();
        for n in 1..=5 {
            push_bounded(&mut list, entry(n));
        }
        let ids: Vec<u128> = list.iter().map(|e| e.id.as_u128()).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }
}
