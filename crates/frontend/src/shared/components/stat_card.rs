use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour accent of a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Accent,
    Info,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Accent => "stat-card stat-card--accent",
            StatTone::Info => "stat-card stat-card--info",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Count to display
    #[prop(into)]
    value: Signal<usize>,
    #[prop(optional)]
    tone: StatTone,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
        </div>
    }
}
