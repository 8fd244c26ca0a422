//! Colored pill naming a kanban status.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use kanban::{KanbanStatus, StatusConfig};
use leptos::prelude::*;

/// Status label styled with the column's colors.
#[component]
pub fn StatusBadge(status: KanbanStatus, #[prop(optional)] show_icon: bool) -> impl IntoView {
    let config = status.config();
    view! {
        <span class="status-badge" data-status=status.as_str() style=badge_style(config)>
            <Show when=move || show_icon>
                <span class=icon_class(config.icon) aria-hidden="true"></span>
            </Show>
            {config.label}
        </span>
    }
}

pub(crate) fn badge_style(config: &StatusConfig) -> String {
    format!("color: {}; background-color: {}; border-color: {};", config.color, config.bg_color, config.color)
}

pub(crate) fn icon_class(icon: &str) -> String {
    format!("icon icon--{icon}")
}
