//! Strip of per-status document counts above the board.

use kanban::KanbanStatus;
use leptos::prelude::*;

use crate::components::status_badge::icon_class;
use crate::state::board::BoardState;

/// Total plus one tile per status, counted over the filtered cards.
#[component]
pub fn StatsOverview() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let stats = Memo::new(move |_| board.with(BoardState::stats));

    let tiles = KanbanStatus::ALL
        .into_iter()
        .map(|status| {
            let config = status.config();
            view! {
                <div class="stats-overview__tile" style=format!("border-top: 3px solid {};", config.color)>
                    <span class="stats-overview__label">
                        <span class=icon_class(config.icon) aria-hidden="true"></span>
                        {config.label}
                    </span>
                    <span class="stats-overview__value" style=format!("color: {};", config.color)>
                        {move || stats.with(|s| s.count(status))}
                    </span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="stats-overview">
            <div class="stats-overview__tile stats-overview__tile--total">
                <span class="stats-overview__label">"Total"</span>
                <span class="stats-overview__value">{move || stats.with(|s| s.total)}</span>
            </div>
            {tiles}
        </div>
    }
}
