//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::board::BoardPage;
use crate::state::{board::BoardState, drag::DragState, ui::UiState};
use crate::util::ui_persistence::load_overrides;

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing. Review
/// statuses recorded in earlier sessions are restored before the first fetch.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(BoardState::with_overrides(load_overrides()));
    let drag = RwSignal::new(DragState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(ClientConfig::default());
    provide_context(board);
    provide_context(drag);
    provide_context(ui);

    view! {
        <Stylesheet id="docboard" href="/pkg/docboard.css"/>
        <Title text="Document Board"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BoardPage/>
            </Routes>
        </Router>
    }
}
