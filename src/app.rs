//! Task Board App
//!
//! Page shell: heading and a horizontally scrolling board area.

use leptos::prelude::*;

use crate::components::BoardView;
use crate::config::BoardConfig;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let initial_board = config.initial_board();
    let BoardConfig { title, drag_threshold_px, .. } = config;

    view! {
        <div class="app-shell">
            <h1 class="app-title">{title}</h1>
            <div class="board-scroll">
                <BoardView
                    initial_board=initial_board
                    drag_threshold_px=drag_threshold_px
                />
            </div>
        </div>
    }
}
