//! Board View Component
//!
//! Owns the board store and the drag session, and lays out the columns.
//! Uses leptos-dragdrop; a finished drag becomes a move on the store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Board;
use crate::components::{AddColumnDialog, BoardColumn, DragOverlay};
use crate::models::ItemId;
use crate::store::{store_move_item, store_open_add_column, BoardState, BoardStateStoreFields, BoardStore};

use leptos_dragdrop::*;

#[component]
pub fn BoardView(
    /// Columns present at startup
    initial_board: Board,
    /// Pixels the pointer must travel before a press becomes a drag
    drag_threshold_px: i32,
) -> impl IntoView {
    let store: BoardStore = Store::new(BoardState::with_board(initial_board));
    provide_context(store);

    let dnd = create_dnd_signals_with_threshold::<ItemId>(drag_threshold_px);
    provide_context(dnd);

    bind_global_mouseup(dnd, move |outcome| match outcome {
        DragOutcome::Dropped { active, over } => {
            log::debug!("[DND] drop: active={}, over={}", active, over);
            store_move_item(&store, &active, &over);
        }
        DragOutcome::Cancelled { active } => {
            log::debug!("[DND] cancelled: active={}", active);
        }
        DragOutcome::Clicked { .. } | DragOutcome::Ignored => {}
    });

    let columns = move || {
        store.board().with(|board| {
            board
                .columns()
                .iter()
                .map(|col| (col.id.clone(), col.title.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="board" class:dragging=move || dnd.is_dragging()>
            <button
                class="btn-primary add-column-btn"
                on:click=move |_| store_open_add_column(&store)
            >
                "+ Add New Column"
            </button>

            <div class="board-columns">
                <For
                    each=columns
                    key=|(id, _)| id.clone()
                    children=move |(id, title)| {
                        view! { <BoardColumn column_id=id title=title /> }
                    }
                />
            </div>

            <p class="item-count">
                {move || store.board().with(|board| {
                    format!("{} columns, {} tasks", board.columns().len(), board.item_count())
                })}
            </p>

            <DragOverlay />
            <AddColumnDialog />
        </div>
    }
}
