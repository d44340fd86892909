//! Board Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every handler
//! builds the next board value and replaces the old one; declined
//! operations leave the store untouched.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{Board, BoardResult};
use crate::models::{ColumnId, ItemId};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Columns and their items
    pub board: Board,
    /// Whether the add-column dialog is showing
    pub add_column_open: bool,
    /// Title typed into the add-column dialog
    pub new_column_title: String,
}

impl BoardState {
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current content of an item, tracked
pub fn store_item_content(store: &BoardStore, item_id: &str) -> Option<String> {
    store
        .board()
        .with(|board| board.find_item(item_id).map(|item| item.content.clone()))
}

fn apply<T>(store: &BoardStore, op: &str, f: impl FnOnce(&mut Board) -> BoardResult<T>) -> Option<T> {
    let mut next = store.board().get_untracked();
    match f(&mut next) {
        Ok(value) => {
            store.board().set(next);
            Some(value)
        }
        Err(e) => {
            log::debug!("[BOARD] {} ignored: {}", op, e);
            None
        }
    }
}

/// Append a column; blank titles are ignored
pub fn store_add_column(store: &BoardStore, title: &str) -> Option<ColumnId> {
    let id = apply(store, "add_column", |board| board.add_column(title))?;
    log::info!("[BOARD] added column {}", id);
    Some(id)
}

/// Remove a column and every item in it
pub fn store_delete_column(store: &BoardStore, column_id: &str) {
    if let Some(column) = apply(store, "delete_column", |board| board.delete_column(column_id)) {
        log::info!("[BOARD] deleted column {} with {} items", column.id, column.items.len());
    }
}

/// Append an item to a column
pub fn store_add_item(store: &BoardStore, column_id: &str, content: &str) -> Option<ItemId> {
    let id = apply(store, "add_item", |board| board.add_item(column_id, content))?;
    log::info!("[BOARD] added item {} to {}", id, column_id);
    Some(id)
}

/// Replace an item's content; absent or blank content is ignored
pub fn store_edit_item(store: &BoardStore, item_id: &str, new_content: Option<&str>) {
    if apply(store, "edit_item", |board| board.edit_item(item_id, new_content)).is_some() {
        log::info!("[BOARD] edited item {}", item_id);
    }
}

/// Remove an item from whichever column holds it
pub fn store_delete_item(store: &BoardStore, item_id: &str) {
    if apply(store, "delete_item", |board| board.delete_item(item_id)).is_some() {
        log::info!("[BOARD] deleted item {}", item_id);
    }
}

/// Apply a finished drag
pub fn store_move_item(store: &BoardStore, active_id: &str, target_id: &str) {
    if let Some(outcome) = apply(store, "move_item", |board| board.move_item(active_id, target_id)) {
        log::info!("[BOARD] moved item {} onto {}: {:?}", active_id, target_id, outcome);
    }
}

pub fn store_open_add_column(store: &BoardStore) {
    store.add_column_open().set(true);
}

/// Close the dialog and drop whatever title was typed
pub fn store_close_add_column(store: &BoardStore) {
    store.add_column_open().set(false);
    store.new_column_title().set(String::new());
}

/// Add the typed column; the dialog stays open if the title is blank
pub fn store_submit_add_column(store: &BoardStore) {
    let title = store.new_column_title().get_untracked();
    if store_add_column(store, &title).is_some() {
        store_close_add_column(store);
    }
}
