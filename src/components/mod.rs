//! UI Components
//!
//! Board, columns, cards and the dialogs around them.

mod add_column_dialog;
mod board_column;
mod board_view;
mod drag_overlay;
mod item_card;

pub use add_column_dialog::AddColumnDialog;
pub use board_column::BoardColumn;
pub use board_view::BoardView;
pub use drag_overlay::DragOverlay;
pub use item_card::ItemCard;
