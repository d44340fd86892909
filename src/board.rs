//! Board State
//!
//! The authoritative column/item sequence and every operation on it.
//! Operations that cannot apply return a `BoardError` and leave the board
//! untouched; callers treat that as a no-op.

use serde::{Deserialize, Serialize};

use crate::models::{Column, ColumnId, Item, ItemId};

pub type BoardResult<T> = Result<T, BoardError>;

/// Why an operation declined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Required text was empty after trimming
    BlankText(&'static str),
    ColumnNotFound(ColumnId),
    ItemNotFound(ItemId),
    /// Item dropped onto itself
    SameTarget(ItemId),
    /// Drop target names neither a column nor an item
    TargetNotFound(String),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::BlankText(field) => write!(f, "Blank {}", field),
            BoardError::ColumnNotFound(id) => write!(f, "Column not found: {}", id),
            BoardError::ItemNotFound(id) => write!(f, "Item not found: {}", id),
            BoardError::SameTarget(id) => write!(f, "Item dropped onto itself: {}", id),
            BoardError::TargetNotFound(id) => write!(f, "Drop target not found: {}", id),
        }
    }
}

impl std::error::Error for BoardError {}

/// What a successful move did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Same column, `from` index to `to` index
    Reordered { column: usize, from: usize, to: usize },
    /// Appended to the end of another column
    Relocated { from_column: usize, to_column: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == column_id)
    }

    /// (column index, item index) of an item
    pub fn locate_item(&self, item_id: &str) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, col)| col.position_of(item_id).map(|ii| (ci, ii)))
    }

    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.locate_item(item_id)
            .map(|(ci, ii)| &self.columns[ci].items[ii])
    }

    pub fn item_count(&self) -> usize {
        self.columns.iter().map(|col| col.items.len()).sum()
    }

    /// Column ids with their item ids, in display order
    pub fn layout(&self) -> Vec<(ColumnId, Vec<ItemId>)> {
        self.columns
            .iter()
            .map(|col| (col.id.clone(), col.items.iter().map(|i| i.id.clone()).collect()))
            .collect()
    }

    /// Column a drop target resolves to: the column itself, or the one
    /// holding the named item
    fn resolve_target(&self, target_id: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|col| col.id == target_id || col.contains(target_id))
    }

    pub fn add_column(&mut self, title: &str) -> BoardResult<ColumnId> {
        if is_blank(title) {
            return Err(BoardError::BlankText("column title"));
        }
        let column = Column::new(title);
        let id = column.id.clone();
        self.columns.push(column);
        Ok(id)
    }

    /// Removes the column together with all of its items
    pub fn delete_column(&mut self, column_id: &str) -> BoardResult<Column> {
        let index = self
            .columns
            .iter()
            .position(|col| col.id == column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?;
        Ok(self.columns.remove(index))
    }

    pub fn add_item(&mut self, column_id: &str, content: &str) -> BoardResult<ItemId> {
        let column = self
            .columns
            .iter_mut()
            .find(|col| col.id == column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?;
        let item = Item::new(content);
        let id = item.id.clone();
        column.items.push(item);
        Ok(id)
    }

    /// Replaces content exactly as given; absent or blank content is declined
    pub fn edit_item(&mut self, item_id: &str, new_content: Option<&str>) -> BoardResult<()> {
        let content = new_content
            .filter(|c| !is_blank(c))
            .ok_or(BoardError::BlankText("item content"))?;
        let (ci, ii) = self
            .locate_item(item_id)
            .ok_or_else(|| BoardError::ItemNotFound(item_id.to_string()))?;
        self.columns[ci].items[ii].content = content.to_string();
        Ok(())
    }

    pub fn delete_item(&mut self, item_id: &str) -> BoardResult<Item> {
        let (ci, ii) = self
            .locate_item(item_id)
            .ok_or_else(|| BoardError::ItemNotFound(item_id.to_string()))?;
        Ok(self.columns[ci].items.remove(ii))
    }

    /// Drop `active_id` onto `target_id` (an item or a column).
    ///
    /// Across columns the item goes to the end of the target column. Within
    /// a column it takes the target item's index; dropping on its own column
    /// sends it to the end.
    pub fn move_item(&mut self, active_id: &str, target_id: &str) -> BoardResult<MoveOutcome> {
        if active_id == target_id {
            return Err(BoardError::SameTarget(active_id.to_string()));
        }
        let (from_column, from) = self
            .locate_item(active_id)
            .ok_or_else(|| BoardError::ItemNotFound(active_id.to_string()))?;
        let to_column = self
            .resolve_target(target_id)
            .ok_or_else(|| BoardError::TargetNotFound(target_id.to_string()))?;

        if from_column != to_column {
            let item = self.columns[from_column].items.remove(from);
            self.columns[to_column].items.push(item);
            return Ok(MoveOutcome::Relocated { from_column, to_column });
        }

        let items = &mut self.columns[from_column].items;
        let to = items
            .iter()
            .position(|item| item.id == target_id)
            .unwrap_or(items.len() - 1);
        let item = items.remove(from);
        items.insert(to, item);
        Ok(MoveOutcome::Reordered { column: from_column, from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            content: format!("Task {}", id),
        }
    }

    fn make_column(id: &str, item_ids: &[&str]) -> Column {
        Column {
            id: id.to_string(),
            title: id.to_uppercase(),
            items: item_ids.iter().map(|i| make_item(i)).collect(),
        }
    }

    fn ids(board: &Board, column_id: &str) -> Vec<String> {
        board
            .column(column_id)
            .map(|col| col.items.iter().map(|i| i.id.clone()).collect())
            .unwrap_or_default()
    }

    fn sample() -> Board {
        Board::new(vec![
            make_column("todo", &["a", "b", "c"]),
            make_column("doing", &["d"]),
            make_column("done", &[]),
        ])
    }

    #[test]
    fn test_add_column_appends_empty() {
        let mut board = sample();
        let id = board.add_column("  Backlog ").unwrap();

        assert_eq!(board.columns().len(), 4);
        let last = board.columns().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.title, "  Backlog ");
        assert!(last.items.is_empty());
    }

    #[test]
    fn test_add_column_blank_is_noop() {
        let mut board = sample();
        assert_eq!(board.add_column("   "), Err(BoardError::BlankText("column title")));
        assert_eq!(board, sample());
    }

    #[test]
    fn test_add_column_ids_are_unique() {
        let mut board = Board::default();
        let first = board.add_column("One").unwrap();
        let second = board.add_column("One").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_delete_column_removes_its_items() {
        let mut board = sample();
        let removed = board.delete_column("todo").unwrap();

        assert_eq!(removed.items.len(), 3);
        assert_eq!(board.columns().len(), 2);
        for id in ["a", "b", "c"] {
            assert!(board.find_item(id).is_none());
        }
        assert_eq!(ids(&board, "doing"), vec!["d"]);
    }

    #[test]
    fn test_delete_unknown_column_is_noop() {
        let mut board = sample();
        assert_eq!(
            board.delete_column("nope"),
            Err(BoardError::ColumnNotFound("nope".to_string()))
        );
        assert_eq!(board, sample());
    }

    #[test]
    fn test_add_item_touches_only_target_column() {
        let mut board = sample();
        let id = board.add_item("doing", "Write docs").unwrap();

        assert_eq!(ids(&board, "doing"), vec!["d".to_string(), id.clone()]);
        assert_eq!(board.find_item(&id).unwrap().content, "Write docs");
        assert_eq!(board.column("todo"), sample().column("todo"));
        assert_eq!(board.column("done"), sample().column("done"));
        assert_eq!(board.item_count(), 5);
    }

    #[test]
    fn test_add_item_unknown_column_is_noop() {
        let mut board = sample();
        assert!(board.add_item("nope", "x").is_err());
        assert_eq!(board, sample());
    }

    #[test]
    fn test_add_item_ids_are_unique() {
        let mut board = sample();
        let created: Vec<String> = (0..50).map(|_| board.add_item("done", "x").unwrap()).collect();
        let mut deduped = created.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), created.len());
    }

    #[test]
    fn test_edit_item_replaces_content_exactly() {
        let mut board = sample();
        board.edit_item("d", Some(" new text ")).unwrap();
        assert_eq!(board.find_item("d").unwrap().content, " new text ");
    }

    #[test]
    fn test_edit_item_blank_or_missing_is_noop() {
        let mut board = sample();
        assert!(board.edit_item("d", Some("   ")).is_err());
        assert!(board.edit_item("d", None).is_err());
        assert!(board.edit_item("zzz", Some("text")).is_err());
        assert_eq!(board, sample());
    }

    #[test]
    fn test_delete_item_from_holding_column_only() {
        let mut board = sample();
        let removed = board.delete_item("b").unwrap();

        assert_eq!(removed.id, "b");
        assert_eq!(ids(&board, "todo"), vec!["a", "c"]);
        assert_eq!(ids(&board, "doing"), vec!["d"]);
        assert!(board.delete_item("b").is_err());
    }

    #[test]
    fn test_move_to_other_column_appends() {
        let mut board = Board::new(vec![
            make_column("todo", &["a", "b"]),
            make_column("done", &[]),
        ]);
        let outcome = board.move_item("a", "done").unwrap();

        assert_eq!(outcome, MoveOutcome::Relocated { from_column: 0, to_column: 1 });
        assert_eq!(ids(&board, "todo"), vec!["b"]);
        assert_eq!(ids(&board, "done"), vec!["a"]);
    }

    #[test]
    fn test_move_onto_item_in_other_column_appends() {
        let mut board = sample();
        board.move_item("a", "d").unwrap();
        assert_eq!(ids(&board, "todo"), vec!["b", "c"]);
        assert_eq!(ids(&board, "doing"), vec!["d", "a"]);
    }

    #[test]
    fn test_move_within_column_takes_target_index() {
        let mut board = sample();
        let outcome = board.move_item("c", "a").unwrap();

        assert_eq!(outcome, MoveOutcome::Reordered { column: 0, from: 2, to: 0 });
        assert_eq!(ids(&board, "todo"), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_down_within_column() {
        let mut board = sample();
        board.move_item("a", "c").unwrap();
        assert_eq!(ids(&board, "todo"), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_onto_own_column_goes_to_end() {
        let mut board = sample();
        board.move_item("a", "todo").unwrap();
        assert_eq!(ids(&board, "todo"), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_same_id_is_noop() {
        let mut board = sample();
        assert_eq!(board.move_item("a", "a"), Err(BoardError::SameTarget("a".to_string())));
        assert_eq!(board, sample());
    }

    #[test]
    fn test_move_unknown_ids_are_noop() {
        let mut board = sample();
        assert!(board.move_item("zzz", "todo").is_err());
        assert!(board.move_item("a", "zzz").is_err());
        assert_eq!(board, sample());
    }

    #[test]
    fn test_every_item_stays_in_exactly_one_column() {
        let mut board = sample();
        board.move_item("a", "d").unwrap();
        board.move_item("d", "done").unwrap();
        board.move_item("b", "c").unwrap();

        let mut all: Vec<String> = board
            .columns()
            .iter()
            .flat_map(|col| col.items.iter().map(|i| i.id.clone()))
            .collect();
        all.sort();
        assert_eq!(all, vec!["a", "b", "c", "d"]);
        assert_eq!(ids(&board, "todo"), vec!["c", "b"]);
        assert_eq!(ids(&board, "doing"), vec!["a"]);
        assert_eq!(ids(&board, "done"), vec!["d"]);
    }

    #[test]
    fn test_layout_follows_display_order() {
        let layout = sample().layout();
        assert_eq!(
            layout,
            vec![
                ("todo".to_string(), vec!["a".to_string(), "b".to_string(), "c".to_string()]),
                ("doing".to_string(), vec!["d".to_string()]),
                ("done".to_string(), vec![]),
            ]
        );
    }

    #[test]
    fn test_keyboard_steps_apply_as_moves() {
        use leptos_dragdrop::{DragKey, DragOutcome, DragSession, Step};

        let mut board = sample();
        let keys = [DragKey::Activate, DragKey::Step(Step::Down), DragKey::Activate];
        let mut session = DragSession::Idle;
        let mut dropped = None;
        for key in keys {
            let (next, outcome) = session.key(&"b".to_string(), key, &board.layout());
            session = next;
            dropped = outcome.or(dropped);
        }
        let Some(DragOutcome::Dropped { active, over }) = dropped else {
            panic!("expected a drop, got {:?}", dropped);
        };
        board.move_item(&active, &over).unwrap();
        assert_eq!(ids(&board, "todo"), vec!["a", "c", "b"]);

        // Right from "b" lands on the end of "doing"
        let mut session = DragSession::lift("b".to_string());
        session.step(&board.layout(), Step::Right);
        let over = session.over_id().cloned().unwrap();
        board.move_item("b", &over).unwrap();
        assert_eq!(ids(&board, "doing"), vec!["d", "b"]);
    }
}
