//! Board Configuration
//!
//! Settings embedded from `config/board.json` at build time.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::models::Column;

const EMBEDDED_CONFIG: &str = include_str!("../config/board.json");

/// A column present when the board starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSeed {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub capacity: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl LogConfig {
    /// Unknown level names fall back to Info
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub title: String,
    pub columns: Vec<ColumnSeed>,
    pub drag_threshold_px: i32,
    pub log: LogConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Task Board".to_string(),
            columns: vec![
                ColumnSeed { id: "todo".to_string(), title: "To Do".to_string() },
                ColumnSeed { id: "inProgress".to_string(), title: "In Progress".to_string() },
                ColumnSeed { id: "done".to_string(), title: "Done".to_string() },
            ],
            drag_threshold_px: leptos_dragdrop::DRAG_THRESHOLD_PX,
            log: LogConfig::default(),
        }
    }
}

impl BoardConfig {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Embedded config, or defaults if it does not parse.
    /// Also returns the parse error so it can be logged once logging is up.
    pub fn load() -> (Self, Option<serde_json::Error>) {
        match Self::parse(EMBEDDED_CONFIG) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Fresh board with the configured columns and no items
    pub fn initial_board(&self) -> Board {
        Board::new(
            self.columns
                .iter()
                .map(|seed| Column::with_id(seed.id.clone(), seed.title.clone()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = BoardConfig::parse(EMBEDDED_CONFIG).expect("shipped config should parse");
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_initial_board_has_three_empty_columns() {
        let board = BoardConfig::default().initial_board();
        let titles: Vec<&str> = board.columns().iter().map(|c| c.title.as_str()).collect();

        assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
        assert_eq!(board.column("inProgress").map(|c| c.title.as_str()), Some("In Progress"));
        assert_eq!(board.item_count(), 0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = BoardConfig::parse(r#"{ "title": "Sprint 4" }"#).unwrap();
        assert_eq!(config.title, "Sprint 4");
        assert_eq!(config.columns.len(), 3);
        assert_eq!(config.drag_threshold_px, 5);
        assert_eq!(config.log.capacity, 256);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(BoardConfig::parse("{ not json").is_err());
    }

    #[test]
    fn test_log_level_filter() {
        let mut log = LogConfig::default();
        assert_eq!(log.level_filter(), LevelFilter::Info);
        log.level = "debug".to_string();
        assert_eq!(log.level_filter(), LevelFilter::Debug);
        log.level = "loud".to_string();
        assert_eq!(log.level_filter(), LevelFilter::Info);
    }
}
