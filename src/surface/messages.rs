use serde::{Deserialize, Serialize};

use crate::models::Highlight;

/// Input events reported by the presentation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    GridCell { row: usize, col: usize },
    ResetControl,
    ExitControl,
}

/// Display instructions sent to the presentation surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayCommand {
    SetCellHighlight {
        row: usize,
        col: usize,
        text_color: String,
        fill_color: String,
    },
    SetInProgressText {
        text: String,
    },
    SetFoundWordsText {
        text: String,
    },
    ClearAllHighlights,
    /// Board resync after a reshuffle, one row of visible faces per board row
    SetBoardLetters {
        letters: Vec<Vec<String>>,
    },
    Error {
        message: String,
    },
}

impl DisplayCommand {
    pub fn highlight(row: usize, col: usize, highlight: Highlight) -> Self {
        DisplayCommand::SetCellHighlight {
            row,
            col,
            text_color: highlight.text_color().to_string(),
            fill_color: highlight.fill_color().to_string(),
        }
    }
}
