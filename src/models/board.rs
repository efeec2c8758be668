use serde::{Deserialize, Serialize};

/// A cell on the board, zero-based from the top-left corner
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if two positions are adjacent (including diagonals)
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}

/// Identity of a die: its index in the fixed face table.
/// Survives reshuffles, unlike its position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct DieId(pub usize);

/// How a selected cell is drawn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// The most recently selected die
    Selected,
    /// A die earlier in the path
    Confirmed,
}

impl Highlight {
    pub fn text_color(&self) -> &'static str {
        match self {
            Highlight::Selected => "blue",
            Highlight::Confirmed => "green",
        }
    }

    pub fn fill_color(&self) -> &'static str {
        match self {
            Highlight::Selected => "light blue",
            Highlight::Confirmed => "light green",
        }
    }

    /// Inverse of the palette, used by surfaces that receive colors over the wire
    pub fn from_colors(text_color: &str, fill_color: &str) -> Option<Self> {
        [Highlight::Selected, Highlight::Confirmed]
            .into_iter()
            .find(|h| h.text_color() == text_color && h.fill_color() == fill_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_positions() {
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(0, 1);
        let pos3 = Position::new(1, 1);
        let pos4 = Position::new(2, 2);

        assert!(pos1.is_adjacent(&pos2));
        assert!(pos2.is_adjacent(&pos3));
        assert!(pos1.is_adjacent(&pos3));
        assert!(!pos1.is_adjacent(&pos4));
    }

    #[test]
    fn test_position_not_adjacent_to_itself() {
        let pos = Position::new(2, 1);
        assert!(!pos.is_adjacent(&pos), "A cell is never its own neighbor");
    }

    #[test]
    fn test_highlight_palette_round_trips() {
        for h in [Highlight::Selected, Highlight::Confirmed] {
            assert_eq!(Highlight::from_colors(h.text_color(), h.fill_color()), Some(h));
        }
        assert_eq!(Highlight::from_colors("red", "pink"), None);
    }
}
