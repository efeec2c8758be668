use thiserror::Error;

use crate::{game::dice::DiceSet, models::DieId};

/// Why a die could not be added to the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("a word is already in progress")]
    NotEmpty,
    #[error("no word in progress")]
    Empty,
    #[error("die {0:?} is already part of the word")]
    AlreadySelected(DieId),
    #[error("die {0:?} is not adjacent to the last letter")]
    NotAdjacent(DieId),
    #[error("die {0:?} is not on the board")]
    NotPlaced(DieId),
}

/// The dice chosen so far this turn, in click order.
///
/// Invariants: no die appears twice, and consecutive dice are adjacent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    dice: Vec<DieId>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a word with `die`. Only valid on an empty path.
    pub fn start(&mut self, die: DieId, board: &DiceSet) -> Result<(), PathError> {
        if !self.dice.is_empty() {
            return Err(PathError::NotEmpty);
        }
        if board.position_of(die).is_none() {
            return Err(PathError::NotPlaced(die));
        }
        self.dice.push(die);
        Ok(())
    }

    /// Append `die` if it is unused and adjacent to the last die.
    /// On error the path is unchanged.
    pub fn extend(&mut self, die: DieId, board: &DiceSet) -> Result<(), PathError> {
        let last = self.last().ok_or(PathError::Empty)?;
        if self.contains(die) {
            return Err(PathError::AlreadySelected(die));
        }
        if board.position_of(die).is_none() {
            return Err(PathError::NotPlaced(die));
        }
        if !board.adjacent(last, die) {
            return Err(PathError::NotAdjacent(die));
        }
        self.dice.push(die);
        Ok(())
    }

    /// The visible faces of the path, concatenated in click order
    pub fn spelled_word(&self, board: &DiceSet) -> String {
        self.dice
            .iter()
            .filter_map(|&die| board.letter(die))
            .collect()
    }

    pub fn last(&self) -> Option<DieId> {
        self.dice.last().copied()
    }

    pub fn contains(&self, die: DieId) -> bool {
        self.dice.contains(&die)
    }

    pub fn clear(&mut self) {
        self.dice.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn dice(&self) -> &[DieId] {
        &self.dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashSet;

    fn board() -> DiceSet {
        DiceSet::standard()
    }

    fn at(board: &DiceSet, row: usize, col: usize) -> DieId {
        board.die_at(Position::new(row, col)).unwrap()
    }

    #[test]
    fn test_start_only_on_empty_path() {
        let board = board();
        let mut path = SelectionPath::new();
        assert_eq!(path.start(at(&board, 0, 0), &board), Ok(()));
        assert_eq!(
            path.start(at(&board, 0, 1), &board),
            Err(PathError::NotEmpty)
        );
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_extend_requires_a_started_path() {
        let board = board();
        let mut path = SelectionPath::new();
        assert_eq!(path.extend(at(&board, 0, 0), &board), Err(PathError::Empty));
        assert!(path.is_empty());
    }

    #[test]
    fn test_extend_rejects_repeat_and_non_adjacent() {
        let board = board();
        let mut path = SelectionPath::new();
        let first = at(&board, 0, 0);
        let second = at(&board, 1, 1);
        path.start(first, &board).unwrap();
        path.extend(second, &board).unwrap();

        assert_eq!(
            path.extend(first, &board),
            Err(PathError::AlreadySelected(first)),
            "A die already in the path cannot be reused"
        );
        let far = at(&board, 3, 3);
        assert_eq!(path.extend(far, &board), Err(PathError::NotAdjacent(far)));
        assert_eq!(path.dice(), &[first, second], "Rejected extends leave the path unchanged");
    }

    #[test]
    fn test_extend_rejects_unplaced_die() {
        let board = board();
        let mut path = SelectionPath::new();
        assert_eq!(
            path.start(DieId(42), &board),
            Err(PathError::NotPlaced(DieId(42)))
        );
        path.start(at(&board, 0, 0), &board).unwrap();
        assert_eq!(
            path.extend(DieId(42), &board),
            Err(PathError::NotPlaced(DieId(42)))
        );
    }

    #[test]
    fn test_spelled_word_follows_click_order() {
        let board = board();
        let mut path = SelectionPath::new();
        // Canonical first faces: (0,2)="J", (1,3)="B", (0,3)="A"
        path.start(at(&board, 0, 2), &board).unwrap();
        path.extend(at(&board, 1, 3), &board).unwrap();
        path.extend(at(&board, 0, 3), &board).unwrap();
        assert_eq!(path.spelled_word(&board), "JBA");
    }

    #[test]
    fn test_multi_letter_face_spells_both_letters() {
        let mut board = board();
        let die = at(&board, 0, 2);
        board.die_mut(die).unwrap().show(3);
        let mut path = SelectionPath::new();
        path.start(die, &board).unwrap();
        assert_eq!(path.spelled_word(&board), "QU");
    }

    #[test]
    fn test_clear_empties_path() {
        let board = board();
        let mut path = SelectionPath::new();
        path.start(at(&board, 2, 2), &board).unwrap();
        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.last(), None);
        assert_eq!(path.spelled_word(&board), "");
    }

    #[test]
    fn test_random_extends_keep_path_invariants() {
        let mut board = board();
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..200 {
            board.reshuffle(&mut rng);
            let mut path = SelectionPath::new();
            path.start(DieId(rng.random_range(0..16)), &board).unwrap();

            for _ in 0..30 {
                let _ = path.extend(DieId(rng.random_range(0..16)), &board);
            }

            let unique: HashSet<_> = path.dice().iter().collect();
            assert_eq!(unique.len(), path.len(), "Path must not repeat a die");
            for pair in path.dice().windows(2) {
                assert!(
                    board.adjacent(pair[0], pair[1]),
                    "Consecutive dice {:?} and {:?} must be adjacent",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}
