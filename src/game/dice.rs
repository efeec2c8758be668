use std::fmt;

use rand::{seq::SliceRandom, Rng};

use crate::{
    game::grid::{GridModel, GridShape, SpatialGrid},
    models::{DieId, Position},
    utils::faces::{BOARD_COLS, BOARD_ROWS, CUBE_FACES, FACES_PER_DIE},
};

/// A single die with six fixed faces, one of which is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    faces: [String; FACES_PER_DIE],
    showing: usize,
}

impl Die {
    /// New die showing its first face
    pub fn new(faces: [&str; FACES_PER_DIE]) -> Self {
        Self {
            faces: faces.map(str::to_uppercase),
            showing: 0,
        }
    }

    pub fn faces(&self) -> &[String; FACES_PER_DIE] {
        &self.faces
    }

    /// The visible face
    pub fn letter(&self) -> &str {
        &self.faces[self.showing]
    }

    /// Roll the die to a uniformly chosen face
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.showing = rng.random_range(0..FACES_PER_DIE);
    }

    /// Turn the die to a specific face; false if `index` is not a face
    pub fn show(&mut self, index: usize) -> bool {
        if index < FACES_PER_DIE {
            self.showing = index;
            true
        } else {
            false
        }
    }
}

/// The dice of a board together with their placement
#[derive(Debug, Clone)]
pub struct DiceSet {
    dice: Vec<Die>,
    grid: SpatialGrid,
}

impl DiceSet {
    /// The standard 4x4 board in canonical layout, every die showing its first face
    pub fn standard() -> Self {
        let dice = CUBE_FACES.iter().map(|faces| Die::new(*faces)).collect();
        Self {
            dice,
            grid: SpatialGrid::new(GridShape::new(BOARD_ROWS, BOARD_COLS)),
        }
    }

    /// Build a board from explicit dice, placed row-major in the order given.
    /// Returns `None` unless there is exactly one die per cell.
    pub fn from_dice(shape: GridShape, dice: Vec<Die>) -> Option<Self> {
        (dice.len() == shape.cell_count()).then(|| Self {
            dice,
            grid: SpatialGrid::new(shape),
        })
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn die(&self, id: DieId) -> Option<&Die> {
        self.dice.get(id.0)
    }

    pub fn die_mut(&mut self, id: DieId) -> Option<&mut Die> {
        self.dice.get_mut(id.0)
    }

    pub fn letter(&self, id: DieId) -> Option<&str> {
        self.die(id).map(Die::letter)
    }

    pub fn die_at(&self, pos: Position) -> Option<DieId> {
        self.grid.die_at(pos)
    }

    pub fn position_of(&self, id: DieId) -> Option<Position> {
        self.grid.position_of(id)
    }

    pub fn adjacent(&self, a: DieId, b: DieId) -> bool {
        self.grid.adjacent(a, b)
    }

    /// Shuffle which cell each die occupies and roll every die.
    /// The two randomizations are independent of each other.
    pub fn reshuffle(&mut self, rng: &mut impl Rng) {
        let mut order: Vec<DieId> = (0..self.dice.len()).map(DieId).collect();
        order.shuffle(rng);

        for die in &mut self.dice {
            die.randomize(rng);
        }

        // `order` is a permutation of every die, so placement cannot fail
        let placed = self.grid.place(&order);
        debug_assert!(placed);

        tracing::debug!("Reshuffled board:\n{}", self);
    }

    /// Visible letters, one row per board row
    pub fn letters(&self) -> Vec<Vec<String>> {
        (0..self.grid.rows())
            .map(|row| {
                (0..self.grid.cols())
                    .map(|col| {
                        self.die_at(Position::new(row, col))
                            .and_then(|id| self.letter(id))
                            .unwrap_or_default()
                            .to_string()
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for DiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dice.is_empty() {
            return Ok(());
        }

        writeln!(f, "BoggleBoard:")?;
        for (row, letters) in self.letters().iter().enumerate() {
            write!(f, "{}: ", row)?;
            for letter in letters {
                write!(f, "[{}] ", letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
