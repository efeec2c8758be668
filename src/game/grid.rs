use crate::models::{DieId, Position};

/// Shape and row-major indexing of a rectangular board
pub trait GridModel {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    /// Row-major index of a cell, or `None` when it is off the board
    fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols() + pos.col)
    }

    /// Cell at a row-major index, or `None` past the last cell
    fn position_at(&self, index: usize) -> Option<Position> {
        (index < self.cell_count()).then(|| Position::new(index / self.cols(), index % self.cols()))
    }

    fn positions(&self) -> Vec<Position> {
        (0..self.cell_count())
            .filter_map(|index| self.position_at(index))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl GridModel for GridShape {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

/// Bijective placement of dice onto cells.
///
/// Both directions are stored so that `die_at` and `position_of` are O(1).
/// `cell_of[die]` and `die_in[cell]` are always inverse permutations.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    shape: GridShape,
    die_in: Vec<DieId>,
    cell_of: Vec<usize>,
}

impl SpatialGrid {
    /// Canonical layout: die `i` sits at `(i / cols, i % cols)`
    pub fn new(shape: GridShape) -> Self {
        let count = shape.cell_count();
        Self {
            shape,
            die_in: (0..count).map(DieId).collect(),
            cell_of: (0..count).collect(),
        }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Place dice in row-major order: `order[i]` goes to cell `i`.
    ///
    /// Returns false and leaves the placement untouched unless `order` is a
    /// permutation of every die on this grid.
    pub fn place(&mut self, order: &[DieId]) -> bool {
        let count = self.shape.cell_count();
        if order.len() != count {
            return false;
        }

        let mut cell_of = vec![usize::MAX; count];
        for (cell, die) in order.iter().enumerate() {
            match cell_of.get_mut(die.0) {
                Some(slot) if *slot == usize::MAX => *slot = cell,
                _ => return false,
            }
        }

        self.die_in = order.to_vec();
        self.cell_of = cell_of;
        true
    }

    /// Dice in row-major cell order
    pub fn placement(&self) -> &[DieId] {
        &self.die_in
    }

    pub fn die_at(&self, pos: Position) -> Option<DieId> {
        self.shape.index_of(pos).map(|cell| self.die_in[cell])
    }

    /// Where a die currently sits; `None` for an identity this grid never placed
    pub fn position_of(&self, die: DieId) -> Option<Position> {
        self.cell_of
            .get(die.0)
            .and_then(|&cell| self.shape.position_at(cell))
    }

    /// King-move adjacency. A die is never adjacent to itself, and unplaced
    /// dice are adjacent to nothing.
    pub fn adjacent(&self, a: DieId, b: DieId) -> bool {
        if a == b {
            return false;
        }
        match (self.position_of(a), self.position_of(b)) {
            (Some(pa), Some(pb)) => pa.is_adjacent(&pb),
            _ => false,
        }
    }
}

impl GridModel for SpatialGrid {
    fn rows(&self) -> usize {
        self.shape.rows
    }

    fn cols(&self) -> usize {
        self.shape.cols
    }
}
