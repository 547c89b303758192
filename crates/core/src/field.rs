//! Field module - the grid of gem references
//!
//! The field is a `cols x rows` grid stored as a flat row-major array, so a
//! cell index is `row * cols + col`. Each cell is either empty or names the
//! live gem occupying it.
//! Coordinates: row 0 is the top, column 0 is the left edge.
//!
//! Every query treats out-of-range indices as empty/invalid instead of
//! panicking, and neighbour arithmetic never wraps from one row into the next.

use arrayvec::ArrayVec;

use crate::gem::GemId;

/// A cell of the field: `None` when empty
pub type Cell = Option<GemId>;

/// The playfield grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cols: usize,
    rows: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Field {
    /// Create an empty field
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Flat index of (row, col), `None` when out of bounds
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    #[inline]
    pub fn row_of(&self, index: usize) -> usize {
        index / self.cols
    }

    #[inline]
    pub fn col_of(&self, index: usize) -> usize {
        index % self.cols
    }

    /// Check if index addresses a cell of this field
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    /// Occupant of a cell; out-of-range indices read as empty
    #[inline]
    pub fn at(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    /// Check if index is within bounds and empty
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Check if index is within bounds and occupied
    #[inline]
    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Some(_)))
    }

    /// Both indices are valid and lie on the same row
    pub fn is_same_row(&self, a: usize, b: usize) -> bool {
        self.contains(a) && self.contains(b) && self.row_of(a) == self.row_of(b)
    }

    pub fn is_left_edge(&self, index: usize) -> bool {
        self.contains(index) && self.col_of(index) == 0
    }

    pub fn is_right_edge(&self, index: usize) -> bool {
        self.contains(index) && self.col_of(index) == self.cols - 1
    }

    pub fn is_top_edge(&self, index: usize) -> bool {
        self.contains(index) && self.row_of(index) == 0
    }

    pub fn is_bottom_edge(&self, index: usize) -> bool {
        self.contains(index) && self.row_of(index) == self.rows - 1
    }

    /// Index reached by moving `dr` rows and `dc` columns from `index`
    ///
    /// Returns `None` if the start or the destination is off the field.
    /// Horizontal steps stay on their row: stepping right from the last
    /// column is `None`, never the first cell of the next row.
    pub fn step(&self, index: usize, dr: isize, dc: isize) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let row = self.row_of(index).checked_add_signed(dr)?;
        let col = self.col_of(index).checked_add_signed(dc)?;
        self.index_of(row, col)
    }

    /// Cell directly below, `None` on the bottom row
    #[inline]
    pub fn below(&self, index: usize) -> Option<usize> {
        self.step(index, 1, 0)
    }

    /// Orthogonal neighbours in up, left, right, down order
    pub fn neighbors(&self, index: usize) -> ArrayVec<usize, 4> {
        let mut out = ArrayVec::new();
        for (dr, dc) in [(-1, 0), (0, -1), (0, 1), (1, 0)] {
            if let Some(n) = self.step(index, dr, dc) {
                out.push(n);
            }
        }
        out
    }

    /// Occupied cells in ascending index order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, GemId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|id| (index, id)))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Put a gem into an empty cell
    /// Returns false if the cell is out of bounds or already taken
    pub(crate) fn put(&mut self, index: usize, id: GemId) -> bool {
        match self.cells.get_mut(index) {
            Some(cell @ None) => {
                *cell = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Empty a cell, returning its previous occupant
    pub(crate) fn take(&mut self, index: usize) -> Cell {
        self.cells.get_mut(index).and_then(Option::take)
    }

    /// Move the occupant of `from` into the empty cell `to`
    pub(crate) fn move_cell(&mut self, from: usize, to: usize) -> bool {
        if !self.is_occupied(from) || !self.is_empty(to) {
            return false;
        }
        let id = self.take(from);
        self.cells[to] = id;
        true
    }
}
