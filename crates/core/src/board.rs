//! Board module - manages the toroidal game grid
//!
//! The board is an NxN grid (10x10 by default) where each cell is empty or filled with a tint.
//! Uses a flat row-major array allocated once, when the board is created.
//! Coordinates: (row, col), both wrapped into [0, N). There are no edges: any signed
//! offset is normalized with `rem_euclid`, so row -1 is row N-1 and col N is col 0.

use crate::types::{CellPos, Tint, BOARD_DIM, MAX_BOARD_DIM, MIN_BOARD_DIM};

/// One board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub filled: bool,
    pub tint: Tint,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        filled: false,
        tint: Tint::EMPTY,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

/// The game board - NxN torus using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    dim: u8,
    /// Flat array of cells, row-major order (row * dim + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 10x10 board
    pub fn new() -> Self {
        Self::with_dim(BOARD_DIM)
    }

    /// Create a new empty NxN board. Panics if `dim` is outside the supported range.
    pub fn with_dim(dim: u8) -> Self {
        assert!(
            (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&dim),
            "board dimension {} outside {}..={}",
            dim,
            MIN_BOARD_DIM,
            MAX_BOARD_DIM
        );
        let n = dim as usize;
        Self {
            dim,
            cells: vec![Cell::EMPTY; n * n],
        }
    }

    /// Side length in cells
    pub fn dim(&self) -> u8 {
        self.dim
    }

    /// Wrap a signed row/col into [0, dim)
    #[inline(always)]
    pub fn wrap(&self, v: i32) -> u8 {
        v.rem_euclid(self.dim as i32) as u8
    }

    /// Wrap a signed (row, col) pair into a board position
    #[inline(always)]
    pub fn wrap_pos(&self, row: i32, col: i32) -> CellPos {
        CellPos::new(self.wrap(row), self.wrap(col))
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> usize {
        self.wrap(row) as usize * self.dim as usize + self.wrap(col) as usize
    }

    /// Get cell at (row, col), wrapped
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn cell_at(&self, pos: CellPos) -> Cell {
        self.cell(pos.row as i32, pos.col as i32)
    }

    /// Check if (row, col) is filled, wrapped
    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        self.cells[self.index(row, col)].filled
    }

    /// Fill (row, col) with a tint, wrapped
    pub fn fill(&mut self, row: i32, col: i32, tint: Tint) {
        let idx = self.index(row, col);
        self.cells[idx] = Cell { filled: true, tint };
    }

    /// Empty (row, col), wrapped
    pub fn clear(&mut self, row: i32, col: i32) {
        let idx = self.index(row, col);
        self.cells[idx] = Cell::EMPTY;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        let n = self.dim as usize;
        if row >= n {
            return false;
        }
        let start = row * n;
        self.cells[start..start + n].iter().all(|cell| cell.filled)
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        let n = self.dim as usize;
        if col >= n {
            return false;
        }
        self.cells.iter().skip(col).step_by(n).all(|cell| cell.filled)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.filled).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.filled)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::EMPTY;
        }
    }

    /// Build a board from rows of `'#'` (filled) and `'.'` (empty), for tests and fixtures.
    /// Filled cells get `tint`. Panics on ragged or non-square input.
    pub fn from_ascii(rows: &[&str], tint: Tint) -> Self {
        let mut board = Self::with_dim(rows.len() as u8);
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), rows.len(), "row {} is not {} wide", r, rows.len());
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    board.fill(r as i32, c as i32, tint);
                }
            }
        }
        board
    }

    /// Render as rows of `'#'`/`'.'`
    pub fn to_ascii(&self) -> Vec<String> {
        self.cells
            .chunks(self.dim as usize)
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.filled { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
