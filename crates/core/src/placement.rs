//! Placement module - fitting pieces on the torus, committing them, and clearing lines
//!
//! Placement is split in two so a rejected drop can never touch the board:
//! [`try_fit`] only borrows the board immutably and reports the cells a piece would
//! cover, and [`commit`] writes them. [`clear_completed_lines`] then removes every full
//! row and column found on the board as it stood after the commit.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::Piece;
use crate::scoring::line_clear_score;
use crate::types::{CellPos, Tint, MAX_BOARD_DIM, SHAPE_CELLS, SHAPE_DIM};

/// Board cells a piece would cover
pub type AffectedCells = ArrayVec<CellPos, SHAPE_CELLS>;

/// Line indices cleared in one pass
pub type LineIndices = ArrayVec<u8, { MAX_BOARD_DIM as usize }>;

/// Outcome of a fit test
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FitResult {
    pub fits: bool,
    /// Every (wrapped) cell the piece would fill; empty when it does not fit
    pub affected: AffectedCells,
}

/// Outcome of a line-clear pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearResult {
    /// Distinct cells emptied
    pub cleared_cells: u32,
    /// Full rows plus full columns
    pub lines: u32,
    pub rows: LineIndices,
    pub cols: LineIndices,
}

impl ClearResult {
    /// Points awarded for this clear
    pub fn points(&self) -> u32 {
        line_clear_score(self.cleared_cells, self.lines)
    }
}

/// A committed placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub anchor: CellPos,
    pub affected: AffectedCells,
    pub clear: ClearResult,
}

impl Placement {
    pub fn points(&self) -> u32 {
        self.clear.points()
    }
}

/// Test whether `piece` fits with its center on (anchor_row, anchor_col).
///
/// Stops at the first filled cell under a set mask bit. Offsets are wrapped, so every
/// anchor is a legal query, including ones near `i32::MIN`/`i32::MAX`. On boards narrower than the mask a piece can wrap onto
/// itself; two mask cells landing on the same board cell do not fit either.
pub fn try_fit(board: &Board, piece: &Piece, anchor_row: i32, anchor_col: i32) -> FitResult {
    let anchor = board.wrap_pos(anchor_row, anchor_col);
    let (ar, ac) = (anchor.row as i32, anchor.col as i32);
    let mut affected = AffectedCells::new();
    for (dr, dc) in piece.shape().offsets() {
        let pos = board.wrap_pos(ar + dr, ac + dc);
        if board.cell_at(pos).filled || affected.contains(&pos) {
            return FitResult::default();
        }
        affected.push(pos);
    }
    FitResult {
        fits: true,
        affected,
    }
}

/// Whether `piece` fits at the anchor, without collecting cells
pub fn fits(board: &Board, piece: &Piece, anchor_row: i32, anchor_col: i32) -> bool {
    if (board.dim() as usize) < SHAPE_DIM {
        return try_fit(board, piece, anchor_row, anchor_col).fits;
    }
    let anchor = board.wrap_pos(anchor_row, anchor_col);
    let (ar, ac) = (anchor.row as i32, anchor.col as i32);
    piece
        .shape()
        .offsets()
        .all(|(dr, dc)| !board.is_filled(ar + dr, ac + dc))
}

/// Fill every affected cell with `tint`. Call only with cells from a successful fit.
pub fn commit(board: &mut Board, affected: &[CellPos], tint: Tint) {
    for pos in affected {
        debug_assert!(!board.cell_at(*pos).filled, "commit over filled cell {:?}", pos);
        board.fill(pos.row as i32, pos.col as i32, tint);
    }
}

/// Clear every full row and column.
///
/// Rows and columns are both detected before anything is cleared, so a cell on a
/// full row and a full column is emptied and counted once while both lines count.
pub fn clear_completed_lines(board: &mut Board) -> ClearResult {
    let n = board.dim() as usize;
    let mut result = ClearResult::default();

    for row in 0..n {
        if board.is_row_full(row) {
            result.rows.push(row as u8);
        }
    }
    for col in 0..n {
        if board.is_col_full(col) {
            result.cols.push(col as u8);
        }
    }
    result.lines = (result.rows.len() + result.cols.len()) as u32;
    if result.lines == 0 {
        return result;
    }

    for row in 0..n {
        let full_row = result.rows.contains(&(row as u8));
        for col in 0..n {
            if full_row || result.cols.contains(&(col as u8)) {
                board.clear(row as i32, col as i32);
                result.cleared_cells += 1;
            }
        }
    }

    tracing::debug!(
        rows = result.rows.len(),
        cols = result.cols.len(),
        cells = result.cleared_cells,
        "cleared lines"
    );
    result
}

/// Fit, commit and clear in one step. Returns `None` (board untouched) if the piece does not fit.
pub fn place(board: &mut Board, piece: &Piece, anchor_row: i32, anchor_col: i32) -> Option<Placement> {
    let fit = try_fit(board, piece, anchor_row, anchor_col);
    if !fit.fits {
        return None;
    }
    commit(board, &fit.affected, piece.tint());
    let clear = clear_completed_lines(board);
    Some(Placement {
        anchor: board.wrap_pos(anchor_row, anchor_col),
        affected: fit.affected,
        clear,
    })
}
