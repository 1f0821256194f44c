use arrayvec::ArrayVec;

use crate::board::Cell;
use crate::piece::Piece;
use crate::shapes::{Shape, SHAPES};
use crate::types::{Tint, MIRROR_COUNT, TRAY_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceView {
    pub shape: Shape,
    pub tint: Tint,
    pub x: f32,
    pub y: f32,
}

impl From<&Piece> for PieceView {
    fn from(value: &Piece) -> Self {
        Self {
            shape: *value.shape(),
            tint: value.tint(),
            x: value.x,
            y: value.y,
        }
    }
}

impl Default for PieceView {
    fn default() -> Self {
        Self {
            shape: SHAPES[0],
            tint: Tint::WHITE,
            x: 0.0,
            y: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotView {
    pub piece: PieceView,
    pub used: bool,
    /// Derived: not used and not currently being dragged
    pub visible: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoundSnapshot {
    pub dim: u8,
    /// Row-major board cells
    pub cells: Vec<Cell>,
    pub slots: [SlotView; TRAY_SLOTS],
    /// The dragged piece, if any
    pub active: Option<PieceView>,
    /// Wrapped copies of the dragged piece, one board length away on each axis
    pub mirrors: ArrayVec<(f32, f32), MIRROR_COUNT>,
    pub score: u32,
    pub game_over: bool,
}

impl RoundSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.dim as usize + col]
    }

    /// Fill `mirrors` with the 8 neighbours of (x, y) on a `board_len` lattice
    pub fn set_mirrors(&mut self, x: f32, y: f32, board_len: f32) {
        self.mirrors.clear();
        for i in -1i32..=1 {
            for j in -1i32..=1 {
                if i == 0 && j == 0 {
                    continue;
                }
                self.mirrors
                    .push((x + j as f32 * board_len, y + i as f32 * board_len));
            }
        }
    }
}
