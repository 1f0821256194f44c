//! Piece module - a shape + tint instance that lives in a tray slot or follows the pointer
//!
//! Pieces are never reallocated: respawning overwrites shape and tint in place, and
//! [`Piece::copy_into`] snapshots one piece into another by value.

use crate::rng::RandomSource;
use crate::shapes::{random_shape, random_tint, Shape, SHAPES};
use crate::types::{Tint, SHAPE_DIM};

/// Half the side of a piece's 5x5 footprint, in cells
const HALF_FOOTPRINT: f32 = SHAPE_DIM as f32 * 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    shape: Shape,
    tint: Tint,
    /// Center position in board-local units
    pub x: f32,
    pub y: f32,
}

impl Piece {
    /// Monomino with a white tint at the origin
    pub fn new() -> Self {
        Self::with_shape(SHAPES[0], Tint::WHITE)
    }

    pub fn with_shape(shape: Shape, tint: Tint) -> Self {
        Self {
            shape,
            tint,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Piece with a random shape and tint
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let mut piece = Self::new();
        piece.assign_random(rng);
        piece
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn set_tint(&mut self, tint: Tint) {
        self.tint = tint;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Replace shape and tint with fresh catalog draws (shape first, then tint)
    pub fn assign_random(&mut self, rng: &mut impl RandomSource) {
        self.shape = random_shape(rng);
        self.tint = random_tint(rng);
    }

    /// Mask value at (row, col) in the 5x5 window. Panics outside it.
    pub fn is_filled_at(&self, row: usize, col: usize) -> bool {
        self.shape.is_filled_at(row, col)
    }

    /// Copy shape and tint into `other`; its position is left alone
    pub fn copy_into(&self, other: &mut Piece) {
        other.shape = self.shape;
        other.tint = self.tint;
    }

    /// Whether (x, y) lies in the piece's 5x5 footprint box (half-open)
    pub fn intersects_point(&self, x: f32, y: f32, cell_size: f32) -> bool {
        let half = cell_size * HALF_FOOTPRINT;
        x >= self.x - half && x < self.x + half && y >= self.y - half && y < self.y + half
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::new()
    }
}
