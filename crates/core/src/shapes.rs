//! Shapes module - the fixed catalog of piece masks and tint draws
//!
//! Every piece is a 5x5 boolean mask, row-major, whose center cell (2, 2) is aligned
//! with the anchor cell on the board. The center need not be filled (see the
//! corner shapes below).

use crate::rng::RandomSource;
use crate::types::{Tint, SHAPE_CELLS, SHAPE_CENTER, SHAPE_DIM, TINT_CHANNEL_HIGH, TINT_CHANNEL_LOW};

/// Immutable 5x5 occupancy mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [bool; SHAPE_CELLS],
}

impl Shape {
    /// Build a shape from a 0/1 grid
    pub const fn from_rows(rows: [[u8; SHAPE_DIM]; SHAPE_DIM]) -> Self {
        let mut cells = [false; SHAPE_CELLS];
        let mut r = 0;
        while r < SHAPE_DIM {
            let mut c = 0;
            while c < SHAPE_DIM {
                cells[r * SHAPE_DIM + c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { cells }
    }

    /// Mask value at (row, col). Panics outside the 5x5 window.
    pub fn is_filled_at(&self, row: usize, col: usize) -> bool {
        assert!(
            row < SHAPE_DIM && col < SHAPE_DIM,
            "shape query ({}, {}) outside the {}x{} mask",
            row,
            col,
            SHAPE_DIM,
            SHAPE_DIM
        );
        self.cells[row * SHAPE_DIM + col]
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Offsets (d_row, d_col) in -2..=2 of the filled cells, relative to the center
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &filled)| {
            filled.then(|| {
                (
                    (i / SHAPE_DIM) as i32 - SHAPE_CENTER as i32,
                    (i % SHAPE_DIM) as i32 - SHAPE_CENTER as i32,
                )
            })
        })
    }

    pub fn cells(&self) -> &[bool; SHAPE_CELLS] {
        &self.cells
    }
}

/// All shapes a piece can take
pub const SHAPES: [Shape; 19] = [
    // Monomino
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    // Domino, horizontal
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    // Domino, vertical
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    // Small corners
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 1, 1, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 1, 1, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    // I3
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    // 2x2
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 1, 1, 0],
        [0, 0, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    // 3x3
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ]),
    // Big corners (center cell empty)
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 0, 0, 0],
        [0, 1, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 0, 0, 0, 0],
    ]),
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0],
        [0, 1, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ]),
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 0, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ]),
    // I4
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 1],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    Shape::from_rows([
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    // I5
    Shape::from_rows([
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [1, 1, 1, 1, 1],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]),
    Shape::from_rows([
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
    ]),
];

/// The full catalog
pub fn shapes() -> &'static [Shape] {
    &SHAPES
}

/// Uniformly pick one catalog shape
pub fn random_shape(rng: &mut impl RandomSource) -> Shape {
    SHAPES[rng.next_index(SHAPES.len())]
}

/// Draw a tint with each channel independently low (0x30) or high (0xff)
pub fn random_tint(rng: &mut impl RandomSource) -> Tint {
    let mut channel = || {
        if rng.next_index(2) == 1 {
            TINT_CHANNEL_HIGH
        } else {
            TINT_CHANNEL_LOW
        }
    };
    // First draw fills the low byte.
    let low = channel();
    let mid = channel();
    let high = channel();
    Tint::new(low | (mid << 8) | (high << 16))
}
