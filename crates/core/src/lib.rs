//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the toroidal block-placement puzzle: the board,
//! the piece catalog, placement and line clearing, the move-availability search and
//! the per-round state machine. It has no rendering or input-device code:
//!
//! - **Deterministic**: every random draw goes through an injectable [`RandomSource`]
//! - **Testable**: placement and clearing are free functions over a [`Board`]
//! - **Portable**: a renderer consumes [`RoundSnapshot`], an input layer produces `InputSnapshot`
//! - **Allocation-free hot paths**: fits and clears use fixed-capacity `ArrayVec`s
//!
//! # Module Structure
//!
//! - [`board`]: NxN torus of cells with wrapped indexing
//! - [`shapes`]: the 19 fixed 5x5 masks and tint draws
//! - [`piece`]: shape + tint instances with in-place respawn and copy
//! - [`placement`]: fit test, commit, row/column clearing
//! - [`moves`]: exhaustive "can anything still be placed?" search
//! - [`scoring`]: points per clear and round totals
//! - [`round`]: tray of three pieces, drag/drop state machine, game over
//! - [`snapshot`]: render projection
//! - [`rng`]: seedable random sources
//!
//! # Game Rules
//!
//! - **Torus**: a piece hanging over an edge continues on the opposite edge
//! - **Atomic drops**: a piece either lands completely or the board is untouched
//! - **Lines**: full rows and full columns clear together after each drop
//! - **Scoring**: `cleared cells x cleared lines`
//! - **Tray**: three pieces at a time, refilled once all three are placed
//! - **Game over**: no unused piece fits at any of the N*N anchors
//!
//! # Example
//!
//! ```
//! use torus_blocks_core::{RoundController, RoundPhase};
//! use torus_blocks_types::InputSnapshot;
//!
//! let mut round = RoundController::new(12345);
//!
//! // Pick up the first tray piece and drop it on cell (4, 4)
//! let (sx, sy) = round.slot_position(0);
//! round.update(&InputSnapshot::press(sx, sy));
//! assert_eq!(round.phase(), RoundPhase::Dragging(0));
//!
//! let (x, y) = round.cell_center(4, 4);
//! let result = round.update(&InputSnapshot::release(x, y));
//!
//! assert!(round.slots()[0].used);
//! assert_eq!(result.points_earned, 0);
//! assert!(!result.no_more_moves);
//! ```

pub mod board;
pub mod moves;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use torus_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use moves::{any_piece_fits, count_fits, first_fit};
pub use piece::Piece;
pub use placement::{clear_completed_lines, commit, place, try_fit, ClearResult, FitResult, Placement};
pub use rng::{EntropyRng, RandomSource, SimpleRng};
pub use round::{RoundController, RoundPhase, TraySlot};
pub use scoring::{line_clear_score, RoundStats};
pub use shapes::{random_shape, random_tint, shapes, Shape, SHAPES};
pub use snapshot::{PieceView, RoundSnapshot, SlotView};
