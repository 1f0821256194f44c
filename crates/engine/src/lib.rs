//! Headless engine - drive a round without a renderer or input device.
//!
//! [`apply_place`] turns a "drop slot i on (row, col)" command into the pointer frames a
//! player would produce, so scripted play goes through exactly the same state machine
//! as interactive play. [`policy`] enumerates legal moves and picks one.

pub mod place;
pub mod policy;

pub use torus_blocks_core as core;
pub use torus_blocks_types as types;

pub use place::{apply_place, PlaceError};
pub use policy::{choose_move, legal_moves, move_points, Move, Policy};
