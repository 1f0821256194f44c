//! Torus Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under `torus_blocks::{core, engine, types}` and hosts
//! the [`autoplay`] runner used by the `torus-blocks` binary.

pub use torus_blocks_core as core;
pub use torus_blocks_engine as engine;
pub use torus_blocks_types as types;

pub mod autoplay;
