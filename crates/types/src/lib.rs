//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, the headless engine, a renderer).
//!
//! # Board Dimensions
//!
//! The playfield is a square torus:
//!
//! - **Default size**: 10x10 cells (indexed 0-9 on both axes)
//! - **Wraparound**: every coordinate is taken modulo the board dimension
//! - **Pieces**: 5x5 masks anchored at their center cell (2, 2)
//!
//! # Layout Constants
//!
//! Positions are in board-local units (pixels on a typical display):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_CELL_SIZE` | 60 | Side length of one board cell |
//! | `DEFAULT_TRAY_GAP` | 150 | Gap between the board and the tray row |
//! | `TOUCH_FINGER_OFFSET` | 225 | Lift applied to dragged pieces on touch screens |
//!
//! # Examples
//!
//! ```
//! use torus_blocks_types::{RoundConfig, Tint, BOARD_DIM, TRAY_SLOTS};
//!
//! let config = RoundConfig::default();
//! assert_eq!(config.board_dim, BOARD_DIM);
//! assert!(config.validate().is_ok());
//!
//! assert_eq!(Tint::EMPTY.rgb(), 0x999999);
//! assert_eq!(TRAY_SLOTS, 3);
//! ```

use std::fmt;

/// Default board dimension (10x10)
pub const BOARD_DIM: u8 = 10;

/// Smallest supported board dimension
pub const MIN_BOARD_DIM: u8 = 2;

/// Largest supported board dimension
pub const MAX_BOARD_DIM: u8 = 32;

/// Side length of a piece mask
pub const SHAPE_DIM: usize = 5;

/// Number of cells in a piece mask
pub const SHAPE_CELLS: usize = SHAPE_DIM * SHAPE_DIM;

/// Row/column of the mask cell that aligns with the anchor
pub const SHAPE_CENTER: usize = 2;

/// Number of pieces offered at once
pub const TRAY_SLOTS: usize = 3;

/// Wrapped copies of a dragged piece (3x3 neighbourhood minus the piece itself)
pub const MIRROR_COUNT: usize = 8;

/// Default cell side length in board-local units
pub const DEFAULT_CELL_SIZE: f32 = 60.0;

/// Default gap between the bottom board edge and the tray
pub const DEFAULT_TRAY_GAP: f32 = 150.0;

/// Vertical lift for dragged pieces on touch devices
pub const TOUCH_FINGER_OFFSET: f32 = 225.0;

/// Channel value for a "low" tint channel
pub const TINT_CHANNEL_LOW: u32 = 0x30;

/// Channel value for a "high" tint channel
pub const TINT_CHANNEL_HIGH: u32 = 0xff;

/// Opaque 24-bit color value (`0xRRGGBB`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint(u32);

impl Tint {
    /// Tint of an empty board cell
    pub const EMPTY: Tint = Tint(0x999999);

    /// Tint used before a piece is first randomized
    pub const WHITE: Tint = Tint(0xffffff);

    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    pub const fn rgb(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint::EMPTY
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// A (row, col) board position, always in `[0, dim)` once produced by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: u8,
    pub col: u8,
}

impl CellPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Per-frame pointer sample produced by an input collaborator.
///
/// Coordinates are board-local. `pointer_just_down` is true only on the frame where the
/// pointer transitioned from up to down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub pointer_down: bool,
    pub pointer_just_down: bool,
}

impl InputSnapshot {
    /// Pointer pressed this frame
    pub fn press(x: f32, y: f32) -> Self {
        Self {
            pointer_x: x,
            pointer_y: y,
            pointer_down: true,
            pointer_just_down: true,
        }
    }

    /// Pointer held down (moved or not)
    pub fn hold(x: f32, y: f32) -> Self {
        Self {
            pointer_x: x,
            pointer_y: y,
            pointer_down: true,
            pointer_just_down: false,
        }
    }

    /// Pointer up
    pub fn release(x: f32, y: f32) -> Self {
        Self {
            pointer_x: x,
            pointer_y: y,
            pointer_down: false,
            pointer_just_down: false,
        }
    }
}

/// Result of one `update` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateResult {
    pub points_earned: u32,
    pub no_more_moves: bool,
}

/// Round configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundConfig {
    /// Board side length in cells
    pub board_dim: u8,
    /// Cell side length in board-local units
    pub cell_size: f32,
    /// Gap between the board and the tray row
    pub tray_gap: f32,
    /// Upward lift applied to the dragged piece (0 on desktop)
    pub finger_offset: f32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            board_dim: BOARD_DIM,
            cell_size: DEFAULT_CELL_SIZE,
            tray_gap: DEFAULT_TRAY_GAP,
            finger_offset: 0.0,
        }
    }
}

impl RoundConfig {
    /// Configuration for touch screens (dragged pieces float above the finger)
    pub fn touch() -> Self {
        Self {
            finger_offset: TOUCH_FINGER_OFFSET,
            ..Self::default()
        }
    }

    /// Length of one board side in board-local units
    pub fn board_len(&self) -> f32 {
        self.board_dim as f32 * self.cell_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.board_dim) {
            return Err(ConfigError::BoardDim(self.board_dim));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize);
        }
        if !(self.tray_gap.is_finite() && self.tray_gap >= 0.0) {
            return Err(ConfigError::TrayGap);
        }
        if !(self.finger_offset.is_finite() && self.finger_offset >= 0.0) {
            return Err(ConfigError::FingerOffset);
        }
        Ok(())
    }
}

/// Invalid round configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    BoardDim(u8),
    CellSize,
    TrayGap,
    FingerOffset,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::BoardDim(_) => "invalid_board_dim",
            ConfigError::CellSize => "invalid_cell_size",
            ConfigError::TrayGap => "invalid_tray_gap",
            ConfigError::FingerOffset => "invalid_finger_offset",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardDim(dim) => write!(
                f,
                "board dimension {} outside {}..={}",
                dim, MIN_BOARD_DIM, MAX_BOARD_DIM
            ),
            ConfigError::CellSize => f.write_str("cell size must be a positive finite number"),
            ConfigError::TrayGap => f.write_str("tray gap must be a non-negative finite number"),
            ConfigError::FingerOffset => {
                f.write_str("finger offset must be a non-negative finite number")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
