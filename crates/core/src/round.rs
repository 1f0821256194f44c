//! Round module - the tray of three pieces and the drag/drop state machine
//!
//! One [`RoundController::update`] call per frame advances the round:
//!
//! - **Idle**: a pointer press over an unused tray slot starts dragging a copy of it.
//! - **Dragging(slot)**: the copy follows the pointer; releasing drops it on the cell
//!   under its center. A fitting drop commits, clears lines and uses the slot; a
//!   blocked drop sends the piece back to the tray.
//! - **GameOver**: none of the unused pieces fits anywhere. Only [`RoundController::reset`]
//!   leaves this state.
//!
//! When all three slots are used the tray is refilled with fresh pieces and move
//! availability is checked against the new set.

use crate::board::Board;
use crate::moves::any_piece_fits;
use crate::piece::Piece;
use crate::placement::{place, Placement};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::RoundStats;
use crate::shapes::Shape;
use crate::snapshot::{PieceView, RoundSnapshot, SlotView};
use crate::types::{
    ConfigError, InputSnapshot, RoundConfig, Tint, UpdateResult, SHAPE_DIM, TRAY_SLOTS,
};

/// Round phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Nothing is being dragged
    Idle,
    /// The piece from this tray slot is being dragged
    Dragging(usize),
    GameOver,
}

/// One offered piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraySlot {
    pub piece: Piece,
    pub used: bool,
}

#[derive(Debug, Clone)]
pub struct RoundController<R: RandomSource = SimpleRng> {
    config: RoundConfig,
    board: Board,
    slots: [TraySlot; TRAY_SLOTS],
    /// Copy of the dragged slot's piece; follows the pointer
    active: Piece,
    /// Piece center minus pointer at pick-up
    grab_offset: (f32, f32),
    phase: RoundPhase,
    stats: RoundStats,
    last_placement: Option<Placement>,
    rng: R,
}

impl RoundController<SimpleRng> {
    /// Create a round with the default configuration and a deterministic RNG
    pub fn new(seed: u32) -> Self {
        Self::build(RoundConfig::default(), SimpleRng::new(seed))
    }
}

impl<R: RandomSource> RoundController<R> {
    /// Create a round with a custom configuration and random source
    pub fn with_rng(config: RoundConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: RoundConfig, mut rng: R) -> Self {
        let mut slots = [TraySlot {
            piece: Piece::new(),
            used: false,
        }; TRAY_SLOTS];
        for (i, slot) in slots.iter_mut().enumerate() {
            slot.piece.assign_random(&mut rng);
            let (x, y) = Self::tray_position(&config, i);
            slot.piece.set_position(x, y);
        }

        Self {
            board: Board::with_dim(config.board_dim),
            config,
            slots,
            active: Piece::new(),
            grab_offset: (0.0, 0.0),
            phase: RoundPhase::Idle,
            stats: RoundStats::default(),
            last_placement: None,
            rng,
        }
    }

    fn tray_position(config: &RoundConfig, slot: usize) -> (f32, f32) {
        let len = config.board_len();
        let x = (slot as f32 + 0.5) * len / TRAY_SLOTS as f32;
        let y = len + config.tray_gap + config.cell_size * SHAPE_DIM as f32 * 0.5;
        (x, y)
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn slots(&self) -> &[TraySlot; TRAY_SLOTS] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&TraySlot> {
        self.slots.get(index)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }

    /// Slot being dragged, if any
    pub fn selected(&self) -> Option<usize> {
        match self.phase {
            RoundPhase::Dragging(slot) => Some(slot),
            _ => None,
        }
    }

    /// The dragged piece, if any
    pub fn active(&self) -> Option<&Piece> {
        self.selected().map(|_| &self.active)
    }

    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Last committed placement
    pub fn last_placement(&self) -> Option<&Placement> {
        self.last_placement.as_ref()
    }

    /// Take and clear the last committed placement
    pub fn take_last_placement(&mut self) -> Option<Placement> {
        self.last_placement.take()
    }

    /// Rest position of a tray slot's piece
    pub fn slot_position(&self, slot: usize) -> (f32, f32) {
        Self::tray_position(&self.config, slot)
    }

    /// Board-local center of (row, col)
    pub fn cell_center(&self, row: u8, col: u8) -> (f32, f32) {
        let cell = self.config.cell_size;
        ((col as f32 + 0.5) * cell, (row as f32 + 0.5) * cell)
    }

    /// Pieces still offered
    pub fn unused_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.slots
            .iter()
            .filter(|slot| !slot.used)
            .map(|slot| &slot.piece)
    }

    fn all_used(&self) -> bool {
        self.slots.iter().all(|slot| slot.used)
    }

    /// Replace the board, e.g. to load a puzzle position. Dimensions must match.
    pub fn set_board(&mut self, board: Board) {
        assert_eq!(
            board.dim(),
            self.config.board_dim,
            "board dimension does not match the round configuration"
        );
        self.board = board;
    }

    /// Overwrite a slot's shape and tint and mark it unused, e.g. to load a puzzle position
    pub fn set_slot(&mut self, slot: usize, shape: Shape, tint: Tint) {
        let piece = &mut self.slots[slot].piece;
        piece.set_shape(shape);
        piece.set_tint(tint);
        self.slots[slot].used = false;
    }

    /// Advance one frame
    pub fn update(&mut self, input: &InputSnapshot) -> UpdateResult {
        if self.phase == RoundPhase::GameOver {
            return UpdateResult {
                points_earned: 0,
                no_more_moves: true,
            };
        }

        if self.all_used() && !self.ensure_moves() {
            return UpdateResult {
                points_earned: 0,
                no_more_moves: true,
            };
        }

        if self.phase == RoundPhase::Idle && input.pointer_just_down {
            if let Some(slot) = self.hit_slot(input.pointer_x, input.pointer_y) {
                self.pick_up(slot, input);
            }
        }

        let RoundPhase::Dragging(slot) = self.phase else {
            return UpdateResult::default();
        };

        self.active.set_position(
            input.pointer_x + self.grab_offset.0,
            input.pointer_y + self.grab_offset.1 - self.config.finger_offset,
        );

        if input.pointer_down {
            return UpdateResult::default();
        }
        self.drop_active(slot)
    }

    /// Unused slot whose footprint contains the point; the nearest one when footprints overlap
    fn hit_slot(&self, x: f32, y: f32) -> Option<usize> {
        let dist2 = |piece: &Piece| (piece.x - x).powi(2) + (piece.y - y).powi(2);
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| {
                !slot.used && slot.piece.intersects_point(x, y, self.config.cell_size)
            })
            .min_by(|(_, a), (_, b)| dist2(&a.piece).total_cmp(&dist2(&b.piece)))
            .map(|(i, _)| i)
    }

    fn pick_up(&mut self, slot: usize, input: &InputSnapshot) {
        let piece = &self.slots[slot].piece;
        piece.copy_into(&mut self.active);
        self.grab_offset = (piece.x - input.pointer_x, piece.y - input.pointer_y);
        self.phase = RoundPhase::Dragging(slot);
        tracing::trace!(slot, "picked up");
    }

    /// Board cell under the dragged piece's center, wrapped onto the torus.
    /// The residue is taken before the cast so far-off pointers keep their cell.
    fn cursor_cell(&self) -> (i32, i32) {
        let cell = self.config.cell_size;
        let dim = self.config.board_dim as f32;
        (
            (self.active.y / cell).floor().rem_euclid(dim) as i32,
            (self.active.x / cell).floor().rem_euclid(dim) as i32,
        )
    }

    fn drop_active(&mut self, slot: usize) -> UpdateResult {
        self.phase = RoundPhase::Idle;
        let (row, col) = self.cursor_cell();

        let Some(placement) = place(&mut self.board, &self.active, row, col) else {
            tracing::trace!(slot, row, col, "drop rejected");
            return UpdateResult::default();
        };

        let points = self.stats.record_placement(&placement.clear);
        self.slots[slot].used = true;
        tracing::debug!(
            slot,
            row = placement.anchor.row,
            col = placement.anchor.col,
            lines = placement.clear.lines,
            points,
            "placed piece"
        );
        self.last_placement = Some(placement);

        let no_more_moves = !self.ensure_moves();
        UpdateResult {
            points_earned: points,
            no_more_moves,
        }
    }

    /// Refill the tray if it is spent, then check that some unused piece still fits.
    /// Enters `GameOver` and returns false otherwise.
    fn ensure_moves(&mut self) -> bool {
        if self.all_used() {
            self.refill();
        }
        if any_piece_fits(self.unused_pieces(), &self.board) {
            return true;
        }
        self.phase = RoundPhase::GameOver;
        tracing::debug!(
            score = self.stats.score,
            pieces = self.stats.pieces_placed,
            "no more moves"
        );
        false
    }

    fn refill(&mut self) {
        for slot in &mut self.slots {
            slot.piece.assign_random(&mut self.rng);
            slot.used = false;
        }
        self.stats.refills += 1;
        tracing::debug!(refills = self.stats.refills, "tray refilled");
    }

    /// Start over: empty board, fresh tray, zeroed stats
    pub fn reset(&mut self) {
        self.board.reset();
        for slot in &mut self.slots {
            slot.piece.assign_random(&mut self.rng);
            slot.used = false;
        }
        self.phase = RoundPhase::Idle;
        self.grab_offset = (0.0, 0.0);
        self.stats = RoundStats::default();
        self.last_placement = None;
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.dim = self.board.dim();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());

        let selected = self.selected();
        for (i, (view, slot)) in out.slots.iter_mut().zip(&self.slots).enumerate() {
            *view = SlotView {
                piece: PieceView::from(&slot.piece),
                used: slot.used,
                visible: !slot.used && selected != Some(i),
            };
        }

        out.active = self.active().map(PieceView::from);
        match self.active() {
            Some(piece) => out.set_mirrors(piece.x, piece.y, self.config.board_len()),
            None => out.mirrors.clear(),
        }
        out.score = self.stats.score;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for RoundController<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
