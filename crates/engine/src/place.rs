use crate::core::{try_fit, RandomSource, RoundController};
use crate::types::{InputSnapshot, UpdateResult, TRAY_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotPlayable,
    SlotOutOfRange,
    SlotUsed,
    DoesNotFit,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::SlotOutOfRange | PlaceError::SlotUsed | PlaceError::DoesNotFit => {
                "invalid_place"
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "round is over",
            PlaceError::SlotOutOfRange => "tray slot index out of range",
            PlaceError::SlotUsed => "tray slot was already placed",
            PlaceError::DoesNotFit => "piece does not fit at target cell",
        }
    }
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Drop tray `slot` with its center on (row, col) by feeding the round the frames a
/// player would produce: press on the slot, drag to the cell, release.
pub fn apply_place<R: RandomSource>(
    round: &mut RoundController<R>,
    slot: usize,
    row: u8,
    col: u8,
) -> Result<UpdateResult, PlaceError> {
    if round.is_game_over() {
        return Err(PlaceError::NotPlayable);
    }
    if slot >= TRAY_SLOTS {
        return Err(PlaceError::SlotOutOfRange);
    }
    if round.slots()[slot].used {
        return Err(PlaceError::SlotUsed);
    }
    let dim = round.board().dim();
    let (row, col) = (row % dim, col % dim);

    if !try_fit(round.board(), &round.slots()[slot].piece, row as i32, col as i32).fits {
        return Err(PlaceError::DoesNotFit);
    }

    // Pressing exactly on the slot's center gives a zero grab offset, so the piece
    // lands where the pointer is, minus the finger lift.
    let (sx, sy) = round.slot_position(slot);
    let (tx, ty) = round.cell_center(row, col);
    let ty = ty + round.config().finger_offset;

    round.update(&InputSnapshot::press(sx, sy));
    if round.selected() != Some(slot) {
        return Err(PlaceError::NotPlayable);
    }
    round.update(&InputSnapshot::hold(tx, ty));
    let result = round.update(&InputSnapshot::release(tx, ty));

    tracing::trace!(slot, row, col, points = result.points_earned, "applied place");
    Ok(result)
}
