//! Move availability - can any remaining piece still be placed?
//!
//! Exhaustive search over every piece and every one of the N*N anchors. With at most
//! three pieces and 25 mask cells on a small board this stays cheap, so there is no
//! pruning beyond stopping at the first fit.

use crate::board::Board;
use crate::piece::Piece;
use crate::placement::fits;
use crate::types::CellPos;

/// Every anchor of the board, row-major
pub fn anchors(board: &Board) -> impl Iterator<Item = CellPos> {
    let n = board.dim();
    (0..n).flat_map(move |row| (0..n).map(move |col| CellPos::new(row, col)))
}

/// First anchor (row-major) where `piece` fits
pub fn first_fit(piece: &Piece, board: &Board) -> Option<CellPos> {
    anchors(board).find(|pos| fits(board, piece, pos.row as i32, pos.col as i32))
}

/// Number of anchors where `piece` fits
pub fn count_fits(piece: &Piece, board: &Board) -> usize {
    anchors(board)
        .filter(|pos| fits(board, piece, pos.row as i32, pos.col as i32))
        .count()
}

/// Whether any of `pieces` fits anywhere. An empty set never fits.
pub fn any_piece_fits<'a, I>(pieces: I, board: &Board) -> bool
where
    I: IntoIterator<Item = &'a Piece>,
{
    pieces
        .into_iter()
        .any(|piece| first_fit(piece, board).is_some())
}
