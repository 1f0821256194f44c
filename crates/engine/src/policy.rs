//! Autoplay policies - choose which piece to drop where.

use crate::core::moves::anchors;
use crate::core::placement::place;
use crate::core::{try_fit, RandomSource, RoundController};
use crate::types::CellPos;

/// A legal drop: tray slot plus anchor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub slot: usize,
    pub anchor: CellPos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// First legal move in slot, then row-major anchor order
    #[default]
    First,
    /// Uniformly random legal move
    Random,
    /// Highest immediate points; ties go to the first such move
    Greedy,
}

impl Policy {
    /// Parse policy name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "first" => Some(Policy::First),
            "random" => Some(Policy::Random),
            "greedy" => Some(Policy::Greedy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::First => "first",
            Policy::Random => "random",
            Policy::Greedy => "greedy",
        }
    }
}

/// Every legal move for the unused slots
pub fn legal_moves<R: RandomSource>(round: &RoundController<R>) -> Vec<Move> {
    let board = round.board();
    let mut out = Vec::new();
    for (slot, tray) in round.slots().iter().enumerate() {
        if tray.used {
            continue;
        }
        for anchor in anchors(board) {
            if try_fit(board, &tray.piece, anchor.row as i32, anchor.col as i32).fits {
                out.push(Move { slot, anchor });
            }
        }
    }
    out
}

/// Points a move would earn right now, simulated on a copy of the board
pub fn move_points<R: RandomSource>(round: &RoundController<R>, mv: Move) -> u32 {
    let mut board = round.board().clone();
    let piece = &round.slots()[mv.slot].piece;
    place(&mut board, piece, mv.anchor.row as i32, mv.anchor.col as i32)
        .map(|p| p.points())
        .unwrap_or(0)
}

/// Pick a move, or `None` if nothing fits
pub fn choose_move<R: RandomSource>(
    policy: Policy,
    round: &RoundController<R>,
    rng: &mut impl RandomSource,
) -> Option<Move> {
    let moves = legal_moves(round);
    if moves.is_empty() {
        return None;
    }
    match policy {
        Policy::First => moves.first().copied(),
        Policy::Random => moves.get(rng.next_index(moves.len())).copied(),
        Policy::Greedy => {
            let mut best: Option<(Move, u32)> = None;
            for mv in moves {
                let points = move_points(round, mv);
                if best.map_or(true, |(_, p)| points > p) {
                    best = Some((mv, points));
                }
            }
            best.map(|(mv, _)| mv)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, SimpleRng, SHAPES};
    use crate::types::Tint;

    fn round_with_monos() -> RoundController {
        let mut round = RoundController::new(3);
        for slot in 0..3 {
            round.set_slot(slot, SHAPES[0], Tint::WHITE);
        }
        round
    }

    #[test]
    fn test_policy_names_roundtrip() {
        for policy in [Policy::First, Policy::Random, Policy::Greedy] {
            assert_eq!(Policy::from_str(policy.as_str()), Some(policy));
        }
        assert_eq!(Policy::from_str("GREEDY"), Some(Policy::Greedy));
        assert_eq!(Policy::from_str("best"), None);
    }

    #[test]
    fn test_legal_moves_on_empty_board() {
        let round = round_with_monos();
        let moves = legal_moves(&round);
        assert_eq!(moves.len(), 300);
        assert_eq!(moves[0], Move { slot: 0, anchor: CellPos::new(0, 0) });
    }

    #[test]
    fn test_greedy_takes_line_clear() {
        let mut round = round_with_monos();
        let mut board = Board::new();
        for r in 0..9 {
            board.fill(r, 6, Tint::WHITE);
        }
        round.set_board(board);

        let mv = choose_move(Policy::Greedy, &round, &mut SimpleRng::new(1)).unwrap();
        assert_eq!(mv.anchor, CellPos::new(9, 6));
        assert_eq!(move_points(&round, mv), 10);
    }

    #[test]
    fn test_random_picks_legal_move() {
        let round = round_with_monos();
        let mut rng = SimpleRng::new(8);
        let legal = legal_moves(&round);
        for _ in 0..20 {
            let mv = choose_move(Policy::Random, &round, &mut rng).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn test_no_move_on_full_board() {
        let mut round = round_with_monos();
        let mut board = Board::new();
        for r in 0..10 {
            for c in 0..10 {
                board.fill(r, c, Tint::WHITE);
            }
        }
        round.set_board(board);
        assert!(legal_moves(&round).is_empty());
        assert_eq!(choose_move(Policy::First, &round, &mut SimpleRng::new(1)), None);
    }
}
