//! Property tests for placement, clearing and move availability.
//!
//! Boards are generated from a fill mask so every run sees a different mix of sparse,
//! dense and nearly-full positions.

use proptest::prelude::*;
use torus_blocks::core::moves::anchors;
use torus_blocks::core::placement::fits;
use torus_blocks::core::{
    any_piece_fits, clear_completed_lines, place, try_fit, Board, Piece, RoundController,
    SimpleRng, SHAPES,
};
use torus_blocks::engine::{apply_place, choose_move, Policy};
use torus_blocks::types::{Tint, MAX_BOARD_DIM};

fn board_from_mask(dim: u8, mask: &[bool]) -> Board {
    let mut board = Board::with_dim(dim);
    let n = dim as usize;
    for (i, &filled) in mask.iter().take(n * n).enumerate() {
        if filled {
            board.fill((i / n) as i32, (i % n) as i32, Tint::WHITE);
        }
    }
    board
}

fn board_strategy() -> impl Strategy<Value = Board> {
    (2u8..=12, 0.0f64..0.9).prop_flat_map(|(dim, density)| {
        let n = dim as usize;
        proptest::collection::vec(proptest::bool::weighted(density), n * n)
            .prop_map(move |mask| board_from_mask(dim, &mask))
    })
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    (0..SHAPES.len()).prop_map(|i| Piece::with_shape(SHAPES[i], Tint::new(0x30ff30)))
}

proptest! {
    #[test]
    fn fit_cells_stay_on_board(
        board in board_strategy(),
        piece in piece_strategy(),
        row in any::<i32>(),
        col in any::<i32>(),
    ) {
        let fit = try_fit(&board, &piece, row, col);
        if fit.fits {
            prop_assert_eq!(fit.affected.len(), piece.shape().cell_count());
            for pos in &fit.affected {
                prop_assert!(pos.row < board.dim() && pos.col < board.dim());
                prop_assert!(!board.cell_at(*pos).filled);
            }
        } else {
            prop_assert!(fit.affected.is_empty());
        }
    }

    #[test]
    fn anchors_are_periodic(
        board in board_strategy(),
        piece in piece_strategy(),
        row in any::<i32>(),
        col in any::<i32>(),
    ) {
        let n = board.dim() as i32;
        let wrapped = try_fit(&board, &piece, row.rem_euclid(n), col.rem_euclid(n));
        prop_assert_eq!(try_fit(&board, &piece, row, col), wrapped.clone());
        prop_assert_eq!(
            fits(&board, &piece, row, col),
            wrapped.fits
        );
    }

    #[test]
    fn small_anchors_shift_by_board_multiples(
        board in board_strategy(),
        piece in piece_strategy(),
        row in 0i32..MAX_BOARD_DIM as i32,
        col in 0i32..MAX_BOARD_DIM as i32,
        k in -3i32..3,
    ) {
        let n = board.dim() as i32;
        prop_assert_eq!(
            try_fit(&board, &piece, row, col),
            try_fit(&board, &piece, row + k * n, col - k * n)
        );
    }

    #[test]
    fn rejected_place_leaves_board_untouched(
        board in board_strategy(),
        piece in piece_strategy(),
        row in -20i32..20,
        col in -20i32..20,
    ) {
        let mut after = board.clone();
        let placed = place(&mut after, &piece, row, col);
        if placed.is_none() {
            prop_assert_eq!(after, board);
        }
    }

    #[test]
    fn clearing_twice_is_a_noop(board in board_strategy()) {
        let mut board = board;
        let _ = clear_completed_lines(&mut board);
        let before = board.clone();

        let second = clear_completed_lines(&mut board);
        prop_assert_eq!(second.cleared_cells, 0);
        prop_assert_eq!(second.lines, 0);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn clear_empties_exactly_the_full_lines(board in board_strategy()) {
        let n = board.dim() as usize;
        let mut cleared = board.clone();
        let result = clear_completed_lines(&mut cleared);

        let full_rows: Vec<u8> = (0..n).filter(|&r| board.is_row_full(r)).map(|r| r as u8).collect();
        let full_cols: Vec<u8> = (0..n).filter(|&c| board.is_col_full(c)).map(|c| c as u8).collect();
        prop_assert_eq!(result.rows.as_slice(), full_rows.as_slice());
        prop_assert_eq!(result.cols.as_slice(), full_cols.as_slice());
        prop_assert_eq!(result.points(), result.cleared_cells * result.lines);

        for r in 0..n {
            for c in 0..n {
                let on_line = full_rows.contains(&(r as u8)) || full_cols.contains(&(c as u8));
                let expected = board.is_filled(r as i32, c as i32) && !on_line;
                prop_assert_eq!(cleared.is_filled(r as i32, c as i32), expected);
            }
        }
    }

    #[test]
    fn disjoint_rows_score_cells_times_lines(
        dim in 2u8..=MAX_BOARD_DIM,
        rows in proptest::collection::btree_set(0u8..MAX_BOARD_DIM, 1..4),
    ) {
        let rows: Vec<u8> = rows.into_iter().filter(|&r| r < dim).collect();
        prop_assume!(!rows.is_empty() && rows.len() < dim as usize);

        let mut board = Board::with_dim(dim);
        for &r in &rows {
            for c in 0..dim {
                board.fill(r as i32, c as i32, Tint::WHITE);
            }
        }
        let k = rows.len() as u32;
        let total = k * dim as u32;

        let result = clear_completed_lines(&mut board);
        prop_assert_eq!(result.lines, k);
        prop_assert_eq!(result.cleared_cells, total);
        prop_assert_eq!(result.points(), total * k);
        prop_assert!(board.is_empty());
    }

    #[test]
    fn any_piece_fits_matches_brute_force(
        board in board_strategy(),
        pieces in proptest::collection::vec(piece_strategy(), 0..4),
    ) {
        let brute = pieces.iter().any(|piece| {
            anchors(&board).any(|a| try_fit(&board, piece, a.row as i32, a.col as i32).fits)
        });
        prop_assert_eq!(any_piece_fits(&pieces, &board), brute);
    }

    #[test]
    fn autoplay_keeps_round_consistent(seed in any::<u32>(), policy_seed in any::<u32>()) {
        let mut round = RoundController::new(seed);
        let mut rng = SimpleRng::new(policy_seed);
        let mut score = 0u32;

        for _ in 0..60 {
            let Some(mv) = choose_move(Policy::Random, &round, &mut rng) else {
                break;
            };
            let filled_before = round.board().filled_count() as u32;
            let cells = round.slots()[mv.slot].piece.shape().cell_count() as u32;

            let result = apply_place(&mut round, mv.slot, mv.anchor.row, mv.anchor.col)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            score += result.points_earned;

            let placement = round.last_placement().expect("placed");
            prop_assert_eq!(
                round.board().filled_count() as u32,
                filled_before + cells - placement.clear.cleared_cells
            );
            prop_assert_eq!(round.score(), score);
            if result.no_more_moves {
                prop_assert!(round.is_game_over());
                break;
            }
        }
    }
}
