use criterion::{black_box, criterion_group, criterion_main, Criterion};
use torus_blocks::core::{
    any_piece_fits, clear_completed_lines, try_fit, Board, Piece, RoundController, RoundSnapshot,
    SHAPES,
};
use torus_blocks::types::{InputSnapshot, Tint};

/// Checkerboard: every multi-cell shape is blocked everywhere, the worst case for the
/// move-availability search
fn checkerboard() -> Board {
    let mut board = Board::new();
    for r in 0..10 {
        for c in 0..10 {
            if (r + c) % 2 == 0 {
                board.fill(r, c, Tint::WHITE);
            }
        }
    }
    board
}

fn bench_try_fit(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::with_shape(SHAPES[10], Tint::WHITE);

    c.bench_function("try_fit_3x3_wrapped", |b| {
        b.iter(|| try_fit(black_box(&board), black_box(&piece), 9, 9))
    });
}

fn bench_any_piece_fits(c: &mut Criterion) {
    let board = checkerboard();
    let pieces = [
        Piece::with_shape(SHAPES[10], Tint::WHITE),
        Piece::with_shape(SHAPES[17], Tint::WHITE),
        Piece::with_shape(SHAPES[18], Tint::WHITE),
    ];

    c.bench_function("any_piece_fits_exhaustive_miss", |b| {
        b.iter(|| any_piece_fits(black_box(&pieces), black_box(&board)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_row_and_column", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for i in 0..10 {
                board.fill(4, i, Tint::WHITE);
                board.fill(i, 6, Tint::WHITE);
            }
            clear_completed_lines(&mut board)
        })
    });
}

fn bench_drag_frame(c: &mut Criterion) {
    let mut round = RoundController::new(12345);
    let (sx, sy) = round.slot_position(0);
    round.update(&InputSnapshot::press(sx, sy));

    c.bench_function("update_drag_frame", |b| {
        b.iter(|| round.update(black_box(&InputSnapshot::hold(sx - 40.0, sy - 300.0))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let round = RoundController::new(12345);
    let mut snap = RoundSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| round.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_try_fit,
    bench_any_piece_fits,
    bench_line_clear,
    bench_drag_frame,
    bench_snapshot
);
criterion_main!(benches);
