use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chainfall::core::{find_matches, resolve_chains, Board, GameState};
use chainfall::types::{GameAction, GamePhase, MoveDir, TokenColor, BOARD_HEIGHT, BOARD_WIDTH};

/// Checkerboard of two colors: worst case for the scan, zero matches
fn checkerboard() -> Board {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            let color = if (x + y) % 2 == 0 {
                TokenColor::Red
            } else {
                TokenColor::Blue
            };
            board.set(x, y, Some(color));
        }
    }
    board
}

/// Layered board that resolves as a three-pass chain: greens clear first,
/// the reds drop onto the column-3 red stack and clear second, and the
/// fourth blue riding that stack completes the blue group last
fn chain_board() -> Board {
    let mut board = Board::new();
    for x in 0..3 {
        board.set(x, 11, Some(TokenColor::Green));
        board.set(x, 10, Some(TokenColor::Green));
        board.set(x, 9, Some(TokenColor::Red));
        board.set(x, 8, Some(TokenColor::Blue));
    }
    board.set(3, 11, Some(TokenColor::Red));
    board.set(3, 10, Some(TokenColor::Red));
    board.set(3, 9, Some(TokenColor::Blue));
    board
}

fn bench_find_matches(c: &mut Criterion) {
    let board = checkerboard();
    c.bench_function("find_matches_full_board", |b| {
        b.iter(|| find_matches(black_box(&board)))
    });
}

fn bench_resolve_chain(c: &mut Criterion) {
    let board = chain_board();
    c.bench_function("resolve_three_chain", |b| {
        b.iter(|| resolve_chains(black_box(board.clone())))
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if !state.tick() && state.phase() != GamePhase::Running {
                state.apply_action(GameAction::Restart);
            }
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(black_box(MoveDir::Right));
            state.try_move(black_box(MoveDir::Left));
        })
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_resolve_chain,
    bench_tick,
    bench_try_move
);
criterion_main!(benches);
