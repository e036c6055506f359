use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{
    Board, GameState, Mark, best_move, evaluate, score_moves,
};

fn bench_self_play_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while evaluate(&board, current_mark) == GameState::Playing {
        let Ok(cell) = best_move(&board, current_mark) else {
            break;
        };
        if board.place(cell, current_mark).is_err() {
            break;
        }
        match current_mark.opponent() {
            Some(next) => current_mark = next,
            None => break,
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    let empty = Board::new();
    let mid_game: Board = "X__/_O_/__X".parse().unwrap();

    group.bench_function("best_move_empty", |b| {
        b.iter(|| best_move(black_box(&empty), Mark::X))
    });

    group.bench_function("best_move_mid_game", |b| {
        b.iter(|| best_move(black_box(&mid_game), Mark::O))
    });

    group.bench_function("score_moves_empty", |b| {
        b.iter(|| score_moves(black_box(&empty), Mark::X))
    });

    group.bench_function("self_play_game", |b| b.iter(bench_self_play_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
