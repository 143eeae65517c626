use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::SessionRng;
use common::games::tictactoe::{
    board_from_str, calculate_random_move, check_result, empty_board, Mark, TicTacToeGameState,
};

fn bench_random_full_game() {
    let mut game_state = TicTacToeGameState::new();
    let mut session_rng = SessionRng::from_random();
    while !game_state.is_over() {
        let Some(index) = calculate_random_move(&game_state.board, &mut session_rng) else {
            break;
        };
        let _ = game_state.place_mark(index);
    }
}

fn tictactoe_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe");

    group
        .sampling_mode(SamplingMode::Flat)
        .measurement_time(Duration::from_secs(10));

    let mid_game = board_from_str("XO_ _X_ O__");
    let drawn = board_from_str("XOX XOO OXX");
    group.bench_function("check_result_mid_game", |b| {
        b.iter(|| check_result(black_box(&mid_game)))
    });

    group.bench_function("check_result_draw", |b| {
        b.iter(|| check_result(black_box(&drawn)))
    });

    group.bench_function("random_move_empty", |b| {
        let board = empty_board();
        let mut session_rng = SessionRng::new(1);
        b.iter(|| calculate_random_move(black_box(&board), &mut session_rng))
    });

    group.bench_function("random_full_game", |b| {
        b.iter(bench_random_full_game)
    });

    let mut x_row = empty_board();
    x_row[..3].fill(Mark::X);
    group.bench_function("check_result_win", |b| {
        b.iter(|| check_result(black_box(&x_row)))
    });

    group.finish();
}

criterion_group!(benches, tictactoe_bench);
criterion_main!(benches);
