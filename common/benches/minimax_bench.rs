use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    BotInput, BotType, Grid, Mark, calculate_minimax_move, calculate_move, evaluate,
};

fn grid_with_moves(moves: &[usize]) -> Grid {
    moves.iter().enumerate().fold(Grid::empty(), |grid, (ply, &index)| {
        grid.apply(index, Mark::for_ply(ply)).unwrap_or(grid)
    })
}

fn bench_minimax_self_play() {
    let mut grid = Grid::empty();
    let mut rng = SessionRng::new(1);
    while !evaluate(&grid).is_terminal() {
        let mark = grid.next_mark();
        let input = BotInput::new(grid, mark);
        match calculate_move(BotType::Minimax, &input, &mut rng) {
            Some(index) => match grid.apply(index, mark) {
                Ok(next) => grid = next,
                Err(_) => break,
            },
            None => break,
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(20);

    group.bench_function("single_move_empty", |b| {
        let input = BotInput::new(Grid::empty(), Mark::X);
        b.iter(|| calculate_minimax_move(black_box(&input)))
    });

    group.bench_function("single_move_after_centre", |b| {
        let input = BotInput::new(grid_with_moves(&[4]), Mark::O);
        b.iter(|| calculate_minimax_move(black_box(&input)))
    });

    group.bench_function("single_move_mid_game", |b| {
        let input = BotInput::new(grid_with_moves(&[4, 0, 8, 2]), Mark::X);
        b.iter(|| calculate_minimax_move(black_box(&input)))
    });

    group.bench_function("self_play", |b| b.iter(bench_minimax_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
