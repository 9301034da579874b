use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Grid;
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BotType {
    #[default]
    Random,
    Minimax,
}

impl BotType {
    pub fn label(self) -> &'static str {
        match self {
            BotType::Random => "Easy (random)",
            BotType::Minimax => "Hard (minimax)",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub grid: Grid,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(grid: Grid, bot_mark: Mark) -> Self {
        Self { grid, bot_mark }
    }

    pub fn human_mark(&self) -> Mark {
        self.bot_mark.opponent()
    }
}

pub fn calculate_move(bot_type: BotType, input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(input, rng),
        BotType::Minimax => {
            calculate_minimax_move(input).or_else(|| calculate_random_move(input, rng))
        }
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.grid.get_available_moves();
    rng.choose(&available_moves)
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    if evaluate(&input.grid).is_terminal() {
        return None;
    }

    let mut board = input.grid;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in input.grid.get_available_moves() {
        board.set(index, Some(input.bot_mark));
        let score = minimax(&mut board, false, input.bot_mark);
        board.set(index, None);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(board: &mut Grid, is_maximizing: bool, bot_mark: Mark) -> i32 {
    match evaluate(board) {
        Outcome::Win(line) => return if line.mark == bot_mark { 1 } else { -1 },
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mover = if is_maximizing { bot_mark } else { bot_mark.opponent() };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in board.get_available_moves() {
        board.set(index, Some(mover));
        let score = minimax(board, !is_maximizing, bot_mark);
        board.set(index, None);

        best = if is_maximizing { best.max(score) } else { best.min(score) };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::grid_from;

    fn play_out(grid: Grid, human: Mark, on_game_end: &mut impl FnMut(&Grid, Outcome)) {
        let outcome = evaluate(&grid);
        if outcome.is_terminal() {
            on_game_end(&grid, outcome);
            return;
        }

        let mover = grid.next_mark();
        if mover == human {
            for index in grid.get_available_moves() {
                let next = grid.apply(index, human).unwrap();
                play_out(next, human, on_game_end);
            }
        } else {
            let input = BotInput::new(grid, mover);
            let index = calculate_minimax_move(&input).expect("bot must find a move");
            let next = grid.apply(index, mover).unwrap();
            play_out(next, human, on_game_end);
        }
    }

    #[test]
    fn test_minimax_never_loses_as_second_player() {
        let mut games = 0;
        play_out(Grid::empty(), Mark::X, &mut |grid, outcome| {
            games += 1;
            assert_ne!(outcome.winner(), Some(Mark::X), "human won on\n{}", grid);
        });
        assert!(games > 0);
    }

    #[test]
    fn test_minimax_never_loses_as_first_player() {
        let mut games = 0;
        play_out(Grid::empty(), Mark::O, &mut |grid, outcome| {
            games += 1;
            assert_ne!(outcome.winner(), Some(Mark::O), "human won on\n{}", grid);
        });
        assert!(games > 0);
    }

    #[test]
    fn test_minimax_against_itself_is_draw() {
        let mut grid = Grid::empty();
        while !evaluate(&grid).is_terminal() {
            let mark = grid.next_mark();
            let index = calculate_minimax_move(&BotInput::new(grid, mark)).unwrap();
            grid = grid.apply(index, mark).unwrap();
        }
        assert_eq!(evaluate(&grid), Outcome::Draw);
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        let grid = grid_from("OO. XX. X..");
        let input = BotInput::new(grid, Mark::O);
        assert_eq!(calculate_minimax_move(&input), Some(2));
    }

    #[test]
    fn test_minimax_blocks_immediate_loss() {
        let grid = grid_from("XX. .O. ...");
        let input = BotInput::new(grid, Mark::O);
        assert_eq!(calculate_minimax_move(&input), Some(2));
    }

    #[test]
    fn test_minimax_ties_break_to_lowest_index() {
        // Every reply to a centre opening draws except the edges, so the first corner wins the tie.
        let grid = grid_from("... .X. ...");
        let input = BotInput::new(grid, Mark::O);
        assert_eq!(calculate_minimax_move(&input), Some(0));
    }

    #[test]
    fn test_minimax_leaves_input_grid_unchanged() {
        let grid = grid_from("X.. .O. ..X");
        let input = BotInput::new(grid, Mark::O);
        calculate_minimax_move(&input);
        assert_eq!(input.grid, grid);
    }

    #[test]
    fn test_minimax_has_no_move_on_finished_grid() {
        let grid = grid_from("XXX OO. ...");
        assert_eq!(calculate_minimax_move(&BotInput::new(grid, Mark::O)), None);
    }

    #[test]
    fn test_random_move_only_picks_empty_cells() {
        let mut rng = SessionRng::new(42);
        let grid = grid_from("XO. .XO X.O");
        let input = BotInput::new(grid, Mark::X);
        for _ in 0..200 {
            let index = calculate_random_move(&input, &mut rng).unwrap();
            assert!(grid.is_empty_cell(index));
        }
    }

    #[test]
    fn test_random_move_covers_all_empty_cells() {
        let mut rng = SessionRng::new(3);
        let grid = grid_from("XO. .XO X.O");
        let input = BotInput::new(grid, Mark::X);
        let mut picked = [false; 9];
        for _ in 0..500 {
            picked[calculate_random_move(&input, &mut rng).unwrap()] = true;
        }
        for index in grid.get_available_moves() {
            assert!(picked[index]);
        }
    }

    #[test]
    fn test_random_move_on_full_grid_is_none() {
        let mut rng = SessionRng::new(1);
        let grid = grid_from("XOX XOO OXX");
        assert_eq!(calculate_random_move(&BotInput::new(grid, Mark::O), &mut rng), None);
    }

    #[test]
    fn test_calculate_move_dispatches_on_bot_type() {
        let mut rng = SessionRng::new(9);
        let grid = grid_from("XX. .O. ...");
        let input = BotInput::new(grid, Mark::O);
        assert_eq!(calculate_move(BotType::Minimax, &input, &mut rng), Some(2));

        let index = calculate_move(BotType::Random, &input, &mut rng).unwrap();
        assert!(grid.is_empty_cell(index));
    }
}
