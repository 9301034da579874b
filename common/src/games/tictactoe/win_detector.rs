use super::board::Grid;
use super::types::{Outcome, WinningLine};

/// Rows top to bottom, columns left to right, then both diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(grid: &Grid) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = grid.get(a)?;
        if grid.get(b) == Some(mark) && grid.get(c) == Some(mark) {
            Some(WinningLine::new(mark, line))
        } else {
            None
        }
    })
}

pub fn evaluate(grid: &Grid) -> Outcome {
    if let Some(line) = check_win_with_line(grid) {
        return Outcome::Win(line);
    }

    if grid.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
