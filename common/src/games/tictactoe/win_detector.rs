use super::board::Board;
use super::types::{Cell, Mark};

/// Rows, columns, then diagonals.
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

pub fn winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    let cells = board.cells();
    let target = mark.cell();
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&index| cells[index] == target))
        .copied()
}

pub fn check_win(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

/// True when no cell is empty. A full board can still hold a win, so check
/// for a winner first.
pub fn check_draw(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Cell::Empty)
}

pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| check_win(board, mark))
}

pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || check_draw(board)
}
