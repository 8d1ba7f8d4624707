use crate::games::SessionRng;
use super::board::{Board, legal_moves};
use super::error::GameError;
use super::types::{Difficulty, Mark};
use super::win_detector::{check_draw, check_win, is_terminal};

const WIN_SCORE: i32 = 1;
const DRAW_SCORE: i32 = 0;
const LOSS_SCORE: i32 = -1;

pub fn select_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.random_bool() {
                best_move(board, mark)
            } else {
                random_move(board, rng)
            }
        }
        Difficulty::Hard => best_move(board, mark),
    }
}

pub fn random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, GameError> {
    if is_terminal(board) {
        return Err(GameError::NoLegalMove);
    }
    let moves = legal_moves(board);
    rng.choose(&moves).copied().ok_or(GameError::NoLegalMove)
}

/// Optimal move for `computer_mark` assuming both sides play perfectly.
///
/// An immediate win is taken first, then an immediate opponent win is
/// blocked; otherwise every legal move is scored with [`minimax_value`].
/// Equal scores keep the lowest index.
pub fn best_move(board: &Board, computer_mark: Mark) -> Result<usize, GameError> {
    if is_terminal(board) {
        return Err(GameError::NoLegalMove);
    }

    let moves = legal_moves(board);
    let mut board = *board;

    if let Some(index) = find_winning_move(&mut board, computer_mark, &moves) {
        return Ok(index);
    }

    if let Some(index) = find_winning_move(&mut board, computer_mark.opponent(), &moves) {
        return Ok(index);
    }

    let mut best: Option<(usize, i32)> = None;
    for &index in &moves {
        board.place(index, computer_mark);
        let score = minimax_value(&mut board, computer_mark, false);
        board.clear(index);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index).ok_or(GameError::NoLegalMove)
}

/// Game value of `board` from the computer's side: +1 win, 0 draw, -1 loss.
///
/// `maximizing` is true when the computer is to move. Every trial move is
/// undone, so the board is unchanged on return.
pub fn minimax_value(board: &mut Board, computer_mark: Mark, maximizing: bool) -> i32 {
    let opponent_mark = computer_mark.opponent();

    if check_win(board, computer_mark) {
        return WIN_SCORE;
    }
    if check_win(board, opponent_mark) {
        return LOSS_SCORE;
    }
    if check_draw(board) {
        return DRAW_SCORE;
    }

    let to_move = if maximizing { computer_mark } else { opponent_mark };
    let scores = legal_moves(board).into_iter().map(|index| {
        board.place(index, to_move);
        let score = minimax_value(board, computer_mark, !maximizing);
        board.clear(index);
        score
    });

    let value = if maximizing { scores.max() } else { scores.min() };
    value.unwrap_or(DRAW_SCORE)
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board.place(index, mark);
        let wins = check_win(board, mark);
        board.clear(index);

        if wins {
            return Some(index);
        }
    }
    None
}
