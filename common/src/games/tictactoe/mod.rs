mod board;
mod bot_controller;
mod error;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT, apply_move, legal_moves};
pub use bot_controller::{best_move, minimax_value, random_move, select_move};
pub use error::{GameError, IllegalMoveReason};
pub use game_state::{COMPUTER_MARK, FIRST_MARK, TicTacToeGameState};
pub use settings::{DEFAULT_COMPUTER_DELAY_MS, GameSettings, MAX_COMPUTER_DELAY_MS};
pub use types::{Cell, Difficulty, GameMode, GameStatus, Mark};
pub use win_detector::{
    WINNING_LINES, check_draw, check_win, is_terminal, winner, winning_line,
};
