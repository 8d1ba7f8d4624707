use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfRange,
    Occupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    IllegalMove {
        index: usize,
        reason: IllegalMoveReason,
    },
    /// A move was requested for a board that is full or already won.
    NoLegalMove,
    GameOver,
    NotComputerTurn,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove {
                index,
                reason: IllegalMoveReason::OutOfRange,
            } => write!(f, "Illegal move: cell {} is out of range 0..=8", index),
            GameError::IllegalMove {
                index,
                reason: IllegalMoveReason::Occupied,
            } => write!(f, "Illegal move: cell {} is already marked", index),
            GameError::NoLegalMove => write!(f, "No legal move: the game is already decided"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotComputerTurn => write!(f, "It is not the computer's turn"),
        }
    }
}

impl std::error::Error for GameError {}
