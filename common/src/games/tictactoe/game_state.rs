use crate::games::SessionRng;
use crate::log;
use super::board::{Board, apply_move};
use super::bot_controller::select_move;
use super::error::GameError;
use super::types::{Difficulty, GameMode, GameStatus, Mark};
use super::win_detector::{check_draw, check_win, winning_line};

/// X always opens.
pub const FIRST_MARK: Mark = Mark::X;
/// In vs-computer mode the human plays X and the computer plays O.
pub const COMPUTER_MARK: Mark = Mark::O;

/// One game from empty board to win or draw.
///
/// Won and drawn games reject further moves until [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    mode: GameMode,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_mark: FIRST_MARK,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.status == GameStatus::InProgress
            && self.current_mark == COMPUTER_MARK
    }

    /// The three cells of the winning line once the game is won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.status {
            GameStatus::Won(mark) => winning_line(&self.board, mark),
            _ => None,
        }
    }

    /// Places the current player's mark and advances the game.
    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        let mark = self.current_mark;
        apply_move(&mut self.board, index, mark)?;
        self.last_move = Some(index);
        log!("{} marks cell {}", mark, index);

        self.check_game_over(mark);

        match self.status {
            GameStatus::InProgress => self.current_mark = mark.opponent(),
            GameStatus::Won(winner) => log!("{} wins on {}", winner, self.board),
            GameStatus::Draw => log!("Draw on {}", self.board),
        }

        Ok(self.status)
    }

    /// Lets the computer pick and play its move at `difficulty`.
    pub fn computer_move(
        &mut self,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> Result<(usize, GameStatus), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(GameError::NotComputerTurn);
        }

        let index = select_move(&self.board, COMPUTER_MARK, difficulty, rng)?;
        log!("Computer picked cell {} at {} difficulty from {}", index, difficulty, self.board);
        let status = self.place_mark(index)?;
        Ok((index, status))
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
        log!("Game reset ({})", self.mode);
    }

    /// Switching modes always starts a fresh game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    // The mover's win is checked before the draw, since the last move can
    // fill the board and complete a line at once.
    fn check_game_over(&mut self, mover: Mark) {
        if check_win(&self.board, mover) {
            self.status = GameStatus::Won(mover);
        } else if check_draw(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::error::IllegalMoveReason;

    fn play(game: &mut TicTacToeGameState, moves: &[usize]) -> GameStatus {
        let mut status = game.status();
        for &index in moves {
            status = game.place_mark(index).unwrap();
        }
        status
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let game = TicTacToeGameState::new(GameMode::TwoPlayer);
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = TicTacToeGameState::new(GameMode::TwoPlayer);
        game.place_mark(0).unwrap();
        assert_eq!(game.current_mark(), Mark::O);
        game.place_mark(4).unwrap();
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(game.last_move(), Some(4));
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = TicTacToeGameState::new(GameMode::TwoPlayer);
        let status = play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(status, GameStatus::Won(Mark::X));
        assert_eq!(game.winning_line(), Some([0, 1, 2]));
        assert_eq!(game.place_mark(8), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_ends_game() {
        let mut game = TicTacToeGameState::new(GameMode::TwoPlayer);
        // X O X / X O O / O X X
        let status = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.place_mark(0), Err(GameError::GameOver));
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let mut game = TicTacToeGameState::new(GameMode::TwoPlayer);
        // X O X / O X O / O X X, X completes 0-4-8 with the ninth move.
        let status = play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(status, GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_illegal_move_keeps_turn() {
        let mut game = TicTacToeGameState::new(GameMode::TwoPlayer);
        game.place_mark(4).unwrap();
        assert_eq!(
            game.place_mark(4),
            Err(GameError::IllegalMove {
                index: 4,
                reason: IllegalMoveReason::Occupied
            })
        );
        assert_eq!(
            game.place_mark(12),
            Err(GameError::IllegalMove {
                index: 12,
                reason: IllegalMoveReason::OutOfRange
            })
        );
        assert_eq!(game.current_mark(), Mark::O);
        assert_eq!(game.last_move(), Some(4));
    }

    #[test]
    fn test_reset_clears_everything_but_mode() {
        let mut game = TicTacToeGameState::new(GameMode::VsComputer);
        play(&mut game, &[0, 3, 1, 4, 2]);
        game.reset();
        assert_eq!(game, TicTacToeGameState::new(GameMode::VsComputer));
    }

    #[test]
    fn test_reset_then_replay_matches_fresh_game() {
        let moves = [4, 0, 8, 2, 1, 7, 6, 3, 5];

        let mut fresh = TicTacToeGameState::new(GameMode::TwoPlayer);
        let fresh_status = play(&mut fresh, &moves);

        let mut reused = TicTacToeGameState::new(GameMode::TwoPlayer);
        play(&mut reused, &[0, 3, 1, 4, 2]);
        reused.reset();
        let reused_status = play(&mut reused, &moves);

        assert_eq!(fresh_status, reused_status);
        assert_eq!(fresh, reused);
    }

    #[test]
    fn test_set_mode_resets() {
        let mut game = TicTacToeGameState::new(GameMode::TwoPlayer);
        game.place_mark(0).unwrap();
        game.set_mode(GameMode::VsComputer);
        assert_eq!(game, TicTacToeGameState::new(GameMode::VsComputer));
    }

    #[test]
    fn test_computer_turn_only_in_vs_computer_mode() {
        let mut rng = SessionRng::new(1);

        let mut two_player = TicTacToeGameState::new(GameMode::TwoPlayer);
        two_player.place_mark(0).unwrap();
        assert!(!two_player.is_computer_turn());
        assert_eq!(
            two_player.computer_move(Difficulty::Hard, &mut rng),
            Err(GameError::NotComputerTurn)
        );

        let mut vs = TicTacToeGameState::new(GameMode::VsComputer);
        assert_eq!(
            vs.computer_move(Difficulty::Hard, &mut rng),
            Err(GameError::NotComputerTurn)
        );
        vs.place_mark(0).unwrap();
        assert!(vs.is_computer_turn());
    }

    #[test]
    fn test_hard_computer_answers_corner_with_center() {
        let mut rng = SessionRng::new(1);
        let mut game = TicTacToeGameState::new(GameMode::VsComputer);
        game.place_mark(0).unwrap();
        let (index, status) = game.computer_move(Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(index, 4);
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.current_mark(), Mark::X);
    }

    #[test]
    fn test_computer_wins_when_given_the_chance() {
        let mut rng = SessionRng::new(1);
        let mut game = TicTacToeGameState::new(GameMode::VsComputer);
        game.place_mark(0).unwrap();
        game.computer_move(Difficulty::Hard, &mut rng).unwrap();
        game.place_mark(8).unwrap();
        // O holds 4; X at 0 and 8. Any O edge keeps the draw, X then errs.
        let (o_move, _) = game.computer_move(Difficulty::Hard, &mut rng).unwrap();
        let opposite = 8 - o_move;
        let x_move = [1, 2, 3, 5, 6, 7]
            .into_iter()
            .find(|&i| i != opposite && game.board().is_empty_at(i))
            .unwrap();
        game.place_mark(x_move).unwrap();
        let (winning, status) = game.computer_move(Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(winning, opposite);
        assert_eq!(status, GameStatus::Won(Mark::O));
        assert!(game.winning_line().unwrap().contains(&4));
        assert_eq!(
            game.computer_move(Difficulty::Hard, &mut rng),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn test_full_game_against_easy_computer_terminates() {
        let mut rng = SessionRng::new(31);
        let mut game = TicTacToeGameState::new(GameMode::VsComputer);
        let mut turns = 0;
        while !game.status().is_over() {
            if game.is_computer_turn() {
                game.computer_move(Difficulty::Easy, &mut rng).unwrap();
            } else {
                let index = crate::games::tictactoe::legal_moves(game.board())[0];
                game.place_mark(index).unwrap();
            }
            turns += 1;
        }
        assert!(turns <= 9);
    }
}
