use tictactoe_common::games::tictactoe::{
    BOARD_SIDE, Board, COMPUTER_MARK, Cell, GameMode, GameStatus, TicTacToeGameState,
};

const ROW_SEPARATOR: &str = "---+---+---";

/// Draws the grid. Cells of the winning line are wrapped in brackets.
pub fn render_board(board: &Board, winning_line: Option<[usize; 3]>, show_cell_numbers: bool) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| {
                    let index = row * BOARD_SIDE + col;
                    let symbol = match cell {
                        Cell::X => 'X',
                        Cell::O => 'O',
                        Cell::Empty if show_cell_numbers => {
                            char::from_digit(index as u32 + 1, 10).unwrap_or('?')
                        }
                        Cell::Empty => '.',
                    };
                    if winning_line.is_some_and(|line| line.contains(&index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join(format!("\n{}\n", ROW_SEPARATOR).as_str())
}

pub fn status_text(game: &TicTacToeGameState) -> String {
    let vs_computer = game.mode() == GameMode::VsComputer;
    match game.status() {
        GameStatus::InProgress if game.is_computer_turn() => "Computer's turn...".to_string(),
        GameStatus::InProgress => format!("Player {}'s turn", game.current_mark()),
        GameStatus::Won(mark) if vs_computer && mark == COMPUTER_MARK => "Computer wins!".to_string(),
        GameStatus::Won(mark) => format!("Player {} wins!", mark),
        GameStatus::Draw => "Game ended in a draw!".to_string(),
    }
}
