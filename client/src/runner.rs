use std::io::{self, Write};

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{GameSettings, TicTacToeGameState};
use tictactoe_common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{Command, HELP_TEXT};
use crate::render::{render_board, status_text};

/// Plays until the input ends or the player quits. Returns the settings as
/// they stand at exit, including any `mode`/`difficulty` changes.
pub async fn run_game_loop<R, W>(
    input: R,
    output: &mut W,
    mut settings: GameSettings,
    show_cell_numbers: bool,
    rng: &mut SessionRng,
) -> io::Result<GameSettings>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut game = TicTacToeGameState::new(settings.mode);
    let mut redraw = true;

    writeln!(
        output,
        "Tic-tac-toe ({}, difficulty {}). Type 'help' for commands.",
        settings.mode, settings.difficulty
    )?;

    loop {
        if redraw {
            write_state(output, &game, show_cell_numbers)?;
            redraw = false;
        }

        if game.is_computer_turn() {
            tokio::time::sleep(settings.computer_delay()).await;
            let (index, _) = game
                .computer_move(settings.difficulty, rng)
                .map_err(io::Error::other)?;
            writeln!(output, "Computer plays {}", index + 1)?;
            redraw = true;
            continue;
        }

        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Place(index) => match game.place_mark(index) {
                Ok(_) => redraw = true,
                Err(e) => writeln!(output, "{}", e)?,
            },
            Command::Reset => {
                game.reset();
                redraw = true;
            }
            Command::Mode(mode) => {
                settings.mode = mode;
                game.set_mode(mode);
                writeln!(output, "Mode set to {}", mode)?;
                redraw = true;
            }
            Command::Difficulty(difficulty) => {
                settings.difficulty = difficulty;
                game.reset();
                writeln!(output, "Difficulty set to {}", difficulty)?;
                redraw = true;
            }
            Command::Help => writeln!(output, "{}", HELP_TEXT)?,
            Command::Quit => break,
        }
    }

    log!("Leaving with settings {:?}", settings);
    Ok(settings)
}

fn write_state<W: Write>(output: &mut W, game: &TicTacToeGameState, show_cell_numbers: bool) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", render_board(game.board(), game.winning_line(), show_cell_numbers))?;
    writeln!(output, "{}", status_text(game))?;
    if game.status().is_over() {
        writeln!(output, "Type 'r' to play again.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::{Difficulty, GameMode};

    fn settings(mode: GameMode, difficulty: Difficulty) -> GameSettings {
        GameSettings {
            mode,
            difficulty,
            computer_delay_ms: 0,
        }
    }

    async fn run(script: &str, settings: GameSettings) -> (String, GameSettings) {
        let mut output = Vec::new();
        let mut rng = SessionRng::new(1);
        let final_settings = run_game_loop(script.as_bytes(), &mut output, settings, true, &mut rng)
            .await
            .unwrap();
        (String::from_utf8(output).unwrap(), final_settings)
    }

    #[tokio::test]
    async fn test_two_player_win_is_reported() {
        let (output, _) = run(
            "1\n4\n2\n5\n3\n",
            settings(GameMode::TwoPlayer, Difficulty::Easy),
        )
        .await;
        assert!(output.contains("Player X wins!"), "{}", output);
        assert!(output.contains("[X]|[X]|[X]"), "{}", output);
        assert!(output.contains("Type 'r' to play again."));
    }

    #[tokio::test]
    async fn test_moves_after_game_over_are_rejected_until_reset() {
        let (output, _) = run(
            "1\n4\n2\n5\n3\n9\nr\n9\n",
            settings(GameMode::TwoPlayer, Difficulty::Easy),
        )
        .await;
        assert!(output.contains("Game is already over"), "{}", output);
        assert!(output.contains("Player O's turn"), "{}", output);
    }

    #[tokio::test]
    async fn test_occupied_cell_is_reported() {
        let (output, _) = run("5\n5\nq\n", settings(GameMode::TwoPlayer, Difficulty::Easy)).await;
        assert!(output.contains("cell 4 is already marked"), "{}", output);
    }

    #[tokio::test]
    async fn test_hard_computer_replies_to_corner_with_center() {
        let (output, _) = run("1\nq\n", settings(GameMode::VsComputer, Difficulty::Hard)).await;
        assert!(output.contains("Computer plays 5"), "{}", output);
        assert!(output.contains(" X | 2 | 3 \n---+---+---\n 4 | O | 6 "), "{}", output);
    }

    #[tokio::test]
    async fn test_settings_commands_change_and_return_settings() {
        let (output, final_settings) = run(
            "mode npc\ndifficulty hard\nbogus\nq\n",
            settings(GameMode::TwoPlayer, Difficulty::Easy),
        )
        .await;
        assert_eq!(final_settings.mode, GameMode::VsComputer);
        assert_eq!(final_settings.difficulty, Difficulty::Hard);
        assert!(output.contains("Mode set to vs-computer"));
        assert!(output.contains("Difficulty set to hard"));
        assert!(output.contains("Unknown command 'bogus'"));
    }

    #[tokio::test]
    async fn test_game_against_easy_computer_finishes() {
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(2);
        let (output, _) = run(&script, settings(GameMode::VsComputer, Difficulty::Easy)).await;
        let finished = ["Player X wins!", "Computer wins!", "Game ended in a draw!"]
            .iter()
            .any(|line| output.contains(line));
        assert!(finished, "{}", output);
    }
}
