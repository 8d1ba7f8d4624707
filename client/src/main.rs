mod command;
mod config;
mod render;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode};
use tictactoe_common::{log, logger};
use tokio::io::BufReader;

use config::get_config_manager;
use runner::run_game_loop;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe in the terminal")]
struct Args {
    /// two-player or vs-computer
    #[arg(long)]
    mode: Option<GameMode>,
    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Pause before the computer replies, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
    /// Config file, defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log engine activity to stderr
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = args.use_log_prefix.then(|| "Client".to_string());
        logger::init_logger(prefix);
    }

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config()?;

    let mut settings = config.game;
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty;
    }
    if let Some(delay_ms) = args.delay_ms {
        settings.computer_delay_ms = delay_ms;
    }
    settings.validate()?;

    let mut rng = args.seed.map_or_else(SessionRng::from_random, SessionRng::new);
    log!(
        "Starting {} game, difficulty {}, seed {}",
        settings.mode,
        settings.difficulty,
        rng.seed()
    );

    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    let final_settings = run_game_loop(
        input,
        &mut output,
        settings,
        config.show_cell_numbers,
        &mut rng,
    )
    .await?;

    if final_settings != config.game {
        config.game = final_settings;
        if let Err(e) = config_manager.set_config(&config) {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    Ok(())
}
