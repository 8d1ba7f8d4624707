use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Difficulty, GameMode};

pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 500;
pub const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

/// Per-game choices made by the player. The difficulty is read on every
/// computer turn, so changing it mid-game takes effect on the next reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Pause before the computer replies.
    #[serde(default = "default_computer_delay_ms")]
    pub computer_delay_ms: u64,
}

fn default_computer_delay_ms() -> u64 {
    DEFAULT_COMPUTER_DELAY_MS
}

impl GameSettings {
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::TwoPlayer,
            difficulty: Difficulty::Easy,
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {} (got {})",
                MAX_COMPUTER_DELAY_MS, self.computer_delay_ms
            ));
        }
        Ok(())
    }
}
