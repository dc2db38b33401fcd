//! # Application Constants
//!
//! Fixed values of the battle rules and fallbacks for the server configuration.

/// Damage applied to the losing side of every turn.
pub const DAMAGE_PER_TURN: i64 = 1;

/// Lowest health value a combatant can be reported with.
pub const MIN_HEALTH: i64 = 0;

/// Message sent back when the answer was correct and the boss is hit.
pub const CORRECT_ANSWER_MESSAGE: &str = "Correct! The opponent takes 1 point of damage.";

/// Message sent back when the answer was wrong and the player is hit.
pub const INCORRECT_ANSWER_MESSAGE: &str = "Incorrect! You take 1 point of damage.";

pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 5000;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "quiz_battle=info,tower_http=info";
