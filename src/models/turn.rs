use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Raw body of a resolve-turn request.
///
/// Built only from a JSON object through `TryFrom<Map<String, Value>>`, so a
/// positional array never becomes a turn. Every field is optional so that an
/// absent key surfaces as [`AppError::MissingField`] instead of a
/// deserialization failure.
/// A key sent as `null` is treated as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnPayload {
    pub was_answer_correct: Option<bool>,
    pub player_health: Option<i64>,
    pub boss_health: Option<i64>,
}

impl TryFrom<Map<String, Value>> for TurnPayload {
    type Error = AppError;

    fn try_from(body: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(Value::Object(body))?)
    }
}

/// A fully specified turn, ready to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRequest {
    pub was_answer_correct: bool,
    pub player_health: i64,
    pub boss_health: i64,
}

impl TryFrom<TurnPayload> for TurnRequest {
    type Error = AppError;

    fn try_from(payload: TurnPayload) -> Result<Self, Self::Error> {
        let (Some(was_answer_correct), Some(player_health), Some(boss_health)) = (
            payload.was_answer_correct,
            payload.player_health,
            payload.boss_health,
        ) else {
            return Err(AppError::MissingField);
        };

        Ok(Self {
            was_answer_correct,
            player_health,
            boss_health,
        })
    }
}

/// The combatant that took damage in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Player,
    Boss,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Player => write!(f, "player"),
            Target::Boss => write!(f, "boss"),
        }
    }
}

/// Outcome of a resolved turn, returned to the client as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResult {
    pub new_player_health: i64,
    pub new_boss_health: i64,
    pub target: Target,
    pub damage_dealt: i64,
    pub message: String,
}
