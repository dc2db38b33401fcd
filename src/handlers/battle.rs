//! # Battle Handler
//!
//! Resolves one turn of a quiz battle from the client's view of the fight.

use axum::{Json, extract::rejection::JsonRejection};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::error::AppResult;
use crate::models::{TurnPayload, TurnRequest, TurnResult};
use crate::services::battle::resolve_turn;

/// Applies the damage of a single answered question.
///
/// POST /api/battle/resolve-turn TurnPayload
///
/// # Returns
///
/// - `200 OK` with [`TurnResult`] - Turn resolved
/// - `400 Bad Request` - A required field is missing, or the body is not a JSON
///   object with correctly typed fields
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn resolve_battle_turn(
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<Json<TurnResult>> {
    debug!("Processing resolve turn request");

    let Json(body) = body?;
    let payload = TurnPayload::try_from(body)?;
    let request = TurnRequest::try_from(payload)?;
    let result = resolve_turn(request);

    info!(
        damaged = %result.target,
        new_player_health = result.new_player_health,
        new_boss_health = result.new_boss_health,
        "Turn resolved"
    );

    Ok(Json(result))
}
