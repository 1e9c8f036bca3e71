//! Table API handlers.
//!
//! This module provides the HTTP endpoints the tracker UI polls and the
//! operator drives:
//! - Pulling the roster from the distributor and listing seated players
//! - Dealing cards to the dealer, the board or a player
//! - Revealing the dealer's hand
//! - Resetting the table and reading the reset log
//!
//! # Examples
//!
//! Deal the dealer's first card:
//! ```bash
//! curl -X POST http://localhost:5001/assign-card \
//!   -H "Content-Type: application/json" \
//!   -d '{"player_name": "dealer", "card": "AH"}'
//! ```

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use poker_tracker::table::{LogEntry, Player, TableSnapshot};
use serde::{Deserialize, Serialize};

use super::{AppState, error::ApiError};
use crate::metrics;

#[derive(Debug, Deserialize)]
pub struct AssignCardRequest {
    pub player_name: Option<String>,
    pub card: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RevealDealerRequest {
    pub revealed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct PlayersResponse {
    pub players: Vec<Player>,
}

#[derive(Debug, Serialize)]
pub struct AssignCardResponse {
    pub message: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Serialize)]
pub struct RevealDealerResponse {
    pub message: String,
    pub dealer: Player,
}

#[derive(Debug, Serialize)]
pub struct ResetGameResponse {
    pub message: String,
    pub poker_table: TableSnapshot,
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub logs: Vec<LogEntry>,
}

/// Treat `None` and blank strings alike.
pub(super) fn required<'a>(
    field: &'a Option<String>,
    missing: &'static str,
) -> Result<&'a str, ApiError> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::MissingField(missing)),
    }
}

/// Pull the roster from the distributor and merge it into the table.
///
/// # Response
///
/// Returns `200 OK` with the merged roster, dealer and community first:
/// ```json
/// {"players": [{"name": "dealer", "cards": [...], "revealed": false}, ...]}
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: distributor unreachable and the server runs
///   with `ROSTER_POLICY=fail`. With the default policy the current roster is
///   returned instead.
pub async fn get_players(State(state): State<AppState>) -> Result<Json<PlayersResponse>, ApiError> {
    match state.table_manager.sync_roster().await {
        Ok(sync) => {
            metrics::roster_sync_total(if sync.stale { "stale" } else { "ok" });
            Ok(Json(PlayersResponse {
                players: sync.players,
            }))
        }
        Err(e) => {
            metrics::roster_sync_total("error");
            Err(e.into())
        }
    }
}

/// Current roster, without contacting the distributor.
pub async fn get_active_players(State(state): State<AppState>) -> Json<PlayersResponse> {
    Json(PlayersResponse {
        players: state.table_manager.active_players().await,
    })
}

/// Deal a card to a player.
///
/// # Request Body
///
/// ```json
/// {"player_name": "dealer", "card": "AH"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: invalid JSON, missing field, invalid card, or no
///   empty slot left for the dealer/community
/// - `404 Not Found`: no player with that name
pub async fn assign_card(
    State(state): State<AppState>,
    payload: Result<Json<AssignCardRequest>, JsonRejection>,
) -> Result<Json<AssignCardResponse>, ApiError> {
    let Json(request) = payload?;
    let player_name = required(&request.player_name, "Missing player name or card")?;
    let card = required(&request.card, "Missing player name or card")?;

    let assignment = state.table_manager.assign_card(player_name, card).await?;
    metrics::cards_assigned_total(&assignment.role.to_string());

    Ok(Json(AssignCardResponse {
        message: format!(
            "Card {} assigned to {}",
            assignment.card.value, assignment.player
        ),
        players: assignment.table.players,
    }))
}

/// Show or hide the dealer's hand.
///
/// # Request Body
///
/// ```json
/// {"revealed": true}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: body missing or `revealed` absent
/// - `404 Not Found`: dealer seat missing
pub async fn reveal_dealer(
    State(state): State<AppState>,
    payload: Result<Json<RevealDealerRequest>, JsonRejection>,
) -> Result<Json<RevealDealerResponse>, ApiError> {
    let Json(request) = payload?;
    let revealed = request
        .revealed
        .ok_or(ApiError::MissingField("Missing 'revealed' status"))?;

    let dealer = state.table_manager.reveal_dealer(revealed).await?;
    Ok(Json(RevealDealerResponse {
        message: "Dealer reveal status updated".to_string(),
        dealer,
    }))
}

/// Archive the table to the reset log and start a new game.
///
/// # Response
///
/// Returns `200 OK` with the fresh table and the whole log:
/// ```json
/// {"message": "Game has been reset", "poker_table": {...}, "logs": [...]}
/// ```
pub async fn reset_game(State(state): State<AppState>) -> Json<ResetGameResponse> {
    let reset = state.table_manager.reset_game().await;
    metrics::game_resets_total();
    tracing::info!(archived = reset.logs.len(), "Game has been reset");

    Json(ResetGameResponse {
        message: "Game has been reset".to_string(),
        poker_table: reset.table,
        logs: reset.logs,
    })
}

/// Every archived table, oldest first.
pub async fn view_logs(State(state): State<AppState>) -> Json<LogsResponse> {
    Json(LogsResponse {
        logs: state.table_manager.logs().await,
    })
}
