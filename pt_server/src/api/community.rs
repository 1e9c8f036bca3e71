//! Community card endpoints.
//!
//! The board is stored on the `community` seat; these endpoints read and
//! write that seat directly for clients that treat the board separately.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use poker_tracker::table::Card;
use serde::{Deserialize, Serialize};

use super::{AppState, error::ApiError, table::required};
use crate::metrics;

#[derive(Debug, Deserialize)]
pub struct AssignCommunityCardRequest {
    pub card: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CommunityCardsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub community_cards: Vec<Card>,
}

/// Deal the next board card.
///
/// # Errors
///
/// - `400 Bad Request`: missing or invalid card, or all five slots dealt
pub async fn assign_community_card(
    State(state): State<AppState>,
    payload: Result<Json<AssignCommunityCardRequest>, JsonRejection>,
) -> Result<Json<CommunityCardsResponse>, ApiError> {
    let Json(request) = payload?;
    let card = required(&request.card, "Missing card in request")?;

    let assignment = state.table_manager.assign_community_card(card).await?;
    metrics::cards_assigned_total(&assignment.role.to_string());

    Ok(Json(CommunityCardsResponse {
        message: Some(format!("Community card {} added", assignment.card.value)),
        community_cards: assignment.table.community_cards,
    }))
}

pub async fn get_community_cards(State(state): State<AppState>) -> Json<CommunityCardsResponse> {
    Json(CommunityCardsResponse {
        message: None,
        community_cards: state.table_manager.community_cards().await,
    })
}

/// Turn the board face down again. The reset log is not touched.
pub async fn reset_community_cards(State(state): State<AppState>) -> Json<CommunityCardsResponse> {
    Json(CommunityCardsResponse {
        message: Some("Community cards reset".to_string()),
        community_cards: state.table_manager.reset_community_cards().await,
    })
}
