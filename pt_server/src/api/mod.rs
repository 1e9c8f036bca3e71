//! HTTP API for the table tracker.
//!
//! Thin handlers over [`TableManager`]: each one checks that the required
//! fields are present, calls a single manager operation and serializes the
//! result or the error.
//!
//! # Modules
//!
//! - [`table`]: roster, card assignment, dealer reveal, reset and logs
//! - [`community`]: board-only views of the `community` seat
//! - [`error`]: error type and status mapping
//! - [`request_id`]: request correlation middleware
//!
//! # Endpoints Overview
//!
//! - `GET  /get-players` - Pull roster from the distributor and merge it
//! - `GET  /get-active-players` - Current roster
//! - `POST /assign-card` - Deal a card to a player
//! - `POST /assign-community-card` - Deal the next board card
//! - `GET  /get-community-cards` - Current board
//! - `POST /reset-community-cards` - Turn the board face down
//! - `POST /reveal-dealer` - Show or hide the dealer's hand
//! - `POST /reset-game` - Archive the table and start over
//! - `GET  /view-logs` - Archived tables
//! - `GET  /health` - Health status
//! - `GET  /`, `GET /static/*` - Tracker UI
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use poker_tracker::{RosterPolicy, TableManager};
//! use poker_tracker::roster::{DistributorClient, DistributorConfig};
//! use pt_server::api::{AppState, create_router};
//! use std::{path::Path, sync::Arc};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DistributorClient::new(DistributorConfig::default())?;
//! let state = AppState {
//!     table_manager: Arc::new(TableManager::new(Arc::new(client), RosterPolicy::Degrade)),
//! };
//!
//! let app = create_router(state, Path::new("static"));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is permissive so the UI can be served from another origin during
//! development.

pub mod community;
pub mod error;
pub mod request_id;
pub mod table;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use poker_tracker::TableManager;
use serde_json::json;
use std::{path::Path, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};

/// Page served at `/`.
pub const INDEX_FILE: &str = "poker_tracker.html";

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; the manager sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub table_manager: Arc<TableManager>,
}

/// Create the complete router with all endpoints and middleware.
///
/// # Arguments
///
/// - `state`: Application state with the table manager
/// - `static_dir`: Directory holding the tracker UI
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route("/get-players", get(table::get_players))
        .route("/get-active-players", get(table::get_active_players))
        .route("/assign-card", post(table::assign_card))
        .route("/reveal-dealer", post(table::reveal_dealer))
        .route("/reset-game", post(table::reset_game))
        .route("/view-logs", get(table::view_logs))
        .route("/assign-community-card", post(community::assign_community_card))
        .route("/get-community-cards", get(community::get_community_cards))
        .route("/reset-community-cards", post(community::reset_community_cards))
        .route("/health", get(health_check));

    Router::new()
        .merge(api_routes)
        .route_service("/", ServeFile::new(static_dir.join(INDEX_FILE)))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5001/health
/// # {"status":"healthy","version":"1.0.0","players":2,"resets":0,"timestamp":"2026-10-18T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "players": state.table_manager.player_count().await,
        "resets": state.table_manager.reset_count().await,
        "roster_policy": state.table_manager.policy().to_string(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
