//! HTTP client for the distributor service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{
    RosterSource,
    errors::{RosterError, RosterResult},
};

/// Distributor connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributorConfig {
    /// Base URL, e.g. `http://127.0.0.1:5000`
    pub base_url: String,

    /// Upper bound on a single roster fetch, in seconds
    pub timeout_secs: u64,
}

impl Default for DistributorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Body of `GET /get-players` on the distributor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterPayload {
    #[serde(default)]
    pub players: Vec<String>,
}

/// Pulls player names from the distributor
pub struct DistributorClient {
    endpoint: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl DistributorClient {
    /// Create a client for the given distributor
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Config` if the HTTP client cannot be built.
    pub fn new(config: DistributorConfig) -> RosterResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RosterError::Config(e.to_string()))?;

        Ok(Self {
            endpoint: format!("{}/get-players", config.base_url.trim_end_matches('/')),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    /// Full URL of the roster endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_error(&self, err: reqwest::Error) -> RosterError {
        if err.is_timeout() {
            RosterError::Timeout(self.timeout_secs)
        } else if err.is_decode() {
            RosterError::Payload(err.to_string())
        } else {
            RosterError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl RosterSource for DistributorClient {
    async fn fetch_players(&self) -> RosterResult<Vec<String>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::Status(status.as_u16()));
        }

        let payload: RosterPayload = response.json().await.map_err(|e| self.map_error(e))?;
        log::debug!(
            "Fetched {} player name(s) from {}",
            payload.players.len(),
            self.endpoint
        );
        Ok(payload.players)
    }
}
