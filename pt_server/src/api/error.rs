//! API error type and its HTTP mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use poker_tracker::TrackerError;
use serde::Serialize;

use crate::logging::log_rejected_request;

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors a handler can return
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body is not valid JSON for the endpoint
    #[error("Invalid JSON payload: {0}")]
    InvalidJson(String),

    /// Required field absent or empty
    #[error("{0}")]
    MissingField(&'static str),

    /// Table rule or upstream failure
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::Tracker(err) => match err {
                TrackerError::InvalidCardFormat(_) | TrackerError::RoleSlotFull(_) => {
                    StatusCode::BAD_REQUEST
                }
                TrackerError::PlayerNotFound(_) | TrackerError::DealerNotFound => {
                    StatusCode::NOT_FOUND
                }
                TrackerError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::MissingField(_) => "missing_field",
            ApiError::Tracker(err) => match err {
                TrackerError::InvalidCardFormat(_) => "invalid_card_format",
                TrackerError::PlayerNotFound(_) => "player_not_found",
                TrackerError::RoleSlotFull(_) => "role_slot_full",
                TrackerError::DealerNotFound => "dealer_not_found",
                TrackerError::UpstreamUnavailable(_) => "upstream_unavailable",
            },
        }
    }

    /// Message safe to hand to the client
    pub fn client_message(&self) -> String {
        match self {
            ApiError::InvalidJson(_) => "Invalid JSON payload".to_string(),
            ApiError::MissingField(message) => (*message).to_string(),
            ApiError::Tracker(err) => err.client_message(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidJson(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error_kind = self.kind(), "{}", self);
        } else {
            log_rejected_request(self.kind(), &self.to_string());
        }

        (
            status,
            Json(ErrorResponse {
                error: self.client_message(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::MissingField("Missing card"), StatusCode::BAD_REQUEST),
            (
                TrackerError::InvalidCardFormat("ZZ".to_string()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                TrackerError::RoleSlotFull("dealer".to_string()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                TrackerError::PlayerNotFound("bob".to_string()).into(),
                StatusCode::NOT_FOUND,
            ),
            (TrackerError::DealerNotFound.into(), StatusCode::NOT_FOUND),
            (
                TrackerError::UpstreamUnavailable("timeout".to_string()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{err:?}");
        }
    }

    #[test]
    fn test_invalid_json_message_is_generic() {
        let err = ApiError::InvalidJson("EOF while parsing".to_string());
        assert_eq!(err.client_message(), "Invalid JSON payload");
    }
}
