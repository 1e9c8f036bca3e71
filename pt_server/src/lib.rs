//! Poker table tracker server.
//!
//! HTTP front for [`poker_tracker`]: configuration, logging, metrics and
//! the axum router.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
