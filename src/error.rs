//! User-facing error taxonomy for command actions.
//!
//! Every failure an action can report is one [`ActionError`] variant. Each
//! variant renders to an [`ErrorResponse`] with a stable `error` message and a
//! `details` string that carries the specifics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// JSON body written for a failed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error("requires at least 1 arg(s), only received 0")]
    InvalidArguments,

    #[error("invalid URL format")]
    InvalidUrl { reason: String },

    #[error("failed to add URL")]
    GenerationFailed { reason: String },

    #[error("failed to add URL")]
    RetriesExhausted { attempts: usize },

    #[error("short code is required")]
    EmptyCode { action: &'static str },

    #[error("short code not found: {code}")]
    NotFound { code: String },

    #[error("invalid limit")]
    InvalidLimit { limit: i64, max: i64 },

    #[error("invalid offset")]
    InvalidOffset { offset: i64 },

    #[error("operation timed out")]
    Timeout {
        action: &'static str,
        limit: Duration,
    },

    #[error("operation cancelled")]
    Interrupted { action: &'static str },

    #[error("unexpected storage error")]
    Storage { detail: String },

    #[error("failed to write output")]
    Output { detail: String },
}

impl ActionError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArguments => "InvalidArguments",
            Self::InvalidUrl { .. } => "InvalidURL",
            Self::GenerationFailed { .. } => "GenerationFailed",
            Self::RetriesExhausted { .. } => "RetriesExhausted",
            Self::EmptyCode { .. } => "EmptyCode",
            Self::NotFound { .. } => "NotFound",
            Self::InvalidLimit { .. } => "InvalidLimit",
            Self::InvalidOffset { .. } => "InvalidOffset",
            Self::Timeout { .. } | Self::Interrupted { .. } => "Timeout",
            Self::Storage { .. } => "StorageError",
            Self::Output { .. } => "OutputError",
        }
    }

    /// Human-readable specifics of the failure; empty when there are none.
    pub fn details(&self) -> String {
        match self {
            Self::InvalidArguments => String::new(),
            Self::InvalidUrl { reason } | Self::GenerationFailed { reason } => reason.clone(),
            Self::RetriesExhausted { attempts } => format!(
                "exhausted retries generating a unique short code ({attempts} attempts)"
            ),
            Self::EmptyCode { action } => format!(
                "a required short code was not provided. Please see usage: {action} <shortCode>"
            ),
            Self::NotFound { .. } => "no live mapping exists for this code".to_string(),
            Self::InvalidLimit { limit, max } => {
                format!("limit must be between 1 and {max}; got {limit}")
            }
            Self::InvalidOffset { offset } => format!("offset must be >= 0; got {offset}"),
            Self::Timeout { action, limit } => {
                format!("{action} did not complete within {limit:?}")
            }
            Self::Interrupted { action } => {
                format!("{action} was interrupted by a shutdown signal")
            }
            Self::Storage { detail } | Self::Output { detail } => detail.clone(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            details: self.details(),
        }
    }
}
