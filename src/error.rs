//! Error taxonomy. Configuration errors are rejected before any trial runs;
//! sampling exhaustion is a value (`Ok(None)` outcome), never an error.

use thiserror::Error;

/// Fatal reference-data failures at startup. Not recoverable mid-trial.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid reference data ({context}): {message}")]
    Invalid { context: String, message: String },
}

impl DataError {
    pub(crate) fn invalid(context: impl Into<String>, message: impl Into<String>) -> Self {
        DataError::Invalid {
            context: context.into(),
            message: message.into(),
        }
    }
}

/// Bad simulation parameters, detected before any randomness is consumed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown bait id: {0}")]
    UnknownBait(String),
    #[error("unknown lure id: {0}")]
    UnknownLure(String),
    #[error("unknown loot table: {0}")]
    UnknownLootTable(String),
    #[error("rod {slot} level {level} out of range (0-5)")]
    RodLevelOutOfRange { slot: &'static str, level: u8 },
    #[error("bait pouch level {0} out of range (0-5)")]
    PouchLevelOutOfRange(u8),
}
