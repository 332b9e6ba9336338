//! The `error` module defines the error type used by the `pophub` server
//! and client surfaces.
//!
//! Hub operations have their own narrower error (`HubError`); it converts
//! into this one where the two meet.

use thiserror::Error;

use crate::hub::HubError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected response status: {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Hub(#[from] HubError),
}

pub type Result<T> = std::result::Result<T, Error>;
