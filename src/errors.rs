//! Unified application error type.
//! All modules (core, storage, ui, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid day selection: {0}")]
    InvalidDaySelection(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Failed to read saved selections: {0}")]
    PersistenceRead(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Interactive session
    // ---------------------------
    #[error("Interrupted by user")]
    Interrupted,
}

pub type AppResult<T> = Result<T, AppError>;
