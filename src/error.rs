use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid contribution: {0}")]
    InvalidContribution(String),

    #[error("Invalid contribution item at '{path}': {reason}")]
    InvalidItem { path: String, reason: String },

    #[error("Content not decodable: {0}")]
    MalformedContent(String),

    #[error("Scorer '{originator}' failed: {reason}")]
    ScorerFailed { originator: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
