// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostarError {
    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed record at {}:{line}", path.display())]
    Malformed { path: PathBuf, line: usize },

    #[error("{a} and {b} are not neighbors")]
    NotAdjacent { a: String, b: String },

    #[error("No actor matches '{0}' (by nm id or exact name)")]
    UnknownActor(String),
}

pub type Result<T> = std::result::Result<T, CostarError>;
