//! Error types shared by the library and the terminal front end.

use std::io;

/// Top-level error for everything that can fail outside the game rules
/// themselves (terminal I/O, asset declarations, logging setup).
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset key declared twice: {0}")]
    DuplicateKey(String),

    #[error("Asset {0} has a zero-sized frame")]
    EmptyFrame(String),

    #[error("Clip {clip} uses frames {start}..={end} but sheet {sheet} has {frames}")]
    ClipOutOfRange {
        clip: String,
        sheet: String,
        start: usize,
        end: usize,
        frames: usize,
    },
}
