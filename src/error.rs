//! Startup errors
//!
//! Everything that can go wrong happens before the first frame: a missing
//! sprite, an unreadable settings file. Once the loop is running nothing fails.

use std::fmt;

/// Fatal startup error, propagated out of `main`
#[derive(Debug)]
pub enum GameError {
    /// A sprite could not be read or decoded
    Asset { path: String, message: String },
    /// The settings file or a game choice is invalid
    Config(String),
    /// A file exists but could not be read
    Io(String),
}

impl GameError {
    pub fn asset(path: &str, message: impl fmt::Display) -> Self {
        GameError::Asset {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Asset { path, message } => write!(f, "Asset error ({}): {}", path, message),
            GameError::Config(msg) => write!(f, "Config error: {}", msg),
            GameError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<ron::error::SpannedError> for GameError {
    fn from(e: ron::error::SpannedError) -> Self {
        GameError::Config(e.to_string())
    }
}
