//! Error types for loading motion parameters and reducing rotations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for motion parameter operations.
#[derive(Error, Debug)]
pub enum MotionError {
    /// The motion parameter file does not exist.
    #[error("Motion parameter file does not exist ({})", path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but is not a rectangular numeric table.
    #[error("Could not load motion data{}: line {line}: {reason}", display_source(source_path))]
    ParseError {
        source_path: Option<PathBuf>,
        line: usize,
        reason: String,
    },

    /// Caller broke the reducer contract, e.g. angle sequences of different lengths.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for motion parameter operations.
pub type Result<T> = std::result::Result<T, MotionError>;

fn display_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" from {}", path.display()),
        None => String::new(),
    }
}

impl MotionError {
    #[must_use]
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Parse failure at a 1-based line of in-memory text.
    #[must_use]
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::ParseError {
            source_path: None,
            line,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Attach the file a parse failure came from.
    #[must_use]
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::ParseError { line, reason, .. } => Self::ParseError {
                source_path: Some(path.to_path_buf()),
                line,
                reason,
            },
            other => other,
        }
    }
}
