//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while locating, reading, or parsing a configuration file.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read.
    #[error("{message}")]
    Read {
        /// Path associated with the read error.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },

    /// The file is not valid RON for our types.
    #[error("{message}")]
    Parse {
        /// Path associated with the parse error.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// 1-based column number.
        col: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl Error {
    /// Render a human-friendly error message including the location.
    #[must_use]
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => {
                format!("Read error at {}: {}", path.display(), message)
            }
            Self::Parse {
                path,
                line,
                col,
                message,
            } => format!(
                "Config parse error at {}:{}:{}\n{}",
                path.display(),
                line,
                col,
                message
            ),
        }
    }
}
