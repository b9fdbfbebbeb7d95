use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the crate itself.
///
/// Failures inside construction blocks keep the caller's own error type and
/// never pass through here.
#[derive(Error, Debug)]
pub enum TagTreeError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TagTreeError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type TagTreeResult<T> = Result<T, TagTreeError>;
