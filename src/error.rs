//! Error types shared by every pipeline stage.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a run.
///
/// `NotFound` and `InvalidInput` happen before anything is computed;
/// `Io` only happens while writing the report.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input is structurally or semantically wrong.
    #[error("{0}")]
    InvalidInput(String),

    /// The input exists but could not be read, or the report could not be written.
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CalcError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
