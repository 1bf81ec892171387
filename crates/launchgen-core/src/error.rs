use std::path::PathBuf;

use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("run configurations folder '{}' not found", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed run configuration{}: {reason}", display_path(.path))]
    MalformedDescriptor {
        path: Option<PathBuf>,
        reason: String,
    },

    #[error("run configuration{} has no name", display_path(.path))]
    IncompleteDescriptor { path: Option<PathBuf> },

    #[error("failed to write {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ConvertError::MalformedDescriptor {
            path: None,
            reason: reason.into(),
        }
    }

    /// Attach the descriptor file to errors raised while decoding in-memory text.
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ConvertError::MalformedDescriptor { path: None, reason } => {
                ConvertError::MalformedDescriptor {
                    path: Some(file.into()),
                    reason,
                }
            }
            ConvertError::IncompleteDescriptor { path: None } => {
                ConvertError::IncompleteDescriptor {
                    path: Some(file.into()),
                }
            }
            other => other,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" {}", path.display()),
        None => String::new(),
    }
}
