use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::document::ShapeError;

/// Errors that can occur while migrating a vocabulary file
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("The file '{}' was not found", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed input in '{}': {reason}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        reason: MalformedReason,
    },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why an input document was rejected
#[derive(Debug, Error)]
pub enum MalformedReason {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected structure: {0}")]
    Shape(#[from] ShapeError),
}

/// Coarse failure category, for callers that only need to branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    MalformedInput,
    Io,
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::NotFound { .. } => ErrorKind::NotFound,
            TransformError::MalformedInput { .. } => ErrorKind::MalformedInput,
            TransformError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Classify a failure to read the input file
    pub(crate) fn reading(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                TransformError::NotFound { path, source }
            }
            _ => TransformError::Io { path, source },
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<MalformedReason>) -> Self {
        TransformError::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TransformError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = TransformError::reading(
            "85quranic-words.json",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "The file '85quranic-words.json' was not found");
    }

    #[test]
    fn test_permission_denied_on_read_is_not_found() {
        let err = TransformError::reading(
            "locked.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_other_read_failures_are_io() {
        let err = TransformError::reading(
            "words.json",
            io::Error::new(io::ErrorKind::Interrupted, "interrupted"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("interrupted"));
    }

    #[test]
    fn test_malformed_message_carries_parse_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TransformError::malformed("words.json", parse_err);

        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        let message = err.to_string();
        assert!(message.starts_with("Malformed input in 'words.json': invalid JSON"));
        assert!(message.contains("EOF"));
    }
}
