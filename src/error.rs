use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`FileSystem`](crate::fs::FileSystem) and
/// [`PathWalker`](crate::walk::PathWalker) implementations.
#[derive(Debug, Error)]
pub enum FsError {
    /// The in-memory filesystem has no entry at `filename`.
    #[error("fake file {} not found", .filename.display())]
    NotFound { filename: PathBuf },

    /// Host-style "does not exist", returned by the in-memory `stat`.
    #[error("{}: file does not exist", .path.display())]
    NotExist { path: PathBuf },

    /// Error reported by the operating system, passed through unmodified.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl FsError {
    /// True for the in-memory `NotFound` variant only.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }

    /// True whenever the error means the path does not exist, whichever
    /// implementation produced it.
    pub fn is_not_exist(&self) -> bool {
        match self {
            FsError::NotFound { .. } | FsError::NotExist { .. } => true,
            FsError::Io(err) => err.kind() == io::ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = FsError::NotFound {
            filename: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.to_string(), "fake file missing.txt not found");
        assert!(err.is_not_found());
        assert!(err.is_not_exist());
    }

    #[test]
    fn test_not_exist_display() {
        let err = FsError::NotExist {
            path: PathBuf::from("a/b"),
        };
        assert_eq!(err.to_string(), "a/b: file does not exist");
        assert!(!err.is_not_found());
        assert!(err.is_not_exist());
    }

    #[test]
    fn test_io_passthrough() {
        let err = FsError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.is_not_exist());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "gone");

        let err = FsError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!err.is_not_exist());
    }
}
