use std::fmt;
use std::path::PathBuf;

/// File operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Loading the original contents.
    Read,
    /// Writing the rewritten contents back.
    Write,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Errors raised while rewriting a file.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    /// Path missing, unreadable or unwritable.
    #[error("failed to {operation} '{}'", path.display())]
    FileAccess {
        /// Target path
        path: PathBuf,
        /// Which half of the cycle failed
        operation: FileOperation,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// File contents are not valid UTF-8.
    #[error("'{}' is not valid UTF-8", path.display())]
    Decode {
        /// Target path
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: std::string::FromUtf8Error,
    },
}
