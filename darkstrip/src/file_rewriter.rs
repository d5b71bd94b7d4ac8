//! Read, rewrite and write back one file.

use crate::error::{FileOperation, RewriteError};
use crate::rewrite::{rewrite_with_summary, RuleStats};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteSummary {
    /// File that was rewritten
    pub path: PathBuf,
    /// Size before rewriting
    pub bytes_before: usize,
    /// Size after rewriting
    pub bytes_after: usize,
    /// Dark variant tokens deleted
    pub removed: usize,
    /// Literal substitutions made
    pub replaced: usize,
    /// Per-rule counts, in application order
    pub rules: Vec<RuleStats>,
}

/// Rewrites a single file in place.
///
/// The read handle is closed before the write starts. The write truncates the
/// file, so a failure halfway through leaves it partially written.
#[derive(Debug, Clone)]
pub struct FileRewriter {
    path: PathBuf,
}

impl FileRewriter {
    /// Create a rewriter for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// `FileAccess` if the file cannot be read, `Decode` if it is not UTF-8.
    pub fn read_source(&self) -> Result<String, RewriteError> {
        let bytes = fs::read(&self.path)
            .map_err(|source| self.access_error(FileOperation::Read, source))?;
        String::from_utf8(bytes).map_err(|source| RewriteError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Read, transform and write back the file.
    ///
    /// The file is written even when no rule matched.
    ///
    /// # Errors
    ///
    /// `FileAccess` on read or write failure, `Decode` on invalid UTF-8.
    /// Nothing is written if reading or decoding fails.
    pub fn run(&self) -> Result<RewriteSummary, RewriteError> {
        let source = self.read_source()?;
        let outcome = rewrite_with_summary(&source);

        fs::write(&self.path, outcome.text.as_bytes())
            .map_err(|source| self.access_error(FileOperation::Write, source))?;

        Ok(RewriteSummary {
            path: self.path.clone(),
            bytes_before: source.len(),
            bytes_after: outcome.text.len(),
            removed: outcome.removed(),
            replaced: outcome.replaced(),
            rules: outcome.rules,
        })
    }

    fn access_error(&self, operation: FileOperation, source: std::io::Error) -> RewriteError {
        RewriteError::FileAccess {
            path: self.path.clone(),
            operation,
            source,
        }
    }
}

/// Convenience wrapper around [`FileRewriter::run`].
///
/// # Errors
///
/// See [`FileRewriter::run`].
pub fn process_file(path: impl AsRef<Path>) -> Result<RewriteSummary, RewriteError> {
    FileRewriter::new(path.as_ref()).run()
}
