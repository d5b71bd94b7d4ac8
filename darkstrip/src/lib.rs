//! Core library for the darkstrip tool.
//!
//! darkstrip rewrites a single file in place, deleting dark-mode Tailwind
//! variant classes (`dark:bg-*`, `dark:text-*`, ...) so that only the
//! light-mode styling remains.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing the fixed rule table and its compiled regex patterns.
pub mod constants;

/// Module defining the deletion and replacement rules.
pub mod rules;

/// Module containing the pure text transform.
pub mod rewrite;

/// Module implementing the read, rewrite and write cycle for one file.
pub mod file_rewriter;

/// Module defining the error types.
pub mod error;

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module for console output.
pub mod output;

/// Module defining the entry point logic shared by all binaries.
pub mod entry_point;

pub use error::RewriteError;
pub use file_rewriter::{FileRewriter, RewriteSummary};
pub use rewrite::{rewrite, rewrite_with_summary, RewriteOutcome, RuleStats};
