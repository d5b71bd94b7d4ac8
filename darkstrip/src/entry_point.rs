use crate::cli::Cli;
use crate::file_rewriter::FileRewriter;
use crate::output;
use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;

/// Runs darkstrip with the given arguments, writing to stdout.
///
/// # Errors
///
/// Returns an error if the file cannot be read, decoded or written.
pub fn run_with_args<I, T>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run darkstrip with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if the file cannot be read, decoded or written.
pub fn run_with_args_to<I, T, W>(args: I, writer: &mut W) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let program_args =
        std::iter::once(OsString::from("darkstrip")).chain(args.into_iter().map(Into::into));
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            eprint!("{e}");
            return Ok(1);
        }
    };

    let Some(path) = cli_var.path() else {
        return Ok(0);
    };

    FileRewriter::new(&path).run()?;
    output::print_processed(writer, &path)?;

    Ok(0)
}
