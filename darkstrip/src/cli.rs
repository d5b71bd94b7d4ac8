use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Command line arguments.
///
/// There are no flags: the first argument is always the file to rewrite,
/// even when it starts with `-`, and anything after it is ignored.
#[derive(Parser, Debug)]
#[command(
    name = "darkstrip",
    about = "Strip dark-mode Tailwind variant classes from a file in place",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// File to rewrite in place. Nothing happens when omitted.
    #[arg(
        value_name = "PATH",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Target file, if one was given.
    pub fn path(&self) -> Option<PathBuf> {
        self.args.first().map(PathBuf::from)
    }
}
