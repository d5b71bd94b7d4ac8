//! Main binary entry point for the darkstrip tool.
//!
//! This binary delegates to the shared `entry_point::run_with_args()` function
//! so that every entry point behaves the same way.

use anyhow::Result;

fn main() -> Result<()> {
    // args_os: paths need not be valid UTF-8
    let code = darkstrip::entry_point::run_with_args(std::env::args_os().skip(1))?;
    std::process::exit(code);
}
