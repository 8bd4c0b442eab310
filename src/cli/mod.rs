// CLI module
// Arguments of the vending machine binary: an optional script to replay,
// the cola price, the service password, the starting mode and the log filter.

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, or the --help flag), clap displays
/// an error message or help text and exits the process.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
