//! Vending Machine CLI
//!
//! Interactive simulator of a cola vending machine.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --locked --price 150
//! cargo run -- session.txt > transcript.txt
//! RUST_LOG=debug cargo run -- session.txt
//! ```
//!
//! Without a SCRIPT argument commands are read from the terminal with line
//! editing and history. With one, commands are read from the file and
//! echoed after each prompt so stdout holds the full transcript.
//!
//! Logs are written to stderr and stay off by default above `warn`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script not found, I/O failure, terminal failure)

use std::process;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vending_machine::cli;
use vending_machine::core::VendingMachine;
use vending_machine::io::{run_session, EditorSource, LineSource, ScriptSource};
use vending_machine::SessionError;

fn main() {
    let args = cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut machine = VendingMachine::new(args.to_machine_config());

    if let Err(e) = run(&mut machine, &args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(machine: &mut VendingMachine, args: &cli::CliArgs) -> Result<(), SessionError> {
    let mut source: Box<dyn LineSource> = match &args.script {
        Some(path) => Box::new(ScriptSource::open(path)?),
        None => Box::new(EditorSource::new()?),
    };

    let mut output = std::io::stdout();
    run_session(machine, source.as_mut(), &mut output)
}
