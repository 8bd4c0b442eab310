use crate::config::{MachineConfig, DEFAULT_PASSWORD};
use crate::core::DEFAULT_PRICE;
use crate::types::{Cents, Mode};
use clap::Parser;
use std::path::PathBuf;

/// Simulate a cola vending machine from the command line
#[derive(Parser, Debug)]
#[command(name = "vending-machine")]
#[command(about = "Simulate a cola vending machine from the command line", long_about = None)]
pub struct CliArgs {
    /// Script of commands to run instead of reading from the terminal
    #[arg(value_name = "SCRIPT", help = "Path to a file with one command per line")]
    pub script: Option<PathBuf>,

    /// Price of one cola in cents
    #[arg(
        long = "price",
        value_name = "CENTS",
        default_value_t = DEFAULT_PRICE,
        help = "Price of one cola in cents, a positive multiple of 5"
    )]
    pub price: Cents,

    /// Password for LOCK and UNLOCK
    #[arg(
        long = "password",
        value_name = "PASSWORD",
        default_value = DEFAULT_PASSWORD,
        help = "Password for the LOCK and UNLOCK commands"
    )]
    pub password: String,

    /// Start in normal mode
    #[arg(long = "locked", help = "Start in normal mode instead of service mode")]
    pub locked: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log level or filter directive (logs go to stderr)"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create a MachineConfig from CLI arguments
    ///
    /// Invalid values fall back to the defaults with a warning.
    pub fn to_machine_config(&self) -> MachineConfig {
        let mode = if self.locked {
            Mode::Normal
        } else {
            Mode::Service
        };
        MachineConfig::new(self.price, self.password.clone(), mode)
    }
}
