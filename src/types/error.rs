//! Error types for the vending machine
//!
//! This module defines the errors that can occur while interpreting commands
//! and while running an interactive session.
//!
//! # Error Categories
//!
//! - **Command Errors** ([`VendingError`]): invalid commands, wrong arity,
//!   invalid tokens, failed purchase gates, wrong password. These are never
//!   fatal; the message is shown to the user and the session continues.
//! - **Session Errors** ([`SessionError`]): I/O and line editor failures that
//!   end the session.
//!
//! The `Display` text of a [`VendingError`] is the exact message printed to
//! the user, so golden-output tests can compare transcripts verbatim.

use super::denomination::Cents;
use super::product::Cola;
use super::reply::ReturnOutcome;
use rust_decimal::Decimal;
use thiserror::Error;

/// Rejection of a single command
///
/// Every variant leaves the machine untouched, except the purchase gates
/// that refund the pending buffer (`InsufficientCups`, `InsufficientChange`,
/// `CurrencyFull`, `OutOfStock`). Those carry the outcome of the refund so it is printed
/// right after the failure message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VendingError {
    /// Unknown command, or a command not available in the current mode
    #[error("Invalid command. Type HELP for a list of valid commands")]
    InvalidCommand {
        /// The (uppercased) command token
        token: String,
    },

    /// More than four tokens were entered
    #[error("Too many parameters!")]
    TooManyParameters,

    /// An option was given to a command that takes none, or an option
    /// the command does not understand
    #[error("The {option} option is not valid for the {command} command")]
    InvalidOption {
        command: &'static str,
        option: String,
    },

    /// A switch parameter was given to a command that takes none
    #[error("A switch parameter is not valid for the {command} command")]
    UnexpectedSwitch { command: &'static str },

    /// A required option or switch parameter is missing
    #[error("The {command} command has too few parameters")]
    TooFewParameters { command: &'static str },

    /// A trailing switch parameter was given to a command that forbids it
    #[error("The {command} command has too many parameters")]
    ExcessParameters { command: &'static str },

    /// A token is not accepted by the command (e.g. `COIN 3`, `COLA COKE -ICE`)
    #[error("{token} is not a valid parameter for the {command} command")]
    InvalidParameter {
        command: &'static str,
        token: String,
    },

    /// Purchase gate 1: the requested product is not in the catalog
    #[error("{token} is not a valid cola type")]
    UnknownColaType { token: String },

    /// ADD COLA named a product that is not in the catalog
    #[error("{token} is not a valid cola")]
    InvalidCola { token: String },

    /// ADD/REMOVE COINS|BILLS named an unknown denomination
    #[error("{token} is not a valid denomination")]
    InvalidDenomination { token: String },

    /// Quantity token is not a non-negative integer
    #[error("{token} is not a valid quantity")]
    InvalidQuantity { token: String },

    /// Adding the quantity would overflow the stored count
    #[error("Adding {quantity} would overflow the {item} count")]
    CountOverflow { item: String, quantity: u32 },

    /// Purchase gate 2: not enough money deposited; nothing is refunded
    #[error(
        "Insufficient funds! Enter more money\n{label:<29}${deposited}",
        label = "  Amount Deposited"
    )]
    InsufficientFunds {
        /// Value of the pending buffer in dollars
        deposited: Decimal,
    },

    /// Purchase gate 3: no cups left; the deposit was refunded
    #[error("Insufficient cups avaiable! Returning your money...\n{refund}")]
    InsufficientCups { refund: ReturnOutcome },

    /// Purchase gate 4: exact change cannot be made; the deposit was refunded
    #[error("Insufficient change avaiable! Returning your money...\n{refund}")]
    InsufficientChange { refund: ReturnOutcome },

    /// Merging the deposit would overflow a currency count; the deposit was
    /// refunded
    #[error("Currency storage is full! Returning your money...\n{refund}")]
    CurrencyFull { refund: ReturnOutcome },

    /// Purchase gate 5: the product is sold out; the deposit was refunded
    #[error("{product} cola is not avaiable! Returning your money...\n{refund}")]
    OutOfStock { product: Cola, refund: ReturnOutcome },

    /// LOCK/UNLOCK password mismatch
    #[error("Invalid password, try again")]
    InvalidPassword,
}

// Helper functions for creating common errors

impl VendingError {
    /// Create an InvalidCommand error
    pub fn invalid_command(token: &str) -> Self {
        VendingError::InvalidCommand {
            token: token.to_string(),
        }
    }

    /// Create an InvalidOption error
    pub fn invalid_option(command: &'static str, option: &str) -> Self {
        VendingError::InvalidOption {
            command,
            option: option.to_string(),
        }
    }

    /// Create an UnexpectedSwitch error
    pub fn unexpected_switch(command: &'static str) -> Self {
        VendingError::UnexpectedSwitch { command }
    }

    /// Create a TooFewParameters error
    pub fn too_few_parameters(command: &'static str) -> Self {
        VendingError::TooFewParameters { command }
    }

    /// Create an ExcessParameters error
    pub fn excess_parameters(command: &'static str) -> Self {
        VendingError::ExcessParameters { command }
    }

    /// Create an InvalidParameter error
    pub fn invalid_parameter(command: &'static str, token: &str) -> Self {
        VendingError::InvalidParameter {
            command,
            token: token.to_string(),
        }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(token: &str) -> Self {
        VendingError::InvalidQuantity {
            token: token.to_string(),
        }
    }

    /// Create an InvalidDenomination error
    pub fn invalid_denomination(token: &str) -> Self {
        VendingError::InvalidDenomination {
            token: token.to_string(),
        }
    }

    /// Create a CountOverflow error
    pub fn count_overflow(item: &str, quantity: u32) -> Self {
        VendingError::CountOverflow {
            item: item.to_string(),
            quantity,
        }
    }

    /// Create an InsufficientFunds error from the pending buffer value
    pub fn insufficient_funds(deposited: Cents) -> Self {
        VendingError::InsufficientFunds {
            deposited: super::denomination::to_dollars(deposited),
        }
    }

    /// Whether the pending buffer was refunded as part of this failure
    pub fn refunded(&self) -> bool {
        matches!(
            self,
            VendingError::InsufficientCups { .. }
                | VendingError::InsufficientChange { .. }
                | VendingError::CurrencyFull { .. }
                | VendingError::OutOfStock { .. }
        )
    }
}

/// Fatal error that ends a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Script file could not be opened
    #[error("Failed to open script '{path}': {message}")]
    ScriptNotFound { path: String, message: String },

    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    Io { message: String },

    /// The interactive line editor failed
    #[error("Line editor error: {message}")]
    Readline { message: String },
}

// Conversion from io::Error to SessionError
impl From<std::io::Error> for SessionError {
    fn from(error: std::io::Error) -> Self {
        SessionError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from rustyline errors to SessionError
impl From<rustyline::error::ReadlineError> for SessionError {
    fn from(error: rustyline::error::ReadlineError) -> Self {
        SessionError::Readline {
            message: error.to_string(),
        }
    }
}
