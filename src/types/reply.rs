//! Success replies produced by command handlers
//!
//! Every successful command yields a [`Reply`]. Its `Display` output is the
//! message written back to the user.

use super::denomination::{Cents, Count, CurrencyKind};
use super::product::{Cola, Ice};
use super::report::{HelpReport, StatusReport};
use std::fmt;

/// Result of emptying the pending deposit buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// At least one coin or bill was handed back
    Returned,
    /// The buffer was already empty
    NothingToReturn,
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnOutcome::Returned => f.write_str("Returned all money"),
            ReturnOutcome::NothingToReturn => f.write_str("No money to return!"),
        }
    }
}

/// Successful outcome of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// One coin or bill was added to the pending buffer
    Deposited { kind: CurrencyKind, token: String },
    /// RETURN emptied the pending buffer
    Returned(ReturnOutcome),
    Status(StatusReport),
    Help(HelpReport),
    Unlocked,
    Locked,
    /// A cola was served; `change` is the amount paid back in cents
    Dispensed { product: Cola, ice: Ice, change: Cents },
    CupsAdded { quantity: Count },
    StockAdded { product: Cola, quantity: Count },
    CurrencyAdded {
        kind: CurrencyKind,
        token: String,
        quantity: Count,
    },
    /// `removed` is the clamped amount actually taken out
    CurrencyRemoved {
        kind: CurrencyKind,
        token: String,
        removed: Count,
        remaining: Count,
    },
    /// EXIT was accepted; nothing is printed
    Exiting,
}

impl Reply {
    /// Whether this reply prints nothing
    pub fn is_silent(&self) -> bool {
        matches!(self, Reply::Exiting)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Deposited { kind, token } => {
                write!(f, "Added 1 {}-denomination {}!", token, kind.unit_label())
            }
            Reply::Returned(outcome) => write!(f, "{outcome}"),
            Reply::Status(report) => write!(f, "{report}"),
            Reply::Help(help) => write!(f, "{help}"),
            Reply::Unlocked => f.write_str("Unlocked!"),
            Reply::Locked => f.write_str("Locked"),
            Reply::Dispensed { product, ice, .. } => match ice {
                Ice::With => write!(f, "Dispensing {product} with ice"),
                Ice::Without => write!(f, "Dispensing {product} without ice"),
            },
            Reply::CupsAdded { quantity } => write!(f, "Added {quantity} CUPS!"),
            Reply::StockAdded { product, quantity } => write!(f, "Added {quantity} {product}!"),
            Reply::CurrencyAdded {
                kind,
                token,
                quantity,
            } => write!(
                f,
                "Added {} {}-denomination {}!",
                quantity,
                token,
                kind.plural_label()
            ),
            Reply::CurrencyRemoved {
                kind,
                token,
                removed,
                remaining,
            } => write!(
                f,
                "Removed {} {}-denomination {}, leaving {} left!",
                removed,
                token,
                kind.plural_label(),
                remaining
            ),
            Reply::Exiting => Ok(()),
        }
    }
}
