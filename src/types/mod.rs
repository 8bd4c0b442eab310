//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `denomination`: Coins, bills and cent amounts
//! - `product`: The cola catalog and the ice switch
//! - `mode`: Service and normal operating modes
//! - `report`: STATUS and HELP output
//! - `reply`: Success replies of command handlers
//! - `error`: Error types for the vending machine

pub mod denomination;
pub mod error;
pub mod mode;
pub mod product;
pub mod reply;
pub mod report;

pub use denomination::{to_dollars, Cents, Count, CurrencyKind, Denomination};
pub use error::{SessionError, VendingError};
pub use mode::Mode;
pub use product::{Cola, Ice};
pub use reply::{Reply, ReturnOutcome};
pub use report::{HelpReport, StatusReport};
