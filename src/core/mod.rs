//! Core business logic module
//!
//! This module contains the vending machine components:
//! - `ledger` - Committed currency and the pending deposit buffer
//! - `inventory` - Cola stock and cups
//! - `engine` - Purchase gates, change planning and settlement
//! - `session` - Mode, password and running flag
//! - `machine` - The aggregate that owns all of the above

pub mod engine;
pub mod inventory;
pub mod ledger;
pub mod machine;
pub mod session;

pub use engine::{TransactionEngine, DEFAULT_PRICE};
pub use inventory::Inventory;
pub use ledger::{CashLedger, ChangePlan};
pub use machine::VendingMachine;
pub use session::SessionState;
