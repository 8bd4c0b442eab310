//! Vending Machine Library
//! # Overview
//!
//! This library simulates a cola vending machine driven by a small command
//! language, the way an operating system shell interprets its command line.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (denominations, colas, replies, errors)
//! - [`command`] - Tokenizing a line and dispatching it to a typed command
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Committed currency and the pending deposit buffer
//!   - [`core::inventory`] - Cola stock and cups
//!   - [`core::engine`] - Purchase gates and change making
//!   - [`core::session`] - Mode and password handling
//!   - [`core::machine`] - The aggregate executing each line
//! - [`config`] - Machine configuration with validated fallbacks
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - Line sources and the interpreter loop
//!
//! # Modes
//!
//! - **Service**: stock, cups and currency can be added or removed; the machine starts here
//! - **Normal**: customer commands only (deposit, buy, return, status)
//!
//! `LOCK <password>` switches to normal mode, `UNLOCK <password>` back to service mode.
//!
//! # Purchases
//!
//! Coins (5, 10, 25) and bills ($1, $5) are inserted one at a time into a
//! pending buffer. `COLA <name> [-NO_ICE]` buys one cola when the buffer
//! covers the price, a cup and the cola are available, and exact change can
//! be made from the machine's own currency. Otherwise the purchase fails and,
//! past the funds check, the buffer is refunded.

// Module declarations
pub mod cli;
pub mod command;
pub mod config;
pub mod core;
pub mod io;
pub mod types;

pub use config::MachineConfig;
pub use core::{CashLedger, Inventory, TransactionEngine, VendingMachine};
pub use types::{
    Cents, Cola, Count, CurrencyKind, Denomination, Ice, Mode, Reply, SessionError, VendingError,
};
