//! Machine configuration
//!
//! Values the machine is built with: the cola price, the service password
//! and the mode it starts in.

use crate::core::engine::DEFAULT_PRICE;
use crate::types::{Cents, Denomination, Mode};
use tracing::warn;

/// Password used when none is configured
pub const DEFAULT_PASSWORD: &str = "password";

/// Configuration for a [`VendingMachine`](crate::core::VendingMachine)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineConfig {
    /// Price of one cola in cents
    pub price: Cents,
    /// Password for LOCK and UNLOCK
    pub password: String,
    /// Mode the machine starts in
    pub initial_mode: Mode,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            price: DEFAULT_PRICE,
            password: DEFAULT_PASSWORD.to_string(),
            initial_mode: Mode::Service,
        }
    }
}

impl MachineConfig {
    /// Create a new MachineConfig with custom values
    ///
    /// A price that is zero or not a multiple of the smallest coin could
    /// never be paid exactly, so it is replaced by the default with a
    /// warning. An empty password is replaced the same way.
    pub fn new(price: Cents, password: impl Into<String>, initial_mode: Mode) -> Self {
        let default = Self::default();
        let smallest = Denomination::Nickel.cents();

        let price = if price == 0 || price % smallest != 0 {
            warn!(
                price,
                default = default.price,
                "Invalid price, using default"
            );
            default.price
        } else {
            price
        };

        let password = password.into();
        let password = if password.is_empty() {
            warn!("Empty password, using default");
            default.password
        } else {
            password
        };

        Self {
            price,
            password,
            initial_mode,
        }
    }
}
