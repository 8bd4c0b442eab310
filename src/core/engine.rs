//! Transaction processing engine
//!
//! This module provides the TransactionEngine that runs a purchase against
//! the CashLedger and the Inventory.
//!
//! A purchase passes five gates in a fixed order:
//! 1. The product must be in the catalog
//! 2. The pending buffer must cover the price
//! 3. A cup must be available
//! 4. Exact change must be plannable from committed currency, and the
//!    deposit must fit in the committed counts once the change is paid
//! 5. The product must be in stock
//!
//! Gates 1 and 2 leave everything untouched. Gates 3 to 5 refund the pending
//! buffer before reporting the failure.

use crate::core::inventory::Inventory;
use crate::core::ledger::CashLedger;
use crate::types::{to_dollars, Cents, Cola, Ice, Reply, VendingError};
use tracing::{debug, info, warn};

/// Default price of one cola in cents
pub const DEFAULT_PRICE: Cents = 145;

/// Purchase engine
///
/// Holds the price and enforces the purchase gates. State lives in the
/// ledger and inventory passed to [`TransactionEngine::purchase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionEngine {
    price: Cents,
}

impl TransactionEngine {
    /// Create an engine selling every cola at `price` cents
    pub fn new(price: Cents) -> Self {
        TransactionEngine { price }
    }

    /// Price of one cola in cents
    pub fn price(&self) -> Cents {
        self.price
    }

    /// Buy one cola with the money in the pending buffer
    ///
    /// # Arguments
    ///
    /// * `ledger` - Cash ledger holding the pending buffer and the change stock
    /// * `inventory` - Colas and cups
    /// * `product` - Product token as entered (uppercased)
    /// * `ice` - Whether to serve with ice
    ///
    /// # Returns
    ///
    /// * `Ok(Reply::Dispensed)` after the cola is served, change is paid and
    ///   the buffer is merged into committed currency
    /// * `Err(VendingError)` for the first gate that fails
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The product is unknown (`UnknownColaType`)
    /// - The buffer is below the price (`InsufficientFunds`)
    /// - There are no cups (`InsufficientCups`, refunded)
    /// - Exact change cannot be made (`InsufficientChange`, refunded)
    /// - The deposit would overflow a currency count (`CurrencyFull`, refunded)
    /// - The product is sold out (`OutOfStock`, refunded)
    pub fn purchase(
        &self,
        ledger: &mut CashLedger,
        inventory: &mut Inventory,
        product: &str,
        ice: Ice,
    ) -> Result<Reply, VendingError> {
        let cola = Cola::from_token(product).ok_or_else(|| VendingError::UnknownColaType {
            token: product.to_string(),
        })?;

        let deposited = ledger.pending_total();
        if deposited < self.price {
            return Err(VendingError::insufficient_funds(deposited));
        }

        if inventory.cups() == 0 {
            return Err(VendingError::InsufficientCups {
                refund: ledger.return_pending(),
            });
        }

        let Some(plan) = ledger.plan_change(deposited - self.price) else {
            debug!(
                change = deposited - self.price,
                "No exact change available, refunding"
            );
            return Err(VendingError::InsufficientChange {
                refund: ledger.return_pending(),
            });
        };

        if !ledger.can_settle(&plan) {
            warn!("Currency count would overflow, refunding");
            return Err(VendingError::CurrencyFull {
                refund: ledger.return_pending(),
            });
        }

        if inventory.stock(cola) == 0 {
            return Err(VendingError::OutOfStock {
                product: cola,
                refund: ledger.return_pending(),
            });
        }

        let served = inventory.serve(cola);
        debug_assert!(served, "gates 3 and 5 guarantee a cup and a cola");

        debug!(plan = ?plan, "Paying out change");
        ledger.settle(&plan);

        info!(
            product = cola.name(),
            ?ice,
            paid = %to_dollars(deposited),
            change = %to_dollars(plan.total()),
            "Dispensed"
        );

        Ok(Reply::Dispensed {
            product: cola,
            ice,
            change: plan.total(),
        })
    }
}

impl Default for TransactionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE)
    }
}
