//! The vending machine aggregate
//!
//! `VendingMachine` owns every piece of state (cash ledger, inventory,
//! session) plus the purchase engine, and routes each input line through
//! parse, dispatch and the matching handler.

use crate::command::{parse_line, parse_quantity, Adjustment, Command};
use crate::config::MachineConfig;
use crate::core::engine::TransactionEngine;
use crate::core::inventory::Inventory;
use crate::core::ledger::CashLedger;
use crate::core::session::SessionState;
use crate::types::{
    Cents, Cola, Count, CurrencyKind, HelpReport, Mode, Reply, StatusReport, VendingError,
};
use tracing::{debug, info};

/// A vending machine with its complete state
#[derive(Debug, Clone)]
pub struct VendingMachine {
    engine: TransactionEngine,
    ledger: CashLedger,
    inventory: Inventory,
    session: SessionState,
}

impl VendingMachine {
    /// Create an empty machine: no currency, no colas, no cups
    pub fn new(config: MachineConfig) -> Self {
        VendingMachine {
            engine: TransactionEngine::new(config.price),
            ledger: CashLedger::new(),
            inventory: Inventory::new(),
            session: SessionState::new(config.initial_mode, config.password),
        }
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Whether the interpreter loop should keep reading lines
    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn ledger(&self) -> &CashLedger {
        &self.ledger
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn price(&self) -> Cents {
        self.engine.price()
    }

    /// Snapshot for the STATUS command
    pub fn status(&self) -> StatusReport {
        StatusReport {
            deposited: self.ledger.pending_total(),
            currency: self.ledger.committed_counts().clone(),
            stock: self.inventory.stock_levels().clone(),
            cups: self.inventory.cups(),
        }
    }

    /// Interpret one input line
    ///
    /// # Arguments
    ///
    /// * `line` - The raw line, without its newline
    ///
    /// # Returns
    ///
    /// * `Ok(Reply)` - The command succeeded; print the reply
    /// * `Err(VendingError)` - The command was rejected; print the error
    pub fn execute(&mut self, line: &str) -> Result<Reply, VendingError> {
        let parsed = parse_line(line);
        let command = Command::from_parsed(&parsed, self.mode())?;
        debug!(?command, mode = ?self.mode(), "Executing");
        self.apply(command)
    }

    /// Run a dispatched command against the machine state
    pub fn apply(&mut self, command: Command) -> Result<Reply, VendingError> {
        match command {
            Command::Exit => {
                self.session.stop();
                Ok(Reply::Exiting)
            }
            Command::Help => Ok(Reply::Help(HelpReport { mode: self.mode() })),
            Command::Return => Ok(Reply::Returned(self.ledger.return_pending())),
            Command::Status => Ok(Reply::Status(self.status())),
            Command::Lock { password } => self.session.lock(&password),
            Command::Unlock { password } => self.session.unlock(&password),
            Command::Deposit { kind, token } => {
                self.ledger.deposit(kind, &token)?;
                Ok(Reply::Deposited { kind, token })
            }
            Command::Purchase { product, ice } => {
                self.engine
                    .purchase(&mut self.ledger, &mut self.inventory, &product, ice)
            }
            Command::AddCups { quantity } => {
                let quantity = parse_quantity(&quantity)?;
                self.inventory.add_cups(quantity)?;
                info!(quantity, "Cups added");
                Ok(Reply::CupsAdded { quantity })
            }
            Command::AddStock { product, quantity } => {
                let cola = Cola::from_token(&product)
                    .ok_or(VendingError::InvalidCola { token: product })?;
                let quantity = parse_quantity(&quantity)?;
                self.inventory.add_stock(cola, quantity)?;
                info!(product = cola.name(), quantity, "Stock added");
                Ok(Reply::StockAdded {
                    product: cola,
                    quantity,
                })
            }
            Command::AdjustCurrency {
                adjustment,
                kind,
                denomination,
                quantity,
            } => self.adjust_currency(adjustment, kind, denomination, &quantity),
        }
    }

    /// ADD/REMOVE COINS|BILLS
    ///
    /// The denomination is checked before the quantity. Removal is clamped
    /// to what the machine holds.
    fn adjust_currency(
        &mut self,
        adjustment: Adjustment,
        kind: CurrencyKind,
        token: String,
        quantity: &str,
    ) -> Result<Reply, VendingError> {
        let denomination = kind
            .parse_denomination(&token)
            .ok_or_else(|| VendingError::invalid_denomination(&token))?;
        let quantity: Count = parse_quantity(quantity)?;

        match adjustment {
            Adjustment::Add => {
                self.ledger.add_committed(denomination, quantity)?;
                info!(?denomination, quantity, "Currency added");
                Ok(Reply::CurrencyAdded {
                    kind,
                    token,
                    quantity,
                })
            }
            Adjustment::Remove => {
                let (removed, remaining) = self.ledger.remove_committed(denomination, quantity);
                info!(?denomination, removed, remaining, "Currency removed");
                Ok(Reply::CurrencyRemoved {
                    kind,
                    token,
                    removed,
                    remaining,
                })
            }
        }
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}
