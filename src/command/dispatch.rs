//! Command dispatch
//!
//! Turns a [`ParsedLine`] into a typed [`Command`]. This is where the mode
//! restrictions and the per-command arity contracts are enforced, so a
//! `Command` that reaches a handler always has the fields it needs.
//!
//! Validation order matches what the user sees:
//! 1. The command must exist and be available in the current mode
//! 2. The line must not have more than four tokens
//! 3. The option/switch arity must fit the command

use super::parser::ParsedLine;
use crate::types::{CurrencyKind, Ice, Mode, VendingError};

/// Every command the machine recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Unlock,
    Help,
    Coin,
    Bill,
    Cola,
    Return,
    Status,
    Exit,
    Add,
    Remove,
    Lock,
}

impl CommandKind {
    pub const ALL: [CommandKind; 11] = [
        CommandKind::Unlock,
        CommandKind::Help,
        CommandKind::Coin,
        CommandKind::Bill,
        CommandKind::Cola,
        CommandKind::Return,
        CommandKind::Status,
        CommandKind::Exit,
        CommandKind::Add,
        CommandKind::Remove,
        CommandKind::Lock,
    ];

    /// Resolve an uppercased command token
    pub fn from_token(token: &str) -> Option<CommandKind> {
        CommandKind::ALL.into_iter().find(|kind| kind.name() == token)
    }

    /// Command keyword, as used in messages
    pub const fn name(self) -> &'static str {
        match self {
            CommandKind::Unlock => "UNLOCK",
            CommandKind::Help => "HELP",
            CommandKind::Coin => "COIN",
            CommandKind::Bill => "BILL",
            CommandKind::Cola => "COLA",
            CommandKind::Return => "RETURN",
            CommandKind::Status => "STATUS",
            CommandKind::Exit => "EXIT",
            CommandKind::Add => "ADD",
            CommandKind::Remove => "REMOVE",
            CommandKind::Lock => "LOCK",
        }
    }

    /// Whether the command can be used in the given mode
    ///
    /// Normal mode only offers the customer commands plus UNLOCK.
    /// Service mode offers everything except UNLOCK.
    pub const fn allowed_in(self, mode: Mode) -> bool {
        match mode {
            Mode::Normal => matches!(
                self,
                CommandKind::Unlock
                    | CommandKind::Help
                    | CommandKind::Coin
                    | CommandKind::Bill
                    | CommandKind::Cola
                    | CommandKind::Return
                    | CommandKind::Status
                    | CommandKind::Exit
            ),
            Mode::Service => !matches!(self, CommandKind::Unlock),
        }
    }
}

/// Direction of a service-mode currency adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Add,
    Remove,
}

/// A fully dispatched command
///
/// Denomination, product and quantity tokens are carried as entered; the
/// handlers validate them because their error messages echo the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Return,
    Status,
    Lock {
        password: String,
    },
    Unlock {
        password: String,
    },
    /// COIN or BILL: insert one unit into the pending buffer
    Deposit {
        kind: CurrencyKind,
        token: String,
    },
    /// COLA: run the transaction engine
    Purchase {
        product: String,
        ice: Ice,
    },
    /// ADD CUPS
    AddCups {
        quantity: String,
    },
    /// ADD COLA
    AddStock {
        product: String,
        quantity: String,
    },
    /// ADD/REMOVE COINS|BILLS
    AdjustCurrency {
        adjustment: Adjustment,
        kind: CurrencyKind,
        denomination: String,
        quantity: String,
    },
}

impl Command {
    /// Dispatch a parsed line in the given mode
    ///
    /// # Arguments
    ///
    /// * `parsed` - Tokens of the input line
    /// * `mode` - Current operating mode of the machine
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` if the command is recognized and its arity is valid
    /// * `Err(VendingError)` describing the first violated rule
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command is unknown or unavailable in `mode`
    /// - The line has more than four tokens
    /// - A required option or switch is missing, or a forbidden one is present
    /// - The COLA switch is neither empty nor `-NO_ICE`
    pub fn from_parsed(parsed: &ParsedLine, mode: Mode) -> Result<Command, VendingError> {
        let kind = CommandKind::from_token(&parsed.command)
            .filter(|kind| kind.allowed_in(mode))
            .ok_or_else(|| VendingError::invalid_command(&parsed.command))?;

        if parsed.overflow {
            return Err(VendingError::TooManyParameters);
        }

        let name = kind.name();
        let option = parsed.option.as_str();

        match kind {
            CommandKind::Exit | CommandKind::Help | CommandKind::Return | CommandKind::Status => {
                if !option.is_empty() {
                    return Err(VendingError::invalid_option(name, option));
                }
                Ok(match kind {
                    CommandKind::Exit => Command::Exit,
                    CommandKind::Help => Command::Help,
                    CommandKind::Return => Command::Return,
                    _ => Command::Status,
                })
            }

            CommandKind::Lock | CommandKind::Unlock | CommandKind::Coin | CommandKind::Bill => {
                if option.is_empty() {
                    return Err(VendingError::too_few_parameters(name));
                }
                if !parsed.switch1.is_empty() {
                    return Err(VendingError::unexpected_switch(name));
                }
                Ok(match kind {
                    CommandKind::Lock => Command::Lock {
                        password: option.to_string(),
                    },
                    CommandKind::Unlock => Command::Unlock {
                        password: option.to_string(),
                    },
                    CommandKind::Coin => Command::Deposit {
                        kind: CurrencyKind::Coin,
                        token: option.to_string(),
                    },
                    _ => Command::Deposit {
                        kind: CurrencyKind::Bill,
                        token: option.to_string(),
                    },
                })
            }

            CommandKind::Cola => {
                if option.is_empty() {
                    return Err(VendingError::too_few_parameters(name));
                }
                if !parsed.switch2.is_empty() {
                    return Err(VendingError::excess_parameters(name));
                }
                let ice = Ice::from_switch(&parsed.switch1)
                    .ok_or_else(|| VendingError::invalid_parameter(name, &parsed.switch1))?;
                Ok(Command::Purchase {
                    product: option.to_string(),
                    ice,
                })
            }

            CommandKind::Add | CommandKind::Remove => {
                if option.is_empty() {
                    return Err(VendingError::too_few_parameters(name));
                }
                let adjustment = if kind == CommandKind::Add {
                    Adjustment::Add
                } else {
                    Adjustment::Remove
                };
                Self::dispatch_adjustment(parsed, name, adjustment)
            }
        }
    }

    /// Dispatch the ADD/REMOVE family by option
    ///
    /// REMOVE only supports COINS and BILLS; REMOVE CUPS and REMOVE COLA
    /// are reported as invalid options.
    fn dispatch_adjustment(
        parsed: &ParsedLine,
        name: &'static str,
        adjustment: Adjustment,
    ) -> Result<Command, VendingError> {
        let switch1 = parsed.switch1.as_str();
        let switch2 = parsed.switch2.as_str();

        match (adjustment, parsed.option.as_str()) {
            (Adjustment::Add, "CUPS") => {
                if switch1.is_empty() {
                    return Err(VendingError::too_few_parameters(name));
                }
                if !switch2.is_empty() {
                    return Err(VendingError::excess_parameters(name));
                }
                Ok(Command::AddCups {
                    quantity: switch1.to_string(),
                })
            }
            (Adjustment::Add, "COLA") => {
                if switch2.is_empty() {
                    return Err(VendingError::too_few_parameters(name));
                }
                Ok(Command::AddStock {
                    product: switch1.to_string(),
                    quantity: switch2.to_string(),
                })
            }
            (_, option @ ("COINS" | "BILLS")) => {
                if switch2.is_empty() {
                    return Err(VendingError::too_few_parameters(name));
                }
                let kind = if option == "COINS" {
                    CurrencyKind::Coin
                } else {
                    CurrencyKind::Bill
                };
                Ok(Command::AdjustCurrency {
                    adjustment,
                    kind,
                    denomination: switch1.to_string(),
                    quantity: switch2.to_string(),
                })
            }
            (_, option) => Err(VendingError::invalid_option(name, option)),
        }
    }
}
