//! Command interpretation
//!
//! - `parser` - Splits a raw line into command, option and switch tokens
//! - `dispatch` - Validates mode and arity and produces a typed [`Command`]

pub mod dispatch;
pub mod parser;

pub use dispatch::{Adjustment, Command, CommandKind};
pub use parser::{parse_line, parse_quantity, ParsedLine};
