//! Line tokenizer
//!
//! Splits a raw input line into the four positional fields of a command:
//! `COMMAND [OPTION [SWITCH1 [SWITCH2]]]`. A fifth token marks the line as
//! overflowing; the dispatcher turns that into an error once it has
//! recognized the command.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Count, VendingError};

/// Commands whose option is a password and therefore keeps its case
const CASE_SENSITIVE_OPTION: [&str; 2] = ["LOCK", "UNLOCK"];

/// Tokens of one input line
///
/// Missing fields are empty strings rather than errors, so each command can
/// decide for itself which fields are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLine {
    /// Uppercased command token
    pub command: String,
    /// Option token, uppercased unless the command is LOCK or UNLOCK
    pub option: String,
    /// First switch parameter, uppercased
    pub switch1: String,
    /// Second switch parameter, uppercased
    pub switch2: String,
    /// A fifth token was present
    pub overflow: bool,
}

/// Tokenize a raw input line
///
/// # Arguments
///
/// * `line` - The line as typed by the user, without the trailing newline
///
/// # Returns
///
/// A `ParsedLine` with every field populated (possibly empty)
///
/// # Examples
///
/// ```
/// use vending_machine::command::parse_line;
///
/// let parsed = parse_line("cola coke -no_ice");
/// assert_eq!(parsed.command, "COLA");
/// assert_eq!(parsed.option, "COKE");
/// assert_eq!(parsed.switch1, "-NO_ICE");
/// assert!(!parsed.overflow);
/// ```
pub fn parse_line(line: &str) -> ParsedLine {
    let mut tokens = line.split_whitespace();
    let mut next_token = || tokens.next().unwrap_or_default().to_string();

    let command = next_token().to_ascii_uppercase();
    let option = next_token();
    let switch1 = next_token().to_ascii_uppercase();
    let switch2 = next_token().to_ascii_uppercase();
    let overflow = !next_token().is_empty();

    let option = if CASE_SENSITIVE_OPTION.contains(&command.as_str()) {
        option
    } else {
        option.to_ascii_uppercase()
    };

    ParsedLine {
        command,
        option,
        switch1,
        switch2,
        overflow,
    }
}

/// Parse a quantity token for the service commands
///
/// Only plain digit strings are accepted: no sign, no spaces, no decimals.
///
/// # Errors
///
/// Returns `InvalidQuantity` if the token is empty, contains a non-digit,
/// or does not fit in a count.
pub fn parse_quantity(token: &str) -> Result<Count, VendingError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VendingError::invalid_quantity(token));
    }

    token
        .parse::<Count>()
        .map_err(|_| VendingError::invalid_quantity(token))
}
