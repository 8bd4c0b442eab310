//! Interpreter loop
//!
//! Prints the banner, then for each iteration: a blank line, the mode
//! prompt, the input line, another blank line and finally the reply or the
//! error message. The loop ends when EXIT clears the running flag or when
//! the line source is exhausted.

use crate::core::VendingMachine;
use crate::io::line_source::LineSource;
use crate::types::SessionError;
use std::io::Write;
use tracing::{debug, info};

/// Greeting printed once at the start of a session
pub const BANNER: &str =
    "Please Enter a command and its parameter(s)\n\n\t(type HELP for list of commands, EXIT to quit)";

/// Drive a machine from a line source until EXIT or end of input
///
/// # Arguments
///
/// * `machine` - The machine to run commands against
/// * `source` - Where command lines come from
/// * `output` - Where the transcript is written
///
/// # Returns
///
/// * `Ok(())` - The session ended normally
/// * `Err(SessionError)` - Reading input or writing output failed
///
/// # Examples
///
/// ```
/// use vending_machine::core::VendingMachine;
/// use vending_machine::io::{run_session, ScriptSource};
///
/// let mut machine = VendingMachine::default();
/// let mut source = ScriptSource::new("add cups 3\nexit\n".as_bytes());
/// let mut output = Vec::new();
///
/// run_session(&mut machine, &mut source, &mut output).unwrap();
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("[SERVICE MODE] >add cups 3\n\nAdded 3 CUPS!\n"));
/// assert_eq!(machine.inventory().cups(), 3);
/// ```
pub fn run_session(
    machine: &mut VendingMachine,
    source: &mut dyn LineSource,
    output: &mut dyn Write,
) -> Result<(), SessionError> {
    writeln!(output, "{BANNER}")?;

    let mut lines = 0usize;
    while machine.is_running() {
        writeln!(output)?;
        output.flush()?;

        let prompt = machine.mode().prompt();
        let Some(line) = source.read_line(prompt)? else {
            break;
        };
        lines += 1;

        if source.echoes_input() {
            writeln!(output, "{prompt}{line}")?;
        }
        writeln!(output)?;

        match machine.execute(&line) {
            Ok(reply) => {
                if !reply.is_silent() {
                    writeln!(output, "{reply}")?;
                }
            }
            Err(err) => {
                debug!(%line, error = ?err, "Command rejected");
                writeln!(output, "{err}")?;
            }
        }
    }

    output.flush()?;
    info!(lines, "Session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ScriptSource;

    fn transcript(script: &str) -> (VendingMachine, String) {
        let mut machine = VendingMachine::default();
        let mut source = ScriptSource::new(script.as_bytes());
        let mut output = Vec::new();

        run_session(&mut machine, &mut source, &mut output).unwrap();

        (machine, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_ends_session_silently() {
        let (machine, output) = transcript("exit\nstatus\n");

        assert_eq!(output, format!("{BANNER}\n\n[SERVICE MODE] >exit\n\n"));
        assert!(!machine.is_running());
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (machine, output) = transcript("");

        assert_eq!(output, format!("{BANNER}\n\n"));
        assert!(machine.is_running());
    }

    #[test]
    fn test_prompt_follows_mode() {
        let (_, output) = transcript("lock password\nadd cups 1\nexit\n");

        let expected = format!(
            "{BANNER}\n\
             \n[SERVICE MODE] >lock password\n\nLocked\n\
             \n[NORMAL MODE] >add cups 1\n\nInvalid command. Type HELP for a list of valid commands\n\
             \n[NORMAL MODE] >exit\n\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_not_fatal() {
        let mut machine = VendingMachine::default();
        let mut source = ScriptSource::new(&b"coin \xff\nstatus\nexit\n"[..]);
        let mut output = Vec::new();

        run_session(&mut machine, &mut source, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains(
            "[SERVICE MODE] >coin \u{FFFD}\n\n\u{FFFD} is not a valid parameter for the COIN command\n"
        ));
        assert!(output.contains("[SERVICE MODE] >status\n\n   Amount Deposited"));
        assert!(!machine.is_running());
        assert_eq!(machine.ledger().pending_total(), 0);
    }

    #[test]
    fn test_blank_line_is_an_invalid_command() {
        let (_, output) = transcript("\nexit\n");

        assert!(output.contains(
            "[SERVICE MODE] >\n\nInvalid command. Type HELP for a list of valid commands\n"
        ));
    }
}
