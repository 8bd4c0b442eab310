//! Line sources for the interpreter loop
//!
//! The loop reads commands through the [`LineSource`] trait so the same
//! session logic drives an interactive terminal and a script file.
//!
//! - [`EditorSource`] - Interactive input through `rustyline`, with history
//! - [`ScriptSource`] - Any `BufRead`; the loop echoes each line after the
//!   prompt so a script run produces the same transcript as typing it

use crate::types::SessionError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Source of command lines
pub trait LineSource {
    /// Read the next line, showing `prompt` if the source is interactive
    ///
    /// # Returns
    ///
    /// * `Ok(Some(line))` - The next line without its line terminator
    /// * `Ok(None)` - Input is exhausted; the session should end
    /// * `Err(SessionError)` - Reading failed
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError>;

    /// Whether the caller must write the prompt and the line to the output
    ///
    /// Interactive sources display both themselves.
    fn echoes_input(&self) -> bool;
}

/// Interactive terminal input
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, SessionError> {
        Ok(EditorSource {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                debug!("Interrupted");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                debug!("End of input");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn echoes_input(&self) -> bool {
        false
    }
}

/// Non-interactive input from a reader
///
/// # Examples
///
/// ```
/// use vending_machine::io::{LineSource, ScriptSource};
///
/// let mut source = ScriptSource::new("status\r\nexit\n".as_bytes());
/// assert_eq!(source.read_line("> ").unwrap(), Some("status".to_string()));
/// assert_eq!(source.read_line("> ").unwrap(), Some("exit".to_string()));
/// assert_eq!(source.read_line("> ").unwrap(), None);
/// ```
#[derive(Debug)]
pub struct ScriptSource<R> {
    reader: R,
    line_num: usize,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        ScriptSource {
            reader,
            line_num: 0,
        }
    }
}

impl ScriptSource<BufReader<File>> {
    /// Open a script file
    ///
    /// # Errors
    ///
    /// Returns `ScriptNotFound` if the file cannot be opened
    pub fn open(path: &Path) -> Result<Self, SessionError> {
        let file = File::open(path).map_err(|e| SessionError::ScriptNotFound {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        self.line_num += 1;

        // Undecodable bytes become U+FFFD and are rejected as a bad token
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        debug!(line_num = self.line_num, %line, "Script line");
        Ok(Some(line))
    }

    fn echoes_input(&self) -> bool {
        true
    }
}
