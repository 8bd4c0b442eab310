//! Session and mode state
//!
//! Tracks whether the interpreter loop should keep running and which mode
//! the machine is in. Switching modes requires the configured password.

use crate::types::{Mode, Reply, VendingError};
use tracing::{info, warn};

/// Mode, password and running flag of the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    running: bool,
    mode: Mode,
    password: String,
}

impl SessionState {
    pub fn new(mode: Mode, password: impl Into<String>) -> Self {
        SessionState {
            running: true,
            mode,
            password: password.into(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clear the running flag; the interpreter loop ends after this line
    pub fn stop(&mut self) {
        info!("Session ending");
        self.running = false;
    }

    /// Leave service mode
    ///
    /// The password is compared verbatim, case included. There is no limit
    /// on attempts.
    pub fn lock(&mut self, password: &str) -> Result<Reply, VendingError> {
        self.switch_mode(password, Mode::Normal)?;
        Ok(Reply::Locked)
    }

    /// Enter service mode
    pub fn unlock(&mut self, password: &str) -> Result<Reply, VendingError> {
        self.switch_mode(password, Mode::Service)?;
        Ok(Reply::Unlocked)
    }

    fn switch_mode(&mut self, password: &str, target: Mode) -> Result<(), VendingError> {
        if password != self.password {
            warn!(target_mode = ?target, "Rejected password");
            return Err(VendingError::InvalidPassword);
        }

        info!(from = ?self.mode, to = ?target, "Mode changed");
        self.mode = target;
        Ok(())
    }
}
