//! Operating mode of the machine

/// Operating mode
///
/// Service mode unlocks the inventory and cash adjustment commands.
/// Switching between modes requires the machine password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Unlocked, privileged mode. The machine starts here.
    #[default]
    Service,
    /// Customer-facing mode
    Normal,
}

impl Mode {
    /// Prompt printed before each command is read
    pub const fn prompt(self) -> &'static str {
        match self {
            Mode::Service => "[SERVICE MODE] >",
            Mode::Normal => "[NORMAL MODE] >",
        }
    }
}
