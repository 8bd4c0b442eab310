//! Product catalog types
//!
//! The machine sells a fixed set of five colas at a single price, and each
//! drink may be served with or without ice.

use std::fmt;

/// Cola brands stocked by the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cola {
    Coke,
    Pepsi,
    Sprite,
    Fanta,
    Faygo,
}

impl Cola {
    /// Catalog order, which is also the order used by STATUS
    pub const ALL: [Cola; 5] = [Cola::Coke, Cola::Pepsi, Cola::Sprite, Cola::Fanta, Cola::Faygo];

    /// Resolve an uppercased product token
    pub fn from_token(token: &str) -> Option<Cola> {
        Cola::ALL.into_iter().find(|cola| cola.name() == token)
    }

    /// Catalog name as typed on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Cola::Coke => "COKE",
            Cola::Pepsi => "PEPSI",
            Cola::Sprite => "SPRITE",
            Cola::Fanta => "FANTA",
            Cola::Faygo => "FAYGO",
        }
    }

    /// Capitalized name used in the status table
    pub const fn label(self) -> &'static str {
        match self {
            Cola::Coke => "Coke",
            Cola::Pepsi => "Pepsi",
            Cola::Sprite => "Sprite",
            Cola::Fanta => "Fanta",
            Cola::Faygo => "Faygo",
        }
    }
}

impl fmt::Display for Cola {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ice preference selected by the optional COLA switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ice {
    With,
    Without,
}

impl Ice {
    /// The only switch the COLA command understands
    pub const NO_ICE_SWITCH: &'static str = "-NO_ICE";

    /// Map the first switch parameter to an ice preference
    ///
    /// An empty switch means ice, `-NO_ICE` means no ice; anything else is
    /// rejected by returning `None`.
    pub fn from_switch(switch: &str) -> Option<Ice> {
        match switch {
            "" => Some(Ice::With),
            Ice::NO_ICE_SWITCH => Some(Ice::Without),
            _ => None,
        }
    }
}
