//! Printable reports: the STATUS table and the HELP listing
//!
//! Both are plain data with a `Display` implementation, so the exact output
//! wording lives in one place and can be checked by golden-output tests.

use super::denomination::{to_dollars, Cents, Count, Denomination};
use super::mode::Mode;
use super::product::Cola;
use std::collections::BTreeMap;
use std::fmt;

/// Width of the label column in the STATUS table
const STATUS_LABEL_WIDTH: usize = 28;

/// Snapshot of the machine shown by the STATUS command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Value of the pending deposit buffer
    pub deposited: Cents,
    /// Committed count for each denomination
    pub currency: BTreeMap<Denomination, Count>,
    /// Committed stock for each cola
    pub stock: BTreeMap<Cola, Count>,
    /// Cups available
    pub cups: Count,
}

impl StatusReport {
    fn currency_count(&self, denomination: Denomination) -> Count {
        self.currency.get(&denomination).copied().unwrap_or(0)
    }

    fn stock_count(&self, cola: Cola) -> Count {
        self.stock.get(&cola).copied().unwrap_or(0)
    }
}

/// Label of a denomination row in the STATUS table
fn currency_label(denomination: Denomination) -> &'static str {
    match denomination {
        Denomination::OneDollar => "   Total One Dollar Bills",
        Denomination::FiveDollar => "   Total Five Dollar Bills",
        Denomination::Nickel => "   Total Nickels",
        Denomination::Dime => "   Total Dimes",
        Denomination::Quarter => "   Total Quarters",
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<width$} = ${}",
            "   Amount Deposited",
            to_dollars(self.deposited),
            width = STATUS_LABEL_WIDTH
        )?;

        // Bills are listed before coins
        let rows = [
            Denomination::OneDollar,
            Denomination::FiveDollar,
            Denomination::Nickel,
            Denomination::Dime,
            Denomination::Quarter,
        ];
        for denomination in rows {
            write!(
                f,
                "\n{:<width$} =  {}",
                currency_label(denomination),
                self.currency_count(denomination),
                width = STATUS_LABEL_WIDTH
            )?;
        }

        for cola in Cola::ALL {
            let label = format!("   Total {}", cola.label());
            write!(
                f,
                "\n{:<width$} =  {}",
                label,
                self.stock_count(cola),
                width = STATUS_LABEL_WIDTH
            )?;
        }

        write!(
            f,
            "\n{:<width$} =  {}",
            "   Total Cups",
            self.cups,
            width = STATUS_LABEL_WIDTH
        )
    }
}

/// Commands shared by both help listings
const COMMON_HELP: [&str; 6] = [
    "Coin <value> where value is 5 10 25 nickel dime quarter",
    "Bill <value> where value is 1 5",
    "Cola <value> where value is coke pepsi sprite fanta faygo  [-no_ice]",
    "Return",
    "Status",
    "Exit",
];

const SERVICE_HELP: [&str; 3] = [
    "Add [COLA|CUPS] brand <quantity>",
    "Add|Remove [Coins|Bills] <denomination> <quantity>",
    "Lock [password]",
];

const NORMAL_HELP: [&str; 1] = ["Unlock [password]"];

/// Command listing shown by HELP, filtered by mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpReport {
    pub mode: Mode,
}

impl fmt::Display for HelpReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (header, extra): (&str, &[&str]) = match self.mode {
            Mode::Service => ("Commands in Service Mode are:", &SERVICE_HELP),
            Mode::Normal => ("Commands in Normal Mode are:", &NORMAL_HELP),
        };

        f.write_str(header)?;
        for line in COMMON_HELP.iter().chain(extra) {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_report() -> StatusReport {
        StatusReport {
            deposited: 0,
            currency: Denomination::ALL.into_iter().map(|d| (d, 0)).collect(),
            stock: Cola::ALL.into_iter().map(|c| (c, 0)).collect(),
            cups: 0,
        }
    }

    #[test]
    fn test_status_report_layout() {
        let mut report = empty_report();
        report.deposited = 150;
        report.currency.insert(Denomination::OneDollar, 3);
        report.currency.insert(Denomination::Quarter, 12);
        report.stock.insert(Cola::Sprite, 7);
        report.cups = 10;

        let expected = "   Amount Deposited          = $1.50\n\
                        \x20  Total One Dollar Bills    =  3\n\
                        \x20  Total Five Dollar Bills   =  0\n\
                        \x20  Total Nickels             =  0\n\
                        \x20  Total Dimes               =  0\n\
                        \x20  Total Quarters            =  12\n\
                        \x20  Total Coke                =  0\n\
                        \x20  Total Pepsi               =  0\n\
                        \x20  Total Sprite              =  7\n\
                        \x20  Total Fanta               =  0\n\
                        \x20  Total Faygo               =  0\n\
                        \x20  Total Cups                =  10";

        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_status_report_has_twelve_lines() {
        assert_eq!(empty_report().to_string().lines().count(), 12);
    }

    #[test]
    fn test_help_service_mode() {
        let help = HelpReport { mode: Mode::Service }.to_string();
        let lines: Vec<&str> = help.lines().collect();

        assert_eq!(lines[0], "Commands in Service Mode are:");
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[9], "Lock [password]");
        assert!(!help.contains("Unlock"));
    }

    #[test]
    fn test_help_normal_mode() {
        let help = HelpReport { mode: Mode::Normal }.to_string();
        let lines: Vec<&str> = help.lines().collect();

        assert_eq!(lines[0], "Commands in Normal Mode are:");
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[7], "Unlock [password]");
        assert!(!help.contains("Add"));
    }
}
