//! Currency types for the vending machine
//!
//! This module defines the denominations the machine accepts, the two
//! currency kinds (coins and bills) and the helpers that turn cent amounts
//! into printable dollar values.

use rust_decimal::Decimal;

/// Amount of money in cents
pub type Cents = u32;

/// Number of units held for a denomination, product or cups
pub type Count = u32;

/// Every denomination the machine can hold
///
/// Ordering follows face value, so a `BTreeMap<Denomination, _>` iterates
/// from the nickel up to the five-dollar bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Denomination {
    /// 5 cents
    Nickel,
    /// 10 cents
    Dime,
    /// 25 cents
    Quarter,
    /// One-dollar bill
    OneDollar,
    /// Five-dollar bill
    FiveDollar,
}

impl Denomination {
    /// All denominations in ascending face value
    pub const ALL: [Denomination; 5] = [
        Denomination::Nickel,
        Denomination::Dime,
        Denomination::Quarter,
        Denomination::OneDollar,
        Denomination::FiveDollar,
    ];

    /// Order in which change is paid out: largest value first
    pub const CHANGE_ORDER: [Denomination; 5] = [
        Denomination::FiveDollar,
        Denomination::OneDollar,
        Denomination::Quarter,
        Denomination::Dime,
        Denomination::Nickel,
    ];

    /// Face value in cents
    pub const fn cents(self) -> Cents {
        match self {
            Denomination::Nickel => 5,
            Denomination::Dime => 10,
            Denomination::Quarter => 25,
            Denomination::OneDollar => 100,
            Denomination::FiveDollar => 500,
        }
    }

    /// Whether this denomination is a coin or a bill
    pub const fn kind(self) -> CurrencyKind {
        match self {
            Denomination::Nickel | Denomination::Dime | Denomination::Quarter => {
                CurrencyKind::Coin
            }
            Denomination::OneDollar | Denomination::FiveDollar => CurrencyKind::Bill,
        }
    }
}

/// Coin or bill
///
/// Each kind has its own whitelist of accepted tokens. Coins accept both the
/// numeric value and the coin name; bills only accept the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyKind {
    Coin,
    Bill,
}

impl CurrencyKind {
    /// Resolve an (already uppercased) token to a denomination of this kind
    ///
    /// # Arguments
    ///
    /// * `token` - The denomination token entered by the user (e.g. "25", "QUARTER", "5")
    ///
    /// # Returns
    ///
    /// The matching denomination, or `None` if the token is not on the whitelist
    pub fn parse_denomination(self, token: &str) -> Option<Denomination> {
        match (self, token) {
            (CurrencyKind::Coin, "5" | "NICKEL") => Some(Denomination::Nickel),
            (CurrencyKind::Coin, "10" | "DIME") => Some(Denomination::Dime),
            (CurrencyKind::Coin, "25" | "QUARTER") => Some(Denomination::Quarter),
            (CurrencyKind::Bill, "1") => Some(Denomination::OneDollar),
            (CurrencyKind::Bill, "5") => Some(Denomination::FiveDollar),
            _ => None,
        }
    }

    /// Label used when a single unit is deposited ("COIN" / "BILL")
    pub const fn unit_label(self) -> &'static str {
        match self {
            CurrencyKind::Coin => "COIN",
            CurrencyKind::Bill => "BILL",
        }
    }

    /// Label used by the service commands ("COINS" / "BILLS")
    pub const fn plural_label(self) -> &'static str {
        match self {
            CurrencyKind::Coin => "COINS",
            CurrencyKind::Bill => "BILLS",
        }
    }
}

/// Convert a cent amount into a two-decimal dollar value for display
pub fn to_dollars(cents: Cents) -> Decimal {
    Decimal::new(i64::from(cents), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::nickel_by_value(CurrencyKind::Coin, "5", Some(Denomination::Nickel))]
    #[case::nickel_by_name(CurrencyKind::Coin, "NICKEL", Some(Denomination::Nickel))]
    #[case::dime_by_value(CurrencyKind::Coin, "10", Some(Denomination::Dime))]
    #[case::dime_by_name(CurrencyKind::Coin, "DIME", Some(Denomination::Dime))]
    #[case::quarter_by_value(CurrencyKind::Coin, "25", Some(Denomination::Quarter))]
    #[case::quarter_by_name(CurrencyKind::Coin, "QUARTER", Some(Denomination::Quarter))]
    #[case::one_dollar(CurrencyKind::Bill, "1", Some(Denomination::OneDollar))]
    #[case::five_dollar(CurrencyKind::Bill, "5", Some(Denomination::FiveDollar))]
    #[case::coin_rejects_dollar(CurrencyKind::Coin, "1", None)]
    #[case::bill_rejects_coin_value(CurrencyKind::Bill, "25", None)]
    #[case::bill_rejects_names(CurrencyKind::Bill, "FIVE", None)]
    #[case::lowercase_is_not_normalized_here(CurrencyKind::Coin, "dime", None)]
    #[case::empty(CurrencyKind::Coin, "", None)]
    fn test_parse_denomination(
        #[case] kind: CurrencyKind,
        #[case] token: &str,
        #[case] expected: Option<Denomination>,
    ) {
        assert_eq!(kind.parse_denomination(token), expected);
    }

    #[test]
    fn test_change_order_is_descending() {
        let values: Vec<Cents> = Denomination::CHANGE_ORDER
            .iter()
            .map(|d| d.cents())
            .collect();
        assert_eq!(values, vec![500, 100, 25, 10, 5]);
    }

    #[test]
    fn test_kind_matches_parse_whitelist() {
        for denomination in Denomination::ALL {
            let kind = denomination.kind();
            // Bills are entered in dollars, coins in cents
            let token = match kind {
                CurrencyKind::Coin => denomination.cents().to_string(),
                CurrencyKind::Bill => (denomination.cents() / 100).to_string(),
            };
            assert_eq!(kind.parse_denomination(&token), Some(denomination));
        }
    }

    #[rstest]
    #[case::zero(0, "0.00")]
    #[case::nickel(5, "0.05")]
    #[case::price(145, "1.45")]
    #[case::five_dollars(500, "5.00")]
    fn test_to_dollars(#[case] cents: Cents, #[case] expected: &str) {
        assert_eq!(to_dollars(cents).to_string(), expected);
    }
}
