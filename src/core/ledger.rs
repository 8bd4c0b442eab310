//! Cash ledger module
//!
//! This module provides the `CashLedger` struct which tracks the money held by
//! the machine. It keeps two maps of the same shape:
//! - the **committed** ledger: coins and bills owned by the machine between
//!   transactions
//! - the **pending** buffer: money inserted for the current purchase and not
//!   yet settled
//!
//! The CashLedger is responsible for:
//! - Accepting single-unit deposits into the pending buffer
//! - Returning (zeroing) the pending buffer
//! - Planning exact change from committed stock
//! - Settling a purchase by paying out change and merging the buffer
//! - Service-mode additions and clamped removals of committed currency

use crate::types::{Cents, Count, CurrencyKind, Denomination, ReturnOutcome, VendingError};
use std::collections::BTreeMap;

/// Coins and bills selected to pay out a given amount of change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePlan {
    pieces: BTreeMap<Denomination, Count>,
    total: Cents,
}

impl ChangePlan {
    /// Sum of the planned pieces in cents
    pub fn total(&self) -> Cents {
        self.total
    }

    /// Number of pieces of a denomination in the plan
    pub fn count(&self, denomination: Denomination) -> Count {
        self.pieces.get(&denomination).copied().unwrap_or(0)
    }

    /// Planned pieces, smallest denomination first
    pub fn pieces(&self) -> impl Iterator<Item = (Denomination, Count)> + '_ {
        self.pieces.iter().map(|(d, n)| (*d, *n))
    }
}

/// Ledger of committed currency plus the pending deposit buffer
///
/// Both maps always contain an entry for every denomination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashLedger {
    committed: BTreeMap<Denomination, Count>,
    pending: BTreeMap<Denomination, Count>,
}

fn empty_counts() -> BTreeMap<Denomination, Count> {
    Denomination::ALL.into_iter().map(|d| (d, 0)).collect()
}

impl CashLedger {
    /// Create an empty ledger with no committed currency and an empty buffer
    pub fn new() -> Self {
        CashLedger {
            committed: empty_counts(),
            pending: empty_counts(),
        }
    }

    /// Committed count of a denomination
    pub fn committed(&self, denomination: Denomination) -> Count {
        self.committed.get(&denomination).copied().unwrap_or(0)
    }

    /// Pending (inserted but unsettled) count of a denomination
    pub fn pending(&self, denomination: Denomination) -> Count {
        self.pending.get(&denomination).copied().unwrap_or(0)
    }

    /// All committed counts, for reporting
    pub fn committed_counts(&self) -> &BTreeMap<Denomination, Count> {
        &self.committed
    }

    /// Value of the pending buffer in cents
    pub fn pending_total(&self) -> Cents {
        self.pending
            .iter()
            .map(|(d, n)| d.cents().saturating_mul(*n))
            .fold(0, Cents::saturating_add)
    }

    /// Whether any money is waiting in the pending buffer
    pub fn has_pending(&self) -> bool {
        self.pending.values().any(|n| *n > 0)
    }

    /// Insert a single coin or bill into the pending buffer
    ///
    /// # Arguments
    ///
    /// * `kind` - Coin or bill
    /// * `token` - Denomination token as entered (e.g. "QUARTER", "25", "5")
    ///
    /// # Returns
    ///
    /// * `Ok(Denomination)` - The denomination that was buffered
    /// * `Err(VendingError)` - If the token is not valid for `kind`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The token is not on the whitelist for `kind`
    /// - The pending count for the denomination would overflow
    pub fn deposit(&mut self, kind: CurrencyKind, token: &str) -> Result<Denomination, VendingError> {
        let denomination = kind
            .parse_denomination(token)
            .ok_or_else(|| VendingError::invalid_parameter(kind.unit_label(), token))?;

        let slot = self.pending.entry(denomination).or_insert(0);
        *slot = slot
            .checked_add(1)
            .ok_or_else(|| VendingError::count_overflow(kind.unit_label(), 1))?;

        Ok(denomination)
    }

    /// Hand back everything in the pending buffer
    ///
    /// The buffer is always zero afterwards.
    pub fn return_pending(&mut self) -> ReturnOutcome {
        let outcome = if self.has_pending() {
            ReturnOutcome::Returned
        } else {
            ReturnOutcome::NothingToReturn
        };

        self.pending.values_mut().for_each(|n| *n = 0);
        outcome
    }

    /// Plan exact change from committed currency
    ///
    /// Walks the denominations from the five-dollar bill down to the nickel,
    /// taking as many pieces of each as fit in the remaining amount and are
    /// in stock. The pending buffer is not used. Nothing is modified.
    ///
    /// # Arguments
    ///
    /// * `amount` - Change to pay out in cents
    ///
    /// # Returns
    ///
    /// `Some(ChangePlan)` whose total equals `amount`, or `None` if the greedy
    /// walk cannot reach the amount exactly.
    pub fn plan_change(&self, amount: Cents) -> Option<ChangePlan> {
        let mut remaining = amount;
        let mut pieces = BTreeMap::new();

        for denomination in Denomination::CHANGE_ORDER {
            let used = (remaining / denomination.cents()).min(self.committed(denomination));
            if used > 0 {
                pieces.insert(denomination, used);
                remaining -= used * denomination.cents();
            }
        }

        (remaining == 0).then_some(ChangePlan {
            pieces,
            total: amount,
        })
    }

    /// Whether settling `plan` keeps every committed count in range
    ///
    /// Settlement merges the buffer after paying out bills, so a full
    /// denomination only fits the deposit if the plan frees room first.
    pub fn can_settle(&self, plan: &ChangePlan) -> bool {
        Denomination::ALL.into_iter().all(|denomination| {
            let paid = match denomination.kind() {
                CurrencyKind::Bill => plan.count(denomination),
                CurrencyKind::Coin => 0,
            };
            self.committed(denomination)
                .saturating_sub(paid)
                .checked_add(self.pending(denomination))
                .is_some()
        })
    }

    /// Settle a completed purchase
    ///
    /// Pays out the planned change and then merges the whole pending buffer
    /// into the committed ledger, leaving the buffer empty.
    ///
    /// Only bills are drawn down when change is paid out; the coin counts
    /// keep their value. Check [`CashLedger::can_settle`] first: counts
    /// saturate at `u32::MAX`.
    ///
    /// # Arguments
    ///
    /// * `plan` - A plan previously returned by [`CashLedger::plan_change`]
    pub fn settle(&mut self, plan: &ChangePlan) {
        for (denomination, count) in plan.pieces() {
            if denomination.kind() == CurrencyKind::Bill {
                let slot = self.committed.entry(denomination).or_insert(0);
                *slot = slot.saturating_sub(count);
            }
        }

        for (denomination, count) in self.pending.iter_mut() {
            let slot = self.committed.entry(*denomination).or_insert(0);
            *slot = slot.saturating_add(*count);
            *count = 0;
        }
    }

    /// Add currency to the committed ledger
    ///
    /// # Returns
    ///
    /// * `Ok(Count)` - The new committed count
    /// * `Err(VendingError)` - If the count would overflow
    pub fn add_committed(
        &mut self,
        denomination: Denomination,
        quantity: Count,
    ) -> Result<Count, VendingError> {
        let slot = self.committed.entry(denomination).or_insert(0);
        *slot = slot.checked_add(quantity).ok_or_else(|| {
            VendingError::count_overflow(denomination.kind().plural_label(), quantity)
        })?;
        Ok(*slot)
    }

    /// Remove currency from the committed ledger, clamped at zero
    ///
    /// # Returns
    ///
    /// `(removed, remaining)`: the amount actually taken out, which is at most
    /// the current count, and the count left afterwards.
    pub fn remove_committed(&mut self, denomination: Denomination, quantity: Count) -> (Count, Count) {
        let slot = self.committed.entry(denomination).or_insert(0);
        let removed = quantity.min(*slot);
        *slot -= removed;
        (removed, *slot)
    }
}

impl Default for CashLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ledger_with(committed: &[(Denomination, Count)]) -> CashLedger {
        let mut ledger = CashLedger::new();
        for (denomination, count) in committed {
            ledger.add_committed(*denomination, *count).unwrap();
        }
        ledger
    }

    #[rstest]
    #[case::nickel(CurrencyKind::Coin, "5", Denomination::Nickel)]
    #[case::nickel_name(CurrencyKind::Coin, "NICKEL", Denomination::Nickel)]
    #[case::dime(CurrencyKind::Coin, "10", Denomination::Dime)]
    #[case::dime_name(CurrencyKind::Coin, "DIME", Denomination::Dime)]
    #[case::quarter(CurrencyKind::Coin, "25", Denomination::Quarter)]
    #[case::quarter_name(CurrencyKind::Coin, "QUARTER", Denomination::Quarter)]
    #[case::one(CurrencyKind::Bill, "1", Denomination::OneDollar)]
    #[case::five(CurrencyKind::Bill, "5", Denomination::FiveDollar)]
    fn test_deposit_adds_exactly_one_unit(
        #[case] kind: CurrencyKind,
        #[case] token: &str,
        #[case] expected: Denomination,
    ) {
        let mut ledger = CashLedger::new();
        ledger.deposit(CurrencyKind::Coin, "DIME").unwrap();
        let total_before = ledger.pending_total();
        let count_before = ledger.pending(expected);

        assert_eq!(ledger.deposit(kind, token), Ok(expected));

        assert_eq!(ledger.pending(expected), count_before + 1);
        assert_eq!(ledger.pending_total(), total_before + expected.cents());
        assert_eq!(ledger.committed(expected), 0);
    }

    #[rstest]
    #[case::coin_one(CurrencyKind::Coin, "1", "1 is not a valid parameter for the COIN command")]
    #[case::coin_penny(CurrencyKind::Coin, "PENNY", "PENNY is not a valid parameter for the COIN command")]
    #[case::bill_ten(CurrencyKind::Bill, "10", "10 is not a valid parameter for the BILL command")]
    fn test_deposit_invalid_token(
        #[case] kind: CurrencyKind,
        #[case] token: &str,
        #[case] message: &str,
    ) {
        let mut ledger = CashLedger::new();
        let err = ledger.deposit(kind, token).unwrap_err();

        assert_eq!(err.to_string(), message);
        assert_eq!(ledger.pending_total(), 0);
        assert!(!ledger.has_pending());
    }

    #[test]
    fn test_return_pending_reports_and_clears() {
        let mut ledger = CashLedger::new();
        assert_eq!(ledger.return_pending(), ReturnOutcome::NothingToReturn);

        ledger.deposit(CurrencyKind::Bill, "1").unwrap();
        ledger.deposit(CurrencyKind::Coin, "25").unwrap();
        assert_eq!(ledger.pending_total(), 125);

        assert_eq!(ledger.return_pending(), ReturnOutcome::Returned);
        assert_eq!(ledger.pending_total(), 0);
        assert_eq!(ledger.return_pending(), ReturnOutcome::NothingToReturn);
    }

    #[rstest]
    #[case::no_change_needed(&[], 0, Some(vec![]))]
    #[case::one_nickel(&[(Denomination::Nickel, 1)], 5, Some(vec![(Denomination::Nickel, 1)]))]
    #[case::empty_machine(&[], 5, None)]
    #[case::largest_first(
        &[(Denomination::FiveDollar, 1), (Denomination::OneDollar, 5), (Denomination::Quarter, 4)],
        625,
        Some(vec![
            (Denomination::Quarter, 1),
            (Denomination::OneDollar, 1),
            (Denomination::FiveDollar, 1),
        ])
    )]
    #[case::falls_back_to_smaller(
        &[(Denomination::OneDollar, 1), (Denomination::Quarter, 8)],
        300,
        Some(vec![(Denomination::Quarter, 8), (Denomination::OneDollar, 1)])
    )]
    #[case::mixed_coins(
        &[(Denomination::Quarter, 1), (Denomination::Dime, 1), (Denomination::Nickel, 1)],
        40,
        Some(vec![(Denomination::Nickel, 1), (Denomination::Dime, 1), (Denomination::Quarter, 1)])
    )]
    #[case::not_enough(&[(Denomination::Dime, 2)], 25, None)]
    // Greedy takes the quarter first and cannot finish with dimes alone
    #[case::greedy_misses_dime_only_solution(
        &[(Denomination::Quarter, 1), (Denomination::Dime, 3)],
        30,
        None
    )]
    fn test_plan_change(
        #[case] committed: &[(Denomination, Count)],
        #[case] amount: Cents,
        #[case] expected: Option<Vec<(Denomination, Count)>>,
    ) {
        let ledger = ledger_with(committed);
        let plan = ledger.plan_change(amount);

        match expected {
            Some(pieces) => {
                let plan = plan.expect("expected a plan");
                assert_eq!(plan.total(), amount);
                assert_eq!(plan.pieces().collect::<Vec<_>>(), pieces);
                let sum: Cents = plan.pieces().map(|(d, n)| d.cents() * n).sum();
                assert_eq!(sum, amount);
            }
            None => assert!(plan.is_none()),
        }
    }

    #[test]
    fn test_plan_change_does_not_modify_ledger() {
        let ledger = ledger_with(&[(Denomination::Quarter, 4)]);
        let before = ledger.clone();

        assert!(ledger.plan_change(50).is_some());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_settle_pays_bills_and_merges_buffer() {
        let mut ledger = ledger_with(&[
            (Denomination::FiveDollar, 1),
            (Denomination::OneDollar, 2),
            (Denomination::Quarter, 3),
        ]);
        ledger.deposit(CurrencyKind::Bill, "5").unwrap();
        ledger.deposit(CurrencyKind::Bill, "5").unwrap();

        let plan = ledger.plan_change(625).unwrap();
        assert_eq!(plan.count(Denomination::FiveDollar), 1);
        assert_eq!(plan.count(Denomination::OneDollar), 1);
        assert_eq!(plan.count(Denomination::Quarter), 1);

        ledger.settle(&plan);

        // Bills are drawn down, then the two deposited fives are merged
        assert_eq!(ledger.committed(Denomination::FiveDollar), 2);
        assert_eq!(ledger.committed(Denomination::OneDollar), 1);
        // Coin counts are not drawn down by the payout
        assert_eq!(ledger.committed(Denomination::Quarter), 3);
        assert_eq!(ledger.pending_total(), 0);
        assert!(!ledger.has_pending());
    }

    #[test]
    fn test_settle_with_empty_plan_merges_buffer() {
        let mut ledger = CashLedger::new();
        ledger.deposit(CurrencyKind::Coin, "QUARTER").unwrap();
        ledger.deposit(CurrencyKind::Coin, "DIME").unwrap();

        let plan = ledger.plan_change(0).unwrap();
        ledger.settle(&plan);

        assert_eq!(ledger.committed(Denomination::Quarter), 1);
        assert_eq!(ledger.committed(Denomination::Dime), 1);
        assert_eq!(ledger.pending_total(), 0);
    }

    #[test]
    fn test_can_settle_detects_full_denomination() {
        let mut ledger = ledger_with(&[
            (Denomination::FiveDollar, u32::MAX),
            (Denomination::OneDollar, 5),
            (Denomination::Quarter, 4),
            (Denomination::Nickel, 1),
        ]);
        ledger.deposit(CurrencyKind::Bill, "5").unwrap();

        // 355 in change uses no five-dollar bill, so the deposit has no room
        let plan = ledger.plan_change(355).unwrap();
        assert_eq!(plan.count(Denomination::FiveDollar), 0);
        assert!(!ledger.can_settle(&plan));

        // 855 pays out a five first, which frees room for the deposit
        ledger.deposit(CurrencyKind::Bill, "5").unwrap();
        ledger.remove_committed(Denomination::FiveDollar, 1);
        let plan = ledger.plan_change(855).unwrap();
        assert_eq!(plan.count(Denomination::FiveDollar), 1);
        assert!(ledger.can_settle(&plan));
    }

    #[test]
    fn test_can_settle_with_room() {
        let mut ledger = ledger_with(&[(Denomination::Quarter, u32::MAX)]);
        ledger.deposit(CurrencyKind::Bill, "1").unwrap();

        let plan = ledger.plan_change(0).unwrap();
        assert!(ledger.can_settle(&plan));
    }

    #[test]
    fn test_add_committed_overflow_is_rejected() {
        let mut ledger = ledger_with(&[(Denomination::Dime, u32::MAX)]);

        let err = ledger.add_committed(Denomination::Dime, 1).unwrap_err();
        assert_eq!(err, VendingError::count_overflow("COINS", 1));
        assert_eq!(ledger.committed(Denomination::Dime), u32::MAX);
    }

    #[rstest]
    #[case::partial(10, 4, 4, 6)]
    #[case::exact(10, 10, 10, 0)]
    #[case::clamped(3, 50, 3, 0)]
    #[case::from_empty(0, 5, 0, 0)]
    #[case::zero_request(7, 0, 0, 7)]
    fn test_remove_committed_clamps_at_zero(
        #[case] initial: Count,
        #[case] requested: Count,
        #[case] expected_removed: Count,
        #[case] expected_remaining: Count,
    ) {
        let mut ledger = ledger_with(&[(Denomination::OneDollar, initial)]);

        let (removed, remaining) = ledger.remove_committed(Denomination::OneDollar, requested);

        assert_eq!(removed, expected_removed);
        assert_eq!(remaining, expected_remaining);
        assert_eq!(ledger.committed(Denomination::OneDollar), expected_remaining);
    }
}
