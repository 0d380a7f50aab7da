//! Values derived from the ledger. Nothing here is cached.

use crate::{Ledger, MoneyCents};

/// Sign of the remaining balance, used to colour it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceStatus {
    NonNegative,
    Negative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Totals {
    pub total_spent: MoneyCents,
    pub remaining_balance: MoneyCents,
}

impl Totals {
    /// Sums every amount regardless of its currency tag, then subtracts the
    /// total from the income.
    ///
    /// Both results are capped at the `i64` cent bounds: a sum past
    /// `i64::MAX` cents reads as `i64::MAX`, never as a wrapped negative.
    #[must_use]
    pub fn compute(ledger: &Ledger) -> Self {
        let total_spent: MoneyCents = ledger.expenses().iter().map(|e| e.amount).sum();
        Self {
            total_spent,
            remaining_balance: ledger.income() - total_spent,
        }
    }

    #[must_use]
    pub fn balance_status(&self) -> BalanceStatus {
        if self.remaining_balance.is_negative() {
            BalanceStatus::Negative
        } else {
            BalanceStatus::NonNegative
        }
    }
}
