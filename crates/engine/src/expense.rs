//! A single recorded expense.

use chrono::NaiveDate;

use crate::{Currency, MoneyCents, PaymentMethod};

/// One expense as submitted through the form.
///
/// Records are immutable once created; the ledger only appends and removes
/// them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub category: String,
    pub amount: MoneyCents,
    pub description: String,
    pub date: NaiveDate,
    pub currency: Currency,
    pub payment_method: PaymentMethod,
}

impl ExpenseRecord {
    /// Creation date as `M/D/YYYY`, without zero padding (`1/1/2024`).
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format("%-m/%-d/%Y").to_string()
    }
}
