//! Ledger state and the reducers that move it forward.
//!
//! Every operation takes a snapshot by reference and returns a new one, so a
//! front-end can keep the previous snapshot when an input is rejected: an
//! invalid add is a no-op simply because the caller never swaps snapshots.

use chrono::NaiveDate;

use crate::{Currency, EngineError, ExpenseRecord, MoneyCents, PaymentMethod, ResultEngine, Totals};

/// Insertion-ordered expenses plus the declared income.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    expenses: Vec<ExpenseRecord>,
    income: MoneyCents,
}

impl Ledger {
    #[must_use]
    pub fn new(income: MoneyCents) -> Self {
        Self {
            expenses: Vec::new(),
            income,
        }
    }

    #[must_use]
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    #[must_use]
    pub fn income(&self) -> MoneyCents {
        self.income
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Total spent and remaining balance, recomputed from scratch.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::compute(self)
    }

    /// Returns a copy with `record` appended.
    #[must_use]
    pub fn with_expense(&self, record: ExpenseRecord) -> Self {
        let mut expenses = self.expenses.clone();
        expenses.push(record);
        Self {
            expenses,
            income: self.income,
        }
    }

    /// Returns a copy without the record at `index`; out of range is a no-op.
    #[must_use]
    pub fn without_expense(&self, index: usize) -> Self {
        let expenses = self
            .expenses
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, record)| record.clone())
            .collect();
        Self {
            expenses,
            income: self.income,
        }
    }

    #[must_use]
    pub fn with_income(&self, income: MoneyCents) -> Self {
        Self {
            expenses: self.expenses.clone(),
            income,
        }
    }
}

/// The form being filled in for the next expense.
///
/// Text fields hold raw input; they are parsed only on submit. Currency and
/// payment method survive a submit, the text fields do not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub category: String,
    pub amount: String,
    pub description: String,
    pub currency: Currency,
    pub payment_method: PaymentMethod,
}

impl ExpenseDraft {
    /// Empty draft with preselected currency and payment method.
    #[must_use]
    pub fn new(currency: Currency, payment_method: PaymentMethod) -> Self {
        Self {
            currency,
            payment_method,
            ..Self::default()
        }
    }

    /// Checks the draft and returns the trimmed category and parsed amount.
    pub fn validate(&self) -> ResultEngine<(String, MoneyCents)> {
        if self.category.trim().is_empty() {
            return Err(EngineError::InvalidCategory);
        }
        let amount = self.amount.parse::<MoneyCents>()?;
        Ok((self.category.clone(), amount))
    }

    /// Same selectors, blank text fields.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::new(self.currency, self.payment_method)
    }

    pub fn cycle_currency(&mut self, forward: bool) {
        self.currency = if forward {
            self.currency.next()
        } else {
            self.currency.prev()
        };
    }

    pub fn cycle_payment_method(&mut self, forward: bool) {
        self.payment_method = if forward {
            self.payment_method.next()
        } else {
            self.payment_method.prev()
        };
    }
}

/// Everything the expense form owns: the ledger and the pending draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerState {
    pub ledger: Ledger,
    pub draft: ExpenseDraft,
}

impl LedgerState {
    #[must_use]
    pub fn new(currency: Currency, payment_method: PaymentMethod) -> Self {
        Self {
            ledger: Ledger::default(),
            draft: ExpenseDraft::new(currency, payment_method),
        }
    }

    /// Returns a copy with the draft replaced, ledger untouched.
    #[must_use]
    pub fn with_draft(&self, draft: ExpenseDraft) -> Self {
        Self {
            ledger: self.ledger.clone(),
            draft,
        }
    }

    /// Turns the draft into a record dated `today` and clears the text fields.
    ///
    /// On error the caller keeps `self`; nothing has been appended.
    pub fn add_expense(&self, today: NaiveDate) -> ResultEngine<Self> {
        let (category, amount) = self.draft.validate().inspect_err(|err| {
            tracing::debug!("expense draft rejected: {err}");
        })?;

        let record = ExpenseRecord {
            category,
            amount,
            description: self.draft.description.clone(),
            date: today,
            currency: self.draft.currency,
            payment_method: self.draft.payment_method,
        };
        tracing::info!(
            category = %record.category,
            amount = %record.amount,
            currency = %record.currency,
            "expense added"
        );

        Ok(Self {
            ledger: self.ledger.with_expense(record),
            draft: self.draft.cleared(),
        })
    }

    /// Drops the record at `index`; the rest keep their relative order.
    #[must_use]
    pub fn remove_expense(&self, index: usize) -> Self {
        if index >= self.ledger.len() {
            tracing::debug!(index, len = self.ledger.len(), "remove ignored: index out of range");
            return self.clone();
        }
        tracing::info!(index, "expense removed");
        Self {
            ledger: self.ledger.without_expense(index),
            draft: self.draft.clone(),
        }
    }

    /// Sets the income from raw input; blank input means zero.
    pub fn set_income(&self, input: &str) -> ResultEngine<Self> {
        let income = if input.trim().is_empty() {
            MoneyCents::ZERO
        } else {
            input.parse::<MoneyCents>().inspect_err(|err| {
                tracing::debug!("income rejected: {err}");
            })?
        };
        Ok(Self {
            ledger: self.ledger.with_income(income),
            draft: self.draft.clone(),
        })
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }
}
