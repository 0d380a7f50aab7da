//! Expense ledger engine.
//!
//! Holds the ledger state and its reducers ([`LedgerState`]), the derived
//! totals ([`Totals`]) and the export adapters ([`export`]). Nothing in this
//! crate touches a terminal; files only leave through a
//! [`export::DownloadSink`].

pub use currency::Currency;
pub use error::EngineError;
pub use expense::ExpenseRecord;
pub use export::{DirectorySink, DownloadSink, ExportFormat};
pub use ledger::{ExpenseDraft, Ledger, LedgerState};
pub use money::MoneyCents;
pub use payment::PaymentMethod;
pub use totals::{BalanceStatus, Totals};

pub mod categories;
pub mod export;

mod currency;
mod error;
mod expense;
mod ledger;
mod money;
mod payment;
mod totals;

pub type ResultEngine<T> = Result<T, EngineError>;
