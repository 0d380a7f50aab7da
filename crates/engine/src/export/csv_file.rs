//! CSV rendering.
//!
//! Fields are written as-is: a comma inside a description shifts the
//! following columns. Consumers that need robust parsing should not rely on
//! this file format.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;

use crate::{EngineError, Ledger, ResultEngine};

pub const HEADER: [&str; 6] = [
    "Category",
    "Amount",
    "Description",
    "Date",
    "Currency",
    "Payment Method",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    category: &'a str,
    amount: String,
    description: &'a str,
    date: String,
    currency: &'static str,
    payment_method: &'static str,
}

/// Header line plus one line per record, `\n` terminated.
pub fn render(ledger: &Ledger) -> ResultEngine<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);

    writer.write_record(HEADER)?;
    for expense in ledger.expenses() {
        writer.serialize(CsvRow {
            category: &expense.category,
            amount: expense.amount.to_plain_string(),
            description: &expense.description,
            date: expense.date_label(),
            currency: expense.currency.code(),
            payment_method: expense.payment_method.label(),
        })?;
    }

    writer
        .into_inner()
        .map_err(|err| EngineError::Io(err.into_error()))
}
