//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidCategory`] returned when a draft has a blank category.
//! - [`InvalidAmount`] returned when an amount cannot be parsed.
//! - [`Csv`], [`Pdf`] and [`Io`] returned by the export adapters.
//!
//!  [`InvalidCategory`]: EngineError::InvalidCategory
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`Csv`]: EngineError::Csv
//!  [`Pdf`]: EngineError::Pdf
//!  [`Io`]: EngineError::Io
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Category is required")]
    InvalidCategory,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Unsupported payment method: {0}")]
    UnsupportedPaymentMethod(String),
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("PDF export failed: {0}")]
    Pdf(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidCategory, Self::InvalidCategory) => true,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::UnsupportedCurrency(a), Self::UnsupportedCurrency(b)) => a == b,
            (Self::UnsupportedPaymentMethod(a), Self::UnsupportedPaymentMethod(b)) => a == b,
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            (Self::Pdf(a), Self::Pdf(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
