use serde::{Deserialize, Serialize};

use crate::EngineError;

/// How an expense was paid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Cash,
    #[serde(rename = "UPI", alias = "Upi", alias = "upi")]
    Upi,
    Card,
}

impl PaymentMethod {
    /// Every selectable method, in selector order.
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::Upi, PaymentMethod::Card];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for PaymentMethod {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::UnsupportedPaymentMethod(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upi_is_distinct_from_card() {
        assert_ne!(PaymentMethod::Upi, PaymentMethod::Card);
        assert_eq!(PaymentMethod::try_from("upi").unwrap(), PaymentMethod::Upi);
        assert_eq!(PaymentMethod::Upi.to_string(), "UPI");
    }

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(PaymentMethod::Card.next(), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::Cash.prev(), PaymentMethod::Card);
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!(PaymentMethod::try_from("Cheque").is_err());
    }
}
