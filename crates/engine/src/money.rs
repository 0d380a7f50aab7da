use std::{
    fmt,
    iter::Sum,
    ops::{Add, Neg, Sub},
    str::FromStr,
};

use crate::EngineError;

/// Signed money amount stored as **integer cents**.
///
/// Every amount in the ledger (expenses, income, totals) uses this type, so
/// sums never drift the way floating point would. The type carries no
/// currency: a ledger happily adds INR to USD.
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(12_30);
/// assert_eq!(amount.to_string(), "12.30");
/// assert_eq!(amount.to_plain_string(), "12.3");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator and
/// exponents; extra decimals are rounded to the cent):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert_eq!("12.345".parse::<MoneyCents>().unwrap().cents(), 1235);
/// assert_eq!("1e3".parse::<MoneyCents>().unwrap().cents(), 100_000);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Shortest decimal form: no trailing zeros, no dot for whole amounts.
    ///
    /// Used by the exports, where `10` must stay `10` and not `10.00`.
    #[must_use]
    pub fn to_plain_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let cents = abs % 100;
        match (cents, cents % 10) {
            (0, _) => format!("{sign}{units}"),
            (_, 0) => format!("{sign}{units}.{}", cents / 10),
            _ => format!("{sign}{units}.{cents:02}"),
        }
    }
}

/// Always two decimals, e.g. `-3.50`.
impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for MoneyCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Saturates at the `i64` bounds instead of wrapping.
impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0.saturating_add(rhs.0))
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for MoneyCents {
    type Output = MoneyCents;

    fn neg(self) -> Self::Output {
        MoneyCents(-self.0)
    }
}

impl Sum for MoneyCents {
    fn sum<I: Iterator<Item = MoneyCents>>(iter: I) -> Self {
        iter.fold(MoneyCents::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a MoneyCents> for MoneyCents {
    fn sum<I: Iterator<Item = &'a MoneyCents>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator, an optional leading `+`/`-`
    /// and an optional exponent (`1e3`, `2.5E-1`). Digits past the cent are
    /// rounded half away from zero. Rejects empty strings and anything that
    /// is not a finite decimal number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount(format!("\"{}\" is not a number", s.trim()));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let rest = rest.trim().replace(',', ".");
        if rest.is_empty() {
            return Err(empty());
        }

        let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
            Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().map_err(|_| invalid())?),
            None => (rest.as_str(), 0),
        };
        let (units_str, frac_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        // ".5" is accepted like a number input would, "." alone is not.
        if (units_str.is_empty() && frac_str.is_empty())
            || !all_digits(units_str)
            || !all_digits(frac_str)
        {
            return Err(invalid());
        }

        let digits = format!("{units_str}{frac_str}");
        let digits = digits.trim_start_matches('0');
        if digits.len() > 36 {
            return Err(overflow());
        }
        let significand: i128 = if digits.is_empty() {
            0
        } else {
            digits.parse().map_err(|_| invalid())?
        };

        // value = significand * 10^(exponent - frac_len), and cents are value * 100.
        let shift = i64::from(exponent) - frac_str.len() as i64 + 2;
        let cents: i128 = if significand == 0 {
            0
        } else if shift >= 0 {
            u32::try_from(shift)
                .ok()
                .and_then(|exp| 10i128.checked_pow(exp))
                .and_then(|scale| significand.checked_mul(scale))
                .ok_or_else(overflow)?
        } else {
            match u32::try_from(-shift).ok().and_then(|exp| 10i128.checked_pow(exp)) {
                Some(divisor) => {
                    let (quotient, remainder) = (significand / divisor, significand % divisor);
                    if remainder >= divisor - remainder {
                        quotient + 1
                    } else {
                        quotient
                    }
                }
                // Divisor beyond i128 while the significand has at most 36 digits.
                None => 0,
            }
        };

        let cents = i64::try_from(cents).map_err(|_| overflow())?;
        Ok(MoneyCents(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(MoneyCents::new(0).to_string(), "0.00");
        assert_eq!(MoneyCents::new(1).to_string(), "0.01");
        assert_eq!(MoneyCents::new(1050).to_string(), "10.50");
        assert_eq!(MoneyCents::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn plain_string_drops_trailing_zeros() {
        assert_eq!(MoneyCents::new(1000).to_plain_string(), "10");
        assert_eq!(MoneyCents::new(1050).to_plain_string(), "10.5");
        assert_eq!(MoneyCents::new(1005).to_plain_string(), "10.05");
        assert_eq!(MoneyCents::new(-250).to_plain_string(), "-2.5");
        assert_eq!(MoneyCents::new(0).to_plain_string(), "0");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!("10,50".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!(".5".parse::<MoneyCents>().unwrap().cents(), 50);
        assert_eq!("-0.01".parse::<MoneyCents>().unwrap().cents(), -1);
        assert_eq!("+1.00".parse::<MoneyCents>().unwrap().cents(), 100);
        assert_eq!("  2.30 ".parse::<MoneyCents>().unwrap().cents(), 230);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<MoneyCents>().is_err());
        assert!("   ".parse::<MoneyCents>().is_err());
        assert!("-".parse::<MoneyCents>().is_err());
        assert!(".".parse::<MoneyCents>().is_err());
        assert!("abc".parse::<MoneyCents>().is_err());
        assert!("1.2.3".parse::<MoneyCents>().is_err());
        assert!("1e".parse::<MoneyCents>().is_err());
        assert!("e3".parse::<MoneyCents>().is_err());
        assert!("1e3e4".parse::<MoneyCents>().is_err());
        assert!("NaN".parse::<MoneyCents>().is_err());
        assert!("inf".parse::<MoneyCents>().is_err());
    }

    #[test]
    fn parse_rounds_extra_decimals_half_away_from_zero() {
        assert_eq!("12.345".parse::<MoneyCents>().unwrap().cents(), 1235);
        assert_eq!("12.344".parse::<MoneyCents>().unwrap().cents(), 1234);
        assert_eq!("0.005".parse::<MoneyCents>().unwrap().cents(), 1);
        assert_eq!("-0.005".parse::<MoneyCents>().unwrap().cents(), -1);
        assert_eq!("0.001".parse::<MoneyCents>().unwrap().cents(), 0);
    }

    #[test]
    fn parse_accepts_exponent_notation() {
        assert_eq!("1e3".parse::<MoneyCents>().unwrap().cents(), 100_000);
        assert_eq!("2.5E-1".parse::<MoneyCents>().unwrap().cents(), 25);
        assert_eq!("1e+2".parse::<MoneyCents>().unwrap().cents(), 10_000);
        assert_eq!("1e-50".parse::<MoneyCents>().unwrap().cents(), 0);
    }

    #[test]
    fn parse_rejects_values_beyond_i64_cents() {
        assert!("1e30".parse::<MoneyCents>().is_err());
        assert!("99999999999999999999".parse::<MoneyCents>().is_err());
    }

    #[test]
    fn sum_adds_every_amount() {
        let amounts = [MoneyCents::new(100), MoneyCents::new(250), MoneyCents::new(-50)];
        assert_eq!(amounts.iter().sum::<MoneyCents>(), MoneyCents::new(300));
    }
}
