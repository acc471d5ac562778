use crate::error::Violation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strictly positive monetary amount.
///
/// Wraps `rust_decimal::Decimal` so that a `Payment` can never carry a zero or
/// negative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, Violation> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(Violation::NonPositiveAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Violation;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| Violation::UnparsableAmount(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(0.01)).is_ok());
        assert_eq!(
            Amount::new(dec!(0.0)),
            Err(Violation::NonPositiveAmount(dec!(0.0)))
        );
        assert!(matches!(
            Amount::new(dec!(-1.0)),
            Err(Violation::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_amount_from_str() {
        let amount: Amount = "150.00".parse().unwrap();
        assert_eq!(amount.value(), dec!(150.00));

        assert_eq!(
            "abc".parse::<Amount>(),
            Err(Violation::UnparsableAmount("abc".to_string()))
        );
        assert!(matches!(
            "-5".parse::<Amount>(),
            Err(Violation::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_amount_serde_rejects_non_positive() {
        let ok: Amount = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(ok.value(), dec!(12.5));
        assert!(serde_json::from_str::<Amount>("\"0\"").is_err());
    }
}
