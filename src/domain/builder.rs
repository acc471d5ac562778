use super::amount::Amount;
use super::payment::{Payment, PaymentMethod};
use super::ports::PaymentStore;
use crate::error::{Result, ValidationError, Violation};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Fluent, validating constructor for [`Payment`].
///
/// Problems are collected rather than returned immediately, so a single
/// `build()` reports every broken rule at once:
///
/// ```
/// use pagos::domain::builder::PaymentBuilder;
/// use rust_decimal_macros::dec;
///
/// let payment = PaymentBuilder::new()
///     .with_amount(dec!(150.00))
///     .with_method("card")
///     .build()
///     .unwrap();
/// assert_eq!(payment.amount().value(), dec!(150.00));
/// ```
#[derive(Debug, Default)]
pub struct PaymentBuilder {
    amount: Option<Decimal>,
    method: Option<PaymentMethod>,
    violations: Vec<Violation>,
}

impl PaymentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Parses `raw` as a decimal amount, recording a violation if it is not one.
    pub fn with_amount_str(mut self, raw: &str) -> Self {
        match Decimal::from_str(raw.trim()) {
            Ok(amount) => self.amount = Some(amount),
            Err(_) => self
                .violations
                .push(Violation::UnparsableAmount(raw.to_string())),
        }
        self
    }

    pub fn with_method(mut self, method: &str) -> Self {
        match PaymentMethod::from_str(method) {
            Ok(method) => self.method = Some(method),
            Err(violation) => self.violations.push(violation),
        }
        self
    }

    pub fn build(self) -> std::result::Result<Payment, ValidationError> {
        let mut violations = self.violations;
        let amount_reported = violations
            .iter()
            .any(|v| matches!(v, Violation::UnparsableAmount(_)));
        let method_reported = violations
            .iter()
            .any(|v| matches!(v, Violation::UnknownMethod(_)));

        let amount = match self.amount.map(Amount::new) {
            Some(Ok(amount)) => Some(amount),
            Some(Err(violation)) => {
                violations.push(violation);
                None
            }
            None => {
                if !amount_reported {
                    violations.push(Violation::MissingAmount);
                }
                None
            }
        };

        if self.method.is_none() && !method_reported {
            violations.push(Violation::MissingMethod);
        }

        match (amount, self.method) {
            (Some(amount), Some(method)) if violations.is_empty() => {
                Ok(Payment::new(amount, method))
            }
            _ => Err(ValidationError::new(violations)),
        }
    }

    /// Builds the payment and persists it before handing it back.
    pub async fn build_and_save(self, store: &dyn PaymentStore) -> Result<Payment> {
        let payment = self.build()?;
        store.store(payment.clone()).await?;
        Ok(payment)
    }
}
