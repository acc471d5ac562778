use crate::domain::payment::PaymentState;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// A single rule broken while building a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingAmount,
    NonPositiveAmount(Decimal),
    UnparsableAmount(String),
    MissingMethod,
    UnknownMethod(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingAmount => write!(f, "amount is required"),
            Violation::NonPositiveAmount(value) => {
                write!(f, "amount must be greater than zero, got {value}")
            }
            Violation::UnparsableAmount(raw) => write!(f, "invalid amount: {raw}"),
            Violation::MissingMethod => write!(f, "payment method is required"),
            Violation::UnknownMethod(raw) => write!(
                f,
                "invalid payment method: {raw}, valid options: card, transfer, cash"
            ),
        }
    }
}

/// Every violation found by `PaymentBuilder::build`, in the order they were detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }

    /// True if any violation concerns the amount field.
    pub fn mentions_amount(&self) -> bool {
        self.violations.iter().any(|v| {
            matches!(
                v,
                Violation::MissingAmount
                    | Violation::NonPositiveAmount(_)
                    | Violation::UnparsableAmount(_)
            )
        })
    }

    /// True if any violation concerns the payment method.
    pub fn mentions_method(&self) -> bool {
        self.violations
            .iter()
            .any(|v| matches!(v, Violation::MissingMethod | Violation::UnknownMethod(_)))
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid transition: {from} -> {to}")]
pub struct InvalidTransitionError {
    pub from: PaymentState,
    pub to: PaymentState,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("payment must be in_progress to be processed, found {state}")]
    NotInProgress { state: PaymentState },
    #[error("payment declined by gateway: {reason}")]
    Declined { reason: String },
}

/// A processor setting that names neither `MOCK` nor `REAL`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown processor type: {0}")]
pub struct UnknownProcessorKind(pub String);

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    InvalidTransition(#[from] InvalidTransitionError),
    #[error("Processor error: {0}")]
    Processor(#[from] ProcessorError),
    #[error("Unknown payment id: {0}")]
    UnknownPayment(u32),
    #[error("Payment id already used in this batch: {0}")]
    DuplicateLabel(u32),
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for PaymentError {
    fn from(err: rocksdb::Error) -> Self {
        PaymentError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validation_error_lists_every_violation() {
        let err = ValidationError::new(vec![
            Violation::UnknownMethod("bitcoin".to_string()),
            Violation::NonPositiveAmount(dec!(-5)),
        ]);
        let message = err.to_string();
        assert!(message.contains("invalid payment method: bitcoin"));
        assert!(message.contains("amount must be greater than zero, got -5"));
        assert!(message.contains("; "));
        assert!(err.mentions_amount());
        assert!(err.mentions_method());
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = InvalidTransitionError {
            from: PaymentState::Created,
            to: PaymentState::Confirmed,
        };
        assert_eq!(err.to_string(), "invalid transition: created -> confirmed");
    }

    #[test]
    fn test_unknown_processor_kind_is_an_error() {
        let err = UnknownProcessorKind("stripe".to_string());
        assert_eq!(err.to_string(), "unknown processor type: stripe");

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
