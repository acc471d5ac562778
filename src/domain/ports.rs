use super::payment::{Payment, PaymentId};
use super::processor::{ProcessorKind, ProcessorOutcome};
use crate::error::{ProcessorError, Result};
use async_trait::async_trait;

/// Persistence collaborator keyed by payment reference.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Inserts or replaces the record for `payment.reference()`.
    async fn store(&self, payment: Payment) -> Result<()>;
    async fn get(&self, reference: PaymentId) -> Result<Option<Payment>>;
    /// Every stored payment, newest first.
    async fn all_payments(&self) -> Result<Vec<Payment>>;
}

/// Something that can move money for a payment, or pretend to.
pub trait PaymentProcessor: Send + Sync {
    fn process(&self, payment: &Payment) -> std::result::Result<ProcessorOutcome, ProcessorError>;
    fn name(&self) -> &'static str;
    fn kind(&self) -> ProcessorKind;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
pub type ProcessorBox = Box<dyn PaymentProcessor>;
