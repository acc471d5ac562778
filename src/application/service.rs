use super::factory::ProcessorFactory;
use crate::domain::builder::PaymentBuilder;
use crate::domain::payment::{Payment, PaymentState};
use crate::domain::ports::ProcessorBox;
use crate::domain::processor::ProcessorOutcome;
use crate::error::{InvalidTransitionError, Result, ValidationError};
use rust_decimal::Decimal;
use tracing::info;

/// Entry point for every payment operation.
///
/// The processor is injected at construction time. Passing `None` lets the
/// [`ProcessorFactory`] pick one, which is what production wiring does; tests
/// hand in a double instead.
pub struct PaymentService {
    processor: ProcessorBox,
}

impl PaymentService {
    pub fn new(processor: Option<ProcessorBox>, factory: &ProcessorFactory) -> Self {
        let processor = processor.unwrap_or_else(|| factory.create());
        info!(processor = processor.name(), "payment service initialized");
        Self { processor }
    }

    pub fn with_processor(processor: ProcessorBox) -> Self {
        Self::new(Some(processor), &ProcessorFactory::default())
    }

    pub fn processor_name(&self) -> &'static str {
        self.processor.name()
    }

    /// Builds a new payment. Nothing is persisted here.
    pub fn create_payment(
        &self,
        amount: Decimal,
        method: &str,
    ) -> std::result::Result<Payment, ValidationError> {
        info!(%amount, method, "creating payment");
        let payment = PaymentBuilder::new()
            .with_amount(amount)
            .with_method(method)
            .build()?;
        info!(reference = %payment.reference(), "payment created");
        Ok(payment)
    }

    /// Same as [`create_payment`](Self::create_payment) for untrusted text input.
    pub fn create_payment_from_str(
        &self,
        amount: &str,
        method: &str,
    ) -> std::result::Result<Payment, ValidationError> {
        info!(amount, method, "creating payment");
        let payment = PaymentBuilder::new()
            .with_amount_str(amount)
            .with_method(method)
            .build()?;
        info!(reference = %payment.reference(), "payment created");
        Ok(payment)
    }

    /// Moves the payment to `InProgress` and hands it to the processor.
    ///
    /// The outcome is returned as the processor produced it. Confirming or
    /// cancelling afterwards is up to the caller. If the processor fails the
    /// payment stays `InProgress`.
    pub fn process_payment(&self, payment: &mut Payment) -> Result<ProcessorOutcome> {
        info!(reference = %payment.reference(), "processing payment");
        payment.transition_to(PaymentState::InProgress)?;

        let outcome = self.processor.process(payment)?;
        info!(
            reference = %payment.reference(),
            processor = %outcome.processor,
            message = %outcome.message,
            "payment processed"
        );
        Ok(outcome)
    }

    pub fn confirm_payment(
        &self,
        payment: &mut Payment,
    ) -> std::result::Result<(), InvalidTransitionError> {
        info!(reference = %payment.reference(), "confirming payment");
        payment.transition_to(PaymentState::Confirmed)
    }

    /// Only payments already `InProgress` can be cancelled.
    pub fn cancel_payment(
        &self,
        payment: &mut Payment,
    ) -> std::result::Result<(), InvalidTransitionError> {
        info!(reference = %payment.reference(), "cancelling payment");
        payment.transition_to(PaymentState::Cancelled)
    }
}
