use crate::domain::payment::{Payment, PaymentState};
use crate::domain::ports::PaymentProcessor;
use crate::domain::processor::{GatewayStatus, ProcessorKind, ProcessorOutcome};
use crate::error::ProcessorError;
use chrono::Utc;
use tracing::info;

fn ensure_in_progress(payment: &Payment) -> Result<(), ProcessorError> {
    match payment.state() {
        PaymentState::InProgress => Ok(()),
        state => Err(ProcessorError::NotInProgress { state }),
    }
}

/// Simulated processor for development and tests. Never contacts anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockProcessor;

impl MockProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for MockProcessor {
    fn process(&self, payment: &Payment) -> Result<ProcessorOutcome, ProcessorError> {
        ensure_in_progress(payment)?;
        info!(
            reference = %payment.reference(),
            amount = %payment.amount(),
            method = %payment.method(),
            "[MOCK] simulating payment"
        );

        Ok(ProcessorOutcome {
            processor: ProcessorKind::Mock,
            success: true,
            reference: format!("MOCK-{}", payment.reference()),
            status: GatewayStatus::Simulated,
            method: payment.method(),
            message: format!(
                "[MOCK] payment simulated successfully (ref: {})",
                payment.reference()
            ),
            processed_at: Utc::now(),
        })
    }

    fn name(&self) -> &'static str {
        "MockProcessor"
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Mock
    }
}

/// Production processor.
///
/// This is where a gateway client would be called. Until one is wired in it
/// approves every payment in the right state.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealProcessor;

impl RealProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for RealProcessor {
    fn process(&self, payment: &Payment) -> Result<ProcessorOutcome, ProcessorError> {
        ensure_in_progress(payment)?;
        info!(
            reference = %payment.reference(),
            amount = %payment.amount(),
            method = %payment.method(),
            "[REAL] processing payment"
        );

        Ok(ProcessorOutcome {
            processor: ProcessorKind::Real,
            success: true,
            reference: format!("TXN-{}", payment.reference()),
            status: GatewayStatus::Approved,
            method: payment.method(),
            message: format!(
                "payment processed successfully (ref: {})",
                payment.reference()
            ),
            processed_at: Utc::now(),
        })
    }

    fn name(&self) -> &'static str {
        "RealProcessor"
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Real
    }
}
