use super::service::PaymentService;
use crate::domain::instruction::{Action, Instruction};
use crate::domain::payment::{Payment, PaymentId};
use crate::domain::ports::PaymentStoreBox;
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Method used when a `create` row leaves the column empty.
pub const DEFAULT_METHOD: &str = "card";

/// Applies batch instructions to a `PaymentService`, one at a time.
///
/// Every successful operation is written back to the store before the next
/// instruction is accepted, so the store always reflects the last applied row.
pub struct BatchRunner {
    service: PaymentService,
    store: PaymentStoreBox,
    labels: HashMap<u32, PaymentId>,
}

impl BatchRunner {
    /// Creates a new `BatchRunner`.
    ///
    /// # Arguments
    ///
    /// * `service` - The service that performs the lifecycle operations.
    /// * `store` - Where payments are persisted between instructions.
    pub fn new(service: PaymentService, store: PaymentStoreBox) -> Self {
        Self {
            service,
            store,
            labels: HashMap::new(),
        }
    }

    /// Applies one instruction and returns the payment as it was stored.
    pub async fn apply(&mut self, instruction: Instruction) -> Result<Payment> {
        debug!(?instruction, "applying instruction");
        match instruction.action {
            Action::Create => self.create(instruction).await,
            Action::Process => {
                let mut payment = self.load(instruction.id).await?;
                let result = self.service.process_payment(&mut payment);
                // A processor failure happens after the move to InProgress, which must stick.
                if matches!(result, Ok(_) | Err(PaymentError::Processor(_))) {
                    self.store.store(payment.clone()).await?;
                }
                let outcome = result?;
                debug!(reference = %outcome.reference, success = outcome.success, "processor outcome");
                Ok(payment)
            }
            Action::Confirm => {
                let mut payment = self.load(instruction.id).await?;
                self.service.confirm_payment(&mut payment)?;
                self.store.store(payment.clone()).await?;
                Ok(payment)
            }
            Action::Cancel => {
                let mut payment = self.load(instruction.id).await?;
                self.service.cancel_payment(&mut payment)?;
                self.store.store(payment.clone()).await?;
                Ok(payment)
            }
        }
    }

    /// Consumes the runner and returns every payment in the store.
    pub async fn into_results(self) -> Result<Vec<Payment>> {
        self.store.all_payments().await
    }

    async fn create(&mut self, instruction: Instruction) -> Result<Payment> {
        let Entry::Vacant(slot) = self.labels.entry(instruction.id) else {
            return Err(PaymentError::DuplicateLabel(instruction.id));
        };
        let amount = instruction
            .amount
            .as_deref()
            .ok_or(PaymentError::MissingField("amount"))?;
        let method = instruction.method.as_deref().unwrap_or(DEFAULT_METHOD);

        let payment = self.service.create_payment_from_str(amount, method)?;
        self.store.store(payment.clone()).await?;
        slot.insert(payment.reference());
        Ok(payment)
    }

    async fn load(&self, label: u32) -> Result<Payment> {
        let reference = self
            .labels
            .get(&label)
            .ok_or(PaymentError::UnknownPayment(label))?;
        self.store
            .get(*reference)
            .await?
            .ok_or(PaymentError::UnknownPayment(label))
    }
}
