use crate::config::{Settings, processor_kind_from_setting};
use crate::domain::ports::ProcessorBox;
use crate::domain::processor::ProcessorKind;
use crate::infrastructure::processors::{MockProcessor, RealProcessor};
use tracing::info;

/// Chooses the payment processor implementation for the configured environment.
///
/// The factory only remembers which [`ProcessorKind`] it was configured with;
/// it never reads the environment itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessorFactory {
    kind: ProcessorKind,
}

impl ProcessorFactory {
    pub fn new(kind: ProcessorKind) -> Self {
        Self { kind }
    }

    /// Configures the factory from a raw `PAYMENT_PROCESSOR_TYPE` value.
    pub fn from_setting(value: Option<&str>) -> Self {
        Self::new(processor_kind_from_setting(value))
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.processor)
    }

    pub fn kind(&self) -> ProcessorKind {
        self.kind
    }

    /// Returns the processor matching the configured kind.
    pub fn create(&self) -> ProcessorBox {
        match self.kind {
            ProcessorKind::Real => {
                info!("factory: creating RealProcessor (production)");
                Box::new(Self::create_real())
            }
            ProcessorKind::Mock => {
                info!("factory: creating MockProcessor (development)");
                Box::new(Self::create_mock())
            }
        }
    }

    pub fn create_mock() -> MockProcessor {
        MockProcessor::new()
    }

    pub fn create_real() -> RealProcessor {
        RealProcessor::new()
    }
}
