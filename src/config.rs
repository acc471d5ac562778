use crate::domain::processor::ProcessorKind;
use tracing::warn;

/// Environment variable selecting the payment processor (`MOCK` or `REAL`).
pub const PROCESSOR_ENV_VAR: &str = "PAYMENT_PROCESSOR_TYPE";

/// Process-wide settings, built once at startup and passed down explicitly.
///
/// The binary reads [`PROCESSOR_ENV_VAR`] through its `clap` `env` binding and
/// hands the raw value to [`Settings::from_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub processor: ProcessorKind,
}

impl Settings {
    /// Builds settings from a raw processor setting.
    ///
    /// Absent or unrecognized values fall back to [`ProcessorKind::Mock`].
    pub fn from_value(value: Option<&str>) -> Self {
        Self {
            processor: processor_kind_from_setting(value),
        }
    }
}

pub(crate) fn processor_kind_from_setting(value: Option<&str>) -> ProcessorKind {
    match value.map(str::parse::<ProcessorKind>) {
        None => ProcessorKind::default(),
        Some(Ok(kind)) => kind,
        Some(Err(err)) => {
            warn!(%err, "falling back to {}", ProcessorKind::default());
            ProcessorKind::default()
        }
    }
}
