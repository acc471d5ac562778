use super::payment::PaymentMethod;
use crate::error::UnknownProcessorKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which processor implementation handled (or will handle) a payment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessorKind {
    #[default]
    Mock,
    Real,
}

impl ProcessorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorKind::Mock => "MOCK",
            ProcessorKind::Real => "REAL",
        }
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProcessorKind {
    type Err = UnknownProcessorKind;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MOCK" => Ok(ProcessorKind::Mock),
            "REAL" => Ok(ProcessorKind::Real),
            _ => Err(UnknownProcessorKind(s.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum GatewayStatus {
    Simulated,
    Approved,
}

/// What a processor reports back after handling a payment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ProcessorOutcome {
    pub processor: ProcessorKind,
    pub success: bool,
    /// Gateway transaction id, e.g. `MOCK-<payment reference>`.
    pub reference: String,
    pub status: GatewayStatus,
    pub method: PaymentMethod,
    pub message: String,
    pub processed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("MOCK".parse::<ProcessorKind>(), Ok(ProcessorKind::Mock));
        assert_eq!("mock".parse::<ProcessorKind>(), Ok(ProcessorKind::Mock));
        assert_eq!("Real".parse::<ProcessorKind>(), Ok(ProcessorKind::Real));
        assert_eq!(" real ".parse::<ProcessorKind>(), Ok(ProcessorKind::Real));
        assert_eq!(
            "stripe".parse::<ProcessorKind>(),
            Err(UnknownProcessorKind("stripe".to_string()))
        );
    }

    #[test]
    fn test_kind_defaults_to_mock() {
        assert_eq!(ProcessorKind::default(), ProcessorKind::Mock);
    }
}
