use super::amount::Amount;
use crate::error::{InvalidTransitionError, Violation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique transaction reference of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Transfer,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Transfer,
        PaymentMethod::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Violation::UnknownMethod(s.to_string()))
    }
}

/// Lifecycle state of a payment.
///
/// ```text
/// Created -> InProgress -> Confirmed
///                      \-> Cancelled
/// ```
/// `Confirmed` and `Cancelled` are terminal.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    #[default]
    Created,
    InProgress,
    Confirmed,
    Cancelled,
}

impl PaymentState {
    pub fn allowed_transitions(&self) -> &'static [PaymentState] {
        match self {
            PaymentState::Created => &[PaymentState::InProgress],
            PaymentState::InProgress => &[PaymentState::Confirmed, PaymentState::Cancelled],
            PaymentState::Confirmed | PaymentState::Cancelled => &[],
        }
    }

    #[inline]
    pub fn can_transition_to(&self, target: PaymentState) -> bool {
        self.allowed_transitions().contains(&target)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentState::Created => "created",
            PaymentState::InProgress => "in_progress",
            PaymentState::Confirmed => "confirmed",
            PaymentState::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentState::Created => "Created",
            PaymentState::InProgress => "In Progress",
            PaymentState::Confirmed => "Confirmed",
            PaymentState::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for PaymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single payment attempt and its lifecycle state.
///
/// Instances are only produced by `PaymentBuilder` (or deserialized from a
/// store), so every `Payment` in hand is valid. The state only moves through
/// [`Payment::transition_to`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    reference: PaymentId,
    amount: Amount,
    method: PaymentMethod,
    state: PaymentState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Payment {
    pub(crate) fn new(amount: Amount, method: PaymentMethod) -> Self {
        let now = Utc::now();
        Self {
            reference: PaymentId::new(),
            amount,
            method,
            state: PaymentState::Created,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn reference(&self) -> PaymentId {
        self.reference
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn state(&self) -> PaymentState {
        self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the last state transition (or creation).
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_confirmed(&self) -> bool {
        self.state == PaymentState::Confirmed
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Listing order: newest `created_at` first, then ascending reference.
    pub fn cmp_newest_first(&self, other: &Payment) -> Ordering {
        other
            .created_at
            .cmp(&self.created_at)
            .then_with(|| self.reference.cmp(&other.reference))
    }

    /// Moves the payment to `target` if the lifecycle allows it.
    ///
    /// On error the payment is left untouched.
    pub fn transition_to(&mut self, target: PaymentState) -> Result<(), InvalidTransitionError> {
        if !self.state.can_transition_to(target) {
            return Err(InvalidTransitionError {
                from: self.state,
                to: target,
            });
        }
        self.state = target;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment {} - ${} ({})",
            self.reference,
            self.amount,
            self.state.label()
        )
    }
}
