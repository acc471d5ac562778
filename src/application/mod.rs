//! Application layer containing the payment orchestration.
//!
//! `PaymentService` is the entry point for lifecycle operations and
//! `ProcessorFactory` picks its processor. `BatchRunner` drives instruction
//! records through the service and persists the results.

pub mod batch;
pub mod factory;
pub mod service;
