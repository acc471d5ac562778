//! Domain layer: the payment entity, its lifecycle, and the ports the rest of
//! the crate plugs adapters into.

pub mod amount;
pub mod builder;
pub mod instruction;
pub mod payment;
pub mod ports;
pub mod processor;
