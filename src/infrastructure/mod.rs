//! Adapters for the domain ports: payment processors and payment stores.

pub mod in_memory;
pub mod processors;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
