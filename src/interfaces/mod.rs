//! Presentation adapters. The batch CLI speaks CSV.

pub mod csv;
