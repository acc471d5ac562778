use crate::domain::instruction::Instruction;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads payment instructions from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and accepting short records so
/// lifecycle rows can omit the trailing `amount, method` columns.
pub struct InstructionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InstructionReader<R> {
    /// Creates a new `InstructionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes instructions, one `Result` per record.
    pub fn instructions(self) -> impl Iterator<Item = Result<Instruction>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
