pub mod instruction_reader;
pub mod payment_writer;
