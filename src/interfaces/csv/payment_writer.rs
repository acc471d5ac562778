use crate::domain::payment::{Payment, PaymentMethod, PaymentState};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct PaymentRow {
    reference: String,
    amount: Decimal,
    method: PaymentMethod,
    state: PaymentState,
}

impl From<&Payment> for PaymentRow {
    fn from(payment: &Payment) -> Self {
        Self {
            reference: payment.reference().to_string(),
            amount: payment.amount().value(),
            method: payment.method(),
            state: payment.state(),
        }
    }
}

/// Writes payments as CSV with the header `reference,amount,method,state`.
pub struct PaymentWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PaymentWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_payments<'a, I>(&mut self, payments: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Payment>,
    {
        let mut wrote_any = false;
        for payment in payments {
            self.writer.serialize(PaymentRow::from(payment))?;
            wrote_any = true;
        }
        if !wrote_any {
            self.writer
                .write_record(["reference", "amount", "method", "state"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
