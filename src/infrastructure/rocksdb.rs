use crate::domain::payment::{Payment, PaymentId};
use crate::domain::ports::PaymentStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing payment records.
pub const CF_PAYMENTS: &str = "payments";

/// A persistent payment store backed by RocksDB.
///
/// Records live in the `payments` column family, keyed by the 16 raw bytes of
/// the payment reference, with the JSON-encoded `Payment` as value.
///
/// `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDbPaymentStore {
    db: Arc<DB>,
}

impl RocksDbPaymentStore {
    /// Opens or creates a RocksDB instance at `path`, creating the `payments`
    /// column family if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_payments = ColumnFamilyDescriptor::new(CF_PAYMENTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_payments])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn payments_cf(&self) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(CF_PAYMENTS)
            .ok_or_else(|| PaymentError::Storage("payments column family not found".to_string()))
    }
}

fn decode(bytes: &[u8]) -> Result<Payment> {
    serde_json::from_slice(bytes)
        .map_err(|e| PaymentError::Storage(format!("failed to deserialize payment: {e}")))
}

#[async_trait]
impl PaymentStore for RocksDbPaymentStore {
    async fn store(&self, payment: Payment) -> Result<()> {
        let cf = self.payments_cf()?;
        let value = serde_json::to_vec(&payment)
            .map_err(|e| PaymentError::Storage(format!("failed to serialize payment: {e}")))?;
        self.db.put_cf(cf, payment.reference().as_bytes(), value)?;
        Ok(())
    }

    async fn get(&self, reference: PaymentId) -> Result<Option<Payment>> {
        let cf = self.payments_cf()?;
        match self.db.get_cf(cf, reference.as_bytes())? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn all_payments(&self) -> Result<Vec<Payment>> {
        let cf = self.payments_cf()?;
        let mut payments = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            payments.push(decode(&value)?);
        }
        payments.sort_by(Payment::cmp_newest_first);
        Ok(payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::PaymentBuilder;
    use crate::domain::payment::PaymentState;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDbPaymentStore::open(dir.path()).expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_PAYMENTS).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_payment_store() {
        let dir = tempdir().unwrap();
        let store = RocksDbPaymentStore::open(dir.path()).unwrap();

        let mut payment = PaymentBuilder::new()
            .with_amount(dec!(150.00))
            .with_method("transfer")
            .build()
            .unwrap();
        payment.transition_to(PaymentState::InProgress).unwrap();

        store.store(payment.clone()).await.unwrap();

        let retrieved = store.get(payment.reference()).await.unwrap().unwrap();
        assert_eq!(retrieved, payment);

        let all = store.all_payments().await.unwrap();
        assert_eq!(all, vec![payment]);

        assert!(store.get(PaymentId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rocksdb_ties_ordered_by_reference() {
        let dir = tempdir().unwrap();
        let store = RocksDbPaymentStore::open(dir.path()).unwrap();

        let anchor = PaymentBuilder::new()
            .with_amount(dec!(1))
            .with_method("card")
            .build()
            .unwrap();
        let mut value = serde_json::to_value(&anchor).unwrap();
        value["reference"] = serde_json::to_value(PaymentId::new()).unwrap();
        let twin: Payment = serde_json::from_value(value).unwrap();

        store.store(anchor.clone()).await.unwrap();
        store.store(twin.clone()).await.unwrap();

        let mut expected = vec![anchor, twin];
        expected.sort_by_key(|p| p.reference());
        assert_eq!(store.all_payments().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_rocksdb_reopen_keeps_payments() {
        let dir = tempdir().unwrap();
        let payment = PaymentBuilder::new()
            .with_amount(dec!(7))
            .with_method("cash")
            .build()
            .unwrap();

        {
            let store = RocksDbPaymentStore::open(dir.path()).unwrap();
            store.store(payment.clone()).await.unwrap();
        }

        let reopened = RocksDbPaymentStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get(payment.reference()).await.unwrap(),
            Some(payment)
        );
    }
}
