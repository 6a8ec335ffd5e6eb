//! In-memory payment store.
//!
//! Keeps order and verification records in process memory. Suitable for
//! development, testing, and single-server deployments that have not yet
//! attached a real database; records are lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{OrderRecord, PaymentStore, StoreError, VerificationRecord};

/// Payment store that keeps records in process memory.
#[derive(Debug, Default)]
pub struct InMemoryPaymentStore {
    orders: RwLock<Vec<OrderRecord>>,
    verifications: RwLock<Vec<VerificationRecord>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded orders.
    pub async fn orders(&self) -> Vec<OrderRecord> {
        self.orders.read().await.clone()
    }

    /// Snapshot of recorded verification outcomes.
    pub async fn verifications(&self) -> Vec<VerificationRecord> {
        self.verifications.read().await.clone()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn record_order(&self, record: OrderRecord) -> Result<(), StoreError> {
        self.orders.write().await.push(record);
        Ok(())
    }

    async fn record_verification(&self, record: VerificationRecord) -> Result<(), StoreError> {
        self.verifications.write().await.push(record);
        Ok(())
    }
}

/// Payment store that discards everything.
///
/// Stands in where no external database has been supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPaymentStore;

#[async_trait]
impl PaymentStore for NoopPaymentStore {
    async fn record_order(&self, _record: OrderRecord) -> Result<(), StoreError> {
        Ok(())
    }

    async fn record_verification(&self, _record: VerificationRecord) -> Result<(), StoreError> {
        Ok(())
    }
}
