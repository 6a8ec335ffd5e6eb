//! Receipt identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generates receipt identifiers for gateway orders.
///
/// A receipt combines the current unix-millisecond timestamp with a
/// process-wide monotonic counter, so concurrent calls within the same
/// millisecond still produce distinct identifiers.
#[derive(Debug, Default)]
pub struct ReceiptGenerator {
    sequence: AtomicU64,
}

impl ReceiptGenerator {
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
        }
    }

    /// Produce the next receipt identifier.
    pub fn next_receipt(&self) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("receipt_order_{}_{}", millis, seq)
    }
}
