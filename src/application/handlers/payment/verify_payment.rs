//! VerifyPaymentHandler - command handler for payment signature verification.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::payment::{PaymentError, SignatureVerifier};
use crate::ports::{PaymentStore, VerificationRecord};

/// Command to verify a payment signature.
#[derive(Debug, Clone)]
pub struct VerifyPaymentCommand {
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub signature: Option<String>,
}

/// Failures while verifying a payment.
#[derive(Debug, Error)]
pub enum VerifyPaymentError {
    /// Missing fields or a signature mismatch.
    #[error(transparent)]
    Validation(#[from] PaymentError),

    /// Unexpected internal failure.
    #[error("verification failed internally: {0}")]
    Internal(String),
}

/// Handler for verifying payment signatures.
pub struct VerifyPaymentHandler {
    verifier: Arc<SignatureVerifier>,
    store: Arc<dyn PaymentStore>,
}

impl VerifyPaymentHandler {
    pub fn new(verifier: Arc<SignatureVerifier>, store: Arc<dyn PaymentStore>) -> Self {
        Self { verifier, store }
    }

    pub async fn handle(&self, cmd: VerifyPaymentCommand) -> Result<(), VerifyPaymentError> {
        // 1. All three fields must be present and non-empty
        let order_id =
            non_empty(cmd.order_id).ok_or(PaymentError::MissingVerificationFields)?;
        let payment_id =
            non_empty(cmd.payment_id).ok_or(PaymentError::MissingVerificationFields)?;
        let signature =
            non_empty(cmd.signature).ok_or(PaymentError::MissingVerificationFields)?;

        // 2. Constant-time digest comparison
        let verified = self.verifier.verify(&order_id, &payment_id, &signature);

        // 3. Record the outcome; the store is advisory and cannot change the
        //    verdict
        let record = VerificationRecord {
            order_id: order_id.clone(),
            payment_id: payment_id.clone(),
            verified,
            occurred_at: chrono::Utc::now(),
        };
        if let Err(e) = self.store.record_verification(record).await {
            tracing::warn!(error = %e, "failed to record verification outcome");
        }

        if verified {
            tracing::info!(order_id = %order_id, payment_id = %payment_id, "payment verified");
            Ok(())
        } else {
            tracing::warn!(order_id = %order_id, payment_id = %payment_id, "payment verification failed");
            Err(PaymentError::VerificationFailed.into())
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
