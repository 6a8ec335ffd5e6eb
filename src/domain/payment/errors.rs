//! Payment validation errors.

use thiserror::Error;

/// Validation failures for payment operations.
///
/// These are client input errors; none of them reach the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Order creation is missing `amount` or `currency`.
    #[error("amount and currency are required")]
    MissingOrderFields,

    /// `amount` does not parse to a finite positive number.
    #[error("amount must be a valid number")]
    InvalidAmount,

    /// Verification is missing one of the order/payment/signature fields.
    #[error("missing payment verification fields")]
    MissingVerificationFields,

    /// The supplied signature does not match the computed digest.
    #[error("payment signature mismatch")]
    VerificationFailed,
}
