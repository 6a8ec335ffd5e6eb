//! HTTP handlers for the payment endpoints.
//!
//! These handlers connect axum routes to the application layer command
//! handlers and map failures to the exact status/message contract of the
//! API.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payment::{
    CreateOrderCommand, CreateOrderError, CreateOrderHandler, VerifyPaymentCommand,
    VerifyPaymentError, VerifyPaymentHandler,
};
use crate::domain::payment::{PaymentError, ReceiptGenerator, SignatureVerifier};
use crate::ports::{PaymentGateway, PaymentStore};

use super::dto::{CreateOrderBody, MessageResponse, OrderCreatedResponse, VerifyPaymentBody};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped
/// dependencies for efficient sharing across handlers.
#[derive(Clone)]
pub struct PaymentAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub store: Arc<dyn PaymentStore>,
    pub verifier: Arc<SignatureVerifier>,
    pub receipts: Arc<ReceiptGenerator>,
}

impl PaymentAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(
            self.gateway.clone(),
            self.store.clone(),
            self.receipts.clone(),
        )
    }

    pub fn verify_payment_handler(&self) -> VerifyPaymentHandler {
        VerifyPaymentHandler::new(self.verifier.clone(), self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /create-order - create an order with the payment processor
pub async fn create_order(
    State(state): State<PaymentAppState>,
    payload: Result<Json<CreateOrderBody>, JsonRejection>,
) -> Result<impl IntoResponse, PaymentApiError> {
    // A body that does not decode is a client input error
    let Json(body) = payload.map_err(|_| PaymentApiError::OrderFieldsMissing)?;

    let handler = state.create_order_handler();
    let command = CreateOrderCommand {
        amount: body.amount,
        currency: body.currency,
    };

    let order = handler.handle(command).await?;

    Ok(Json(OrderCreatedResponse::new(order)))
}

/// POST /verify-payment - verify a payment signature
pub async fn verify_payment(
    State(state): State<PaymentAppState>,
    payload: Result<Json<VerifyPaymentBody>, JsonRejection>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let Json(body) = payload.map_err(|_| PaymentApiError::VerificationFieldsMissing)?;

    let handler = state.verify_payment_handler();
    let command = VerifyPaymentCommand {
        order_id: body.razorpay_order_id,
        payment_id: body.razorpay_payment_id,
        signature: body.razorpay_signature,
    };

    handler.handle(command).await?;

    Ok(Json(MessageResponse::success("Payment verified successfully")))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Mapping
// ════════════════════════════════════════════════════════════════════════════════

/// API error carrying the exact status/message contract of the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentApiError {
    OrderFieldsMissing,
    AmountInvalid,
    OrderCreationFailed,
    VerificationFieldsMissing,
    VerificationMismatch,
    VerificationInternal,
}

impl PaymentApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            PaymentApiError::OrderFieldsMissing
            | PaymentApiError::AmountInvalid
            | PaymentApiError::VerificationFieldsMissing
            | PaymentApiError::VerificationMismatch => StatusCode::BAD_REQUEST,
            PaymentApiError::OrderCreationFailed | PaymentApiError::VerificationInternal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PaymentApiError::OrderFieldsMissing => "Amount and currency are required",
            PaymentApiError::AmountInvalid => "Amount must be a valid number",
            PaymentApiError::OrderCreationFailed => "Unable to create order",
            PaymentApiError::VerificationFieldsMissing => "Invalid payment details",
            PaymentApiError::VerificationMismatch => "Payment verification failed",
            PaymentApiError::VerificationInternal => "Server error in payment verification",
        }
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(MessageResponse::failure(self.message()))).into_response()
    }
}

impl From<CreateOrderError> for PaymentApiError {
    fn from(err: CreateOrderError) -> Self {
        match err {
            CreateOrderError::Validation(PaymentError::MissingOrderFields) => {
                PaymentApiError::OrderFieldsMissing
            }
            CreateOrderError::Validation(_) => PaymentApiError::AmountInvalid,
            CreateOrderError::Gateway(_) => PaymentApiError::OrderCreationFailed,
        }
    }
}

impl From<VerifyPaymentError> for PaymentApiError {
    fn from(err: VerifyPaymentError) -> Self {
        match err {
            VerifyPaymentError::Validation(PaymentError::VerificationFailed) => {
                PaymentApiError::VerificationMismatch
            }
            VerifyPaymentError::Validation(_) => PaymentApiError::VerificationFieldsMissing,
            VerifyPaymentError::Internal(_) => PaymentApiError::VerificationInternal,
        }
    }
}
