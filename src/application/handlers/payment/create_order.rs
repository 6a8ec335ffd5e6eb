//! CreateOrderHandler - command handler for gateway order creation.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::payment::{OrderAmount, PaymentError, ReceiptGenerator};
use crate::ports::{
    CreateOrder, GatewayError, GatewayOrder, OrderRecord, PaymentGateway, PaymentStore,
};

/// Command to create an order with the payment processor.
///
/// Fields arrive unvalidated from the HTTP layer; `amount` stays a raw JSON
/// value so numeric strings can be accepted and missing fields reported
/// separately from malformed ones.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub amount: Option<serde_json::Value>,
    pub currency: Option<String>,
}

/// Failures while creating an order.
#[derive(Debug, Error)]
pub enum CreateOrderError {
    #[error(transparent)]
    Validation(#[from] PaymentError),

    #[error("gateway order creation failed: {0}")]
    Gateway(#[from] GatewayError),
}

/// Handler for creating gateway orders.
///
/// Validates input, converts the amount to minor units, attaches a receipt,
/// makes a single attempt against the processor, and hands the result to the
/// payment store.
pub struct CreateOrderHandler {
    gateway: Arc<dyn PaymentGateway>,
    store: Arc<dyn PaymentStore>,
    receipts: Arc<ReceiptGenerator>,
}

impl CreateOrderHandler {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        store: Arc<dyn PaymentStore>,
        receipts: Arc<ReceiptGenerator>,
    ) -> Self {
        Self {
            gateway,
            store,
            receipts,
        }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<GatewayOrder, CreateOrderError> {
        // 1. Both fields must be present before anything else
        let amount_value = match cmd.amount {
            Some(value) if !value.is_null() => value,
            _ => return Err(PaymentError::MissingOrderFields.into()),
        };
        let currency = match cmd.currency {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Err(PaymentError::MissingOrderFields.into()),
        };

        // 2. Amount must be a finite positive number
        let amount = OrderAmount::parse(&amount_value)?;

        // 3. Convert to minor units and attach a receipt
        let request = CreateOrder {
            amount_minor: amount.minor_units(),
            currency,
            receipt: self.receipts.next_receipt(),
        };

        // 4. Single attempt against the processor; no retries
        let order = match self.gateway.create_order(request.clone()).await {
            Ok(order) => order,
            Err(e) => {
                tracing::error!(error = %e, receipt = %request.receipt, "order creation failed");
                return Err(e.into());
            }
        };

        tracing::info!(order_id = %order.id, receipt = %request.receipt, "order created");

        // 5. Hand the record to the external store; a store failure must not
        //    undo an order the processor has already accepted
        let record = OrderRecord {
            order_id: order.id.clone(),
            receipt: request.receipt,
            amount_minor: request.amount_minor,
            currency: request.currency,
            created_at: chrono::Utc::now(),
        };
        if let Err(e) = self.store.record_order(record).await {
            tracing::warn!(error = %e, "failed to record created order");
        }

        Ok(order)
    }
}
