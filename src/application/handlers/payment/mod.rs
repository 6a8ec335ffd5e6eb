//! Payment command handlers.

mod create_order;
mod verify_payment;

pub use create_order::{CreateOrderCommand, CreateOrderError, CreateOrderHandler};
pub use verify_payment::{VerifyPaymentCommand, VerifyPaymentError, VerifyPaymentHandler};
