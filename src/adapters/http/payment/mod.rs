//! Payment HTTP adapter - routes, handlers, and DTOs.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::MessageResponse;
pub use handlers::{PaymentApiError, PaymentAppState};
pub use routes::payment_routes;
