//! Storage adapters for the payment store port.

mod in_memory;

pub use in_memory::{InMemoryPaymentStore, NoopPaymentStore};
