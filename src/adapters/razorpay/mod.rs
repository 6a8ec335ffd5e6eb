//! Razorpay gateway adapter.

mod client;

pub use client::{RazorpayConfig, RazorpayGateway};
