//! Payment Relay - minimal Razorpay backend shim.
//!
//! This crate exposes two HTTP endpoints: one creates an order with the
//! Razorpay API, the other verifies a payment signature with HMAC-SHA256.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
