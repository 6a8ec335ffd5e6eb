//! Domain layer - pure payment logic with no I/O.

pub mod payment;
