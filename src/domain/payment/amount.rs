//! Order amount parsing and minor-unit conversion.

use serde_json::Value;

use super::errors::PaymentError;

/// A validated order amount in major currency units.
///
/// Amounts arrive as JSON numbers or numeric strings and must be finite and
/// positive. Conversion to the gateway's representation assumes a currency
/// with exactly two minor-unit decimal digits (paise for INR, cents for USD).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderAmount(f64);

impl OrderAmount {
    /// Parse an amount from a raw JSON value.
    ///
    /// Accepts a JSON number or a string containing one. Anything that does
    /// not resolve to a finite positive number is rejected.
    pub fn parse(value: &Value) -> Result<Self, PaymentError> {
        let amount = match value {
            Value::Number(n) => n.as_f64().ok_or(PaymentError::InvalidAmount)?,
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| PaymentError::InvalidAmount)?,
            _ => return Err(PaymentError::InvalidAmount),
        };

        if !amount.is_finite() || amount <= 0.0 {
            return Err(PaymentError::InvalidAmount);
        }

        Ok(Self(amount))
    }

    /// The amount in major units.
    pub fn major_units(&self) -> f64 {
        self.0
    }

    /// The amount in the gateway's minor units.
    pub fn minor_units(&self) -> i64 {
        (self.0 * 100.0).round() as i64
    }
}
