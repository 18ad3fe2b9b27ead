//! Error types for loan calculations and portfolio loading

use thiserror::Error;

/// Errors produced by the calculators, the strategy simulator, and the loaders
#[derive(Debug, Error)]
pub enum CalcError {
    /// A caller-supplied value failed validation before simulation started
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Payment does not cover the first month's interest, so the loan can
    /// never amortize. Carries the minimum payment that would work.
    #[error("Monthly payment must exceed monthly interest (${minimum:.2}) to pay off loan")]
    PaymentTooLow { minimum: f64 },

    /// Portfolio-level calculation was requested with no loans
    #[error("No loans provided")]
    EmptyPortfolio,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Shorthand for the common invalid-input case
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_too_low_message_includes_minimum() {
        let err = CalcError::PaymentTooLow { minimum: 158.25 };
        let msg = err.to_string();
        assert!(msg.contains("$158.25"), "message was: {}", msg);
    }

    #[test]
    fn test_invalid_input_message() {
        let err = CalcError::invalid("principal", "must be positive");
        assert_eq!(err.to_string(), "Invalid input: principal: must be positive");
    }
}
