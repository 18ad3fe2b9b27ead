//! Single-loan calculator with payment-then-interest ordering
//!
//! This is the original fixed-payment amortization endpoint: the payment is
//! applied first (balance drops), then interest accrues on the reduced
//! balance (balance rises). The ordering matches the frontend's sawtooth
//! chart and its live what-if recompute, and must not be unified with the
//! interest-first calculators.

use super::schedule::MonthlyEvent;
use super::{BALANCE_EPSILON, MAX_MONTHS};
use crate::error::CalcError;
use crate::rates::monthly_rate;
use serde::{Deserialize, Serialize};

/// Request for the single-loan endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyLoanRequest {
    pub principal: f64,
    pub apr: f64,
    pub monthly_payment: f64,
}

/// Response for the single-loan endpoint (field names are frozen for the
/// existing frontend)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyLoanResult {
    pub principal: f64,
    pub apr: f64,
    pub monthly_payment: f64,
    pub events: Vec<MonthlyEvent>,
    pub total_months: u32,
    pub total_interest: f64,
}

fn validate(request: &LegacyLoanRequest) -> Result<(), CalcError> {
    if request.principal <= 0.0 {
        return Err(CalcError::invalid("principal", "must be positive"));
    }
    if request.apr < 0.0 || request.apr > 100.0 {
        return Err(CalcError::invalid("apr", "must be between 0 and 100"));
    }
    if request.monthly_payment <= 0.0 {
        return Err(CalcError::invalid("monthlyPayment", "must be positive"));
    }

    // Payment must cover at least the first month's interest or the loan
    // never pays off
    let first_month_interest = request.principal * monthly_rate(request.apr);
    if request.monthly_payment <= first_month_interest {
        return Err(CalcError::PaymentTooLow {
            minimum: (first_month_interest * 100.0).round() / 100.0,
        });
    }

    Ok(())
}

/// Run the payment-then-interest amortization loop
pub fn calculate(request: &LegacyLoanRequest) -> Result<LegacyLoanResult, CalcError> {
    validate(request)?;

    let mut result = LegacyLoanResult {
        principal: request.principal,
        apr: request.apr,
        monthly_payment: request.monthly_payment,
        events: Vec::new(),
        total_months: 0,
        total_interest: 0.0,
    };

    let rate = monthly_rate(request.apr);
    let mut balance = request.principal;
    let mut month = 0u32;

    while balance > BALANCE_EPSILON && month < MAX_MONTHS {
        month += 1;

        let start_balance = balance;

        // Payment first: final payment may be less than the full amount
        let payment = request.monthly_payment.min(balance);
        balance -= payment;

        // Then interest on the reduced balance
        let interest = balance * rate;
        result.total_interest += interest;
        balance += interest;

        let end_balance = balance.max(0.0);
        result
            .events
            .push(MonthlyEvent::new(month, start_balance, interest, payment, end_balance));
    }

    result.total_months = month;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_month_payment_first_ordering() {
        // 10000 at 18.99% with a 250 payment: the payment lands before
        // interest, so month 1 interest is 9750 * 0.015825, not 10000 * it.
        let request = LegacyLoanRequest {
            principal: 10_000.0,
            apr: 18.99,
            monthly_payment: 250.0,
        };
        let result = calculate(&request).unwrap();

        let first = &result.events[0];
        assert_eq!(first.month, 1);
        assert_relative_eq!(first.start_balance, 10_000.0);
        assert_relative_eq!(first.payment, 250.0);
        assert_relative_eq!(first.interest, 9_750.0 * 0.015825, epsilon = 1e-6);
        assert_relative_eq!(first.end_balance, 9_750.0 + 9_750.0 * 0.015825, epsilon = 1e-6);
    }

    #[test]
    fn test_total_interest_matches_event_sum() {
        let request = LegacyLoanRequest {
            principal: 5_000.0,
            apr: 12.0,
            monthly_payment: 200.0,
        };
        let result = calculate(&request).unwrap();

        let summed: f64 = result.events.iter().map(|e| e.interest).sum();
        assert_relative_eq!(summed, result.total_interest, epsilon = 1e-6);
        assert_eq!(result.total_months, result.events.len() as u32);
    }

    #[test]
    fn test_zero_apr_pays_off_in_exact_months() {
        let request = LegacyLoanRequest {
            principal: 1_000.0,
            apr: 0.0,
            monthly_payment: 300.0,
        };
        let result = calculate(&request).unwrap();

        // ceil(1000 / 300) = 4 months, last payment is the 100 remainder
        assert_eq!(result.total_months, 4);
        assert_relative_eq!(result.total_interest, 0.0);
        assert_relative_eq!(result.events[3].payment, 100.0, epsilon = 1e-9);
        assert_relative_eq!(result.events[3].end_balance, 0.0);
    }

    #[test]
    fn test_balance_never_negative() {
        let request = LegacyLoanRequest {
            principal: 777.0,
            apr: 9.5,
            monthly_payment: 123.0,
        };
        let result = calculate(&request).unwrap();
        for event in &result.events {
            assert!(event.end_balance >= 0.0);
        }
    }

    #[test]
    fn test_rejects_nonpositive_principal() {
        let request = LegacyLoanRequest {
            principal: 0.0,
            apr: 10.0,
            monthly_payment: 100.0,
        };
        assert!(calculate(&request).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_apr() {
        let request = LegacyLoanRequest {
            principal: 1_000.0,
            apr: 101.0,
            monthly_payment: 100.0,
        };
        assert!(calculate(&request).is_err());
    }

    #[test]
    fn test_rejects_payment_below_interest_with_minimum() {
        let request = LegacyLoanRequest {
            principal: 10_000.0,
            apr: 18.99,
            monthly_payment: 100.0,
        };
        match calculate(&request) {
            Err(CalcError::PaymentTooLow { minimum }) => {
                // First month interest is 10000 * 0.015825 = 158.25
                assert_relative_eq!(minimum, 158.25, epsilon = 0.01);
            }
            other => panic!("expected PaymentTooLow, got {:?}", other),
        }
    }
}
