//! Auto loan calculator: simple-interest amortization plus a parallel
//! vehicle depreciation track
//!
//! The depreciation schedule is independent of the loan balance; it only
//! produces the terminal vehicle value so callers can show equity vs. loan.

use super::schedule::{LoanCalculationResult, MonthlyEvent};
use super::{BALANCE_EPSILON, MAX_MONTHS};
use crate::loan::{AutoLoanTerms, LoanEntry};
use crate::rates::{amortization_payment, monthly_rate};

/// Annual depreciation rate, with the extra first-year bonus applied for
/// months 1-12
fn depreciation_rate(terms: &AutoLoanTerms, month: u32) -> f64 {
    let (annual, first_year_bonus) = if terms.is_used {
        (0.10, 0.05)
    } else {
        (0.15, 0.10)
    };
    if month <= 12 {
        annual + first_year_bonus
    } else {
        annual
    }
}

/// Simulate an auto loan and the vehicle's depreciation over the same months
pub fn calculate(entry: &LoanEntry, terms: &AutoLoanTerms) -> LoanCalculationResult {
    let rate = monthly_rate(terms.interest_rate);
    let payment_amount = entry
        .configured_payment()
        .unwrap_or_else(|| amortization_payment(entry.balance, rate, terms.term_months));

    let mut result = LoanCalculationResult::new(
        &entry.id,
        &entry.name,
        entry.terms.kind(),
        entry.balance,
        terms.interest_rate,
        payment_amount,
    );

    let cap = if terms.term_months > 0 {
        terms.term_months
    } else {
        MAX_MONTHS
    };

    let mut balance = entry.balance;
    let mut vehicle_value = terms.vehicle_price;
    let mut month = 0u32;

    while balance > BALANCE_EPSILON && month < cap {
        month += 1;

        let start_balance = balance;
        let interest = balance * rate;
        let payment = payment_amount.min(balance + interest);
        let principal_paid = payment - interest;
        balance -= principal_paid;

        // Depreciation runs alongside the loan, multiplicative monthly
        vehicle_value -= vehicle_value * depreciation_rate(terms, month) / 12.0;
        vehicle_value = vehicle_value.max(0.0);

        let end_balance = balance.max(0.0);
        let mut event = MonthlyEvent::new(month, start_balance, interest, payment, end_balance);
        event.principal_paid = Some(principal_paid);
        event.total_payment = Some(payment);
        result.add_event(event);
    }

    result.vehicle_value = Some(vehicle_value);
    result
}
