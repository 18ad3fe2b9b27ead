//! Personal loan calculator: monthly simple interest, interest-then-payment

use super::schedule::{LoanCalculationResult, MonthlyEvent};
use super::{BALANCE_EPSILON, MAX_MONTHS};
use crate::loan::{LoanEntry, PersonalLoanTerms};
use crate::rates::{amortization_payment, monthly_rate};

/// Simulate a fixed-term personal loan
///
/// When no payment is configured, the standard amortization payment over the
/// term is derived. The origination fee is informational and never touches
/// the balance.
pub fn calculate(entry: &LoanEntry, terms: &PersonalLoanTerms) -> LoanCalculationResult {
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
    let mut month = 0u32;

    while balance > BALANCE_EPSILON && month < cap {
        month += 1;

        let start_balance = balance;
        let interest = balance * rate;

        // Cap the final payment so it cannot overshoot balance plus interest
        let payment = payment_amount.min(balance + interest);
        let principal_paid = payment - interest;
        balance -= principal_paid;

        let end_balance = balance.max(0.0);
        let mut event = MonthlyEvent::new(month, start_balance, interest, payment, end_balance);
        event.principal_paid = Some(principal_paid);
        event.total_payment = Some(payment);
        result.add_event(event);
    }

    result
}
