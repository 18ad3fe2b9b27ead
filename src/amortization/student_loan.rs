//! Student loan calculator: plan-driven terms, graduated payment ramp, and
//! capitalization of unpaid interest
//!
//! Graduated and income-driven payments may not cover accrued interest in
//! early months; the shortfall is added to the balance (negative
//! amortization) instead of letting principal go the wrong way.

use super::schedule::{LoanCalculationResult, MonthlyEvent};
use super::BALANCE_EPSILON;
use crate::loan::{LoanEntry, RepaymentPlan, StudentLoanTerms};
use crate::rates::{amortization_payment, monthly_rate};

/// Buffer past the nominal term, since ramped or low payments may not fully
/// amortize within it
const TERM_BUFFER_MONTHS: u32 = 60;

/// Graduated plan ramp: start at 75% of the standard payment, step up 5% of
/// standard every 24 months, capped at 150%
fn graduated_factor(month: u32) -> f64 {
    let steps = (month - 1) / 24;
    (0.75 + 0.05 * steps as f64).min(1.50)
}

/// Scheduled payment for a month under the given plan
fn scheduled_payment(plan: RepaymentPlan, standard_payment: f64, month: u32) -> f64 {
    match plan {
        RepaymentPlan::Graduated => standard_payment * graduated_factor(month),
        _ => standard_payment,
    }
}

/// Simulate a student loan under its repayment plan
pub fn calculate(entry: &LoanEntry, terms: &StudentLoanTerms) -> LoanCalculationResult {
    let rate = monthly_rate(terms.interest_rate);
    let term_months = terms.repayment_plan.term_months();
    let standard_payment = amortization_payment(entry.balance, rate, term_months);

    // A caller-specified payment overrides the plan schedule entirely
    let override_payment = entry.configured_payment();

    let mut result = LoanCalculationResult::new(
        &entry.id,
        &entry.name,
        entry.terms.kind(),
        entry.balance,
        terms.interest_rate,
        override_payment.unwrap_or(standard_payment),
    );

    let cap = term_months + TERM_BUFFER_MONTHS;
    let mut balance = entry.balance;
    let mut month = 0u32;

    while balance > BALANCE_EPSILON && month < cap {
        month += 1;

        let start_balance = balance;
        let interest = balance * rate;

        let scheduled = override_payment
            .unwrap_or_else(|| scheduled_payment(terms.repayment_plan, standard_payment, month));
        let payment = scheduled.min(balance + interest);

        let mut principal_paid = payment - interest;
        if principal_paid < 0.0 {
            // Payment under accrued interest: capitalize the shortfall
            balance += interest - payment;
            principal_paid = 0.0;
        } else {
            balance -= principal_paid;
        }

        let end_balance = balance.max(0.0);
        let mut event = MonthlyEvent::new(month, start_balance, interest, payment, end_balance);
        event.principal_paid = Some(principal_paid);
        event.total_payment = Some(payment);
        result.add_event(event);
    }

    if month == cap && balance > BALANCE_EPSILON {
        log::warn!(
            "student loan {} did not amortize within {} months; schedule truncated",
            entry.id,
            cap
        );
    }

    result
}
