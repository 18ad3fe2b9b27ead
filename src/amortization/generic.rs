//! Fallback calculator for unrecognized loan types
//!
//! Same monthly loop and caps as the other installment calculators, but with
//! no term: it runs the caller's payment against simple monthly interest
//! until payoff or the 1200-month ceiling.

use super::schedule::{LoanCalculationResult, MonthlyEvent};
use super::{BALANCE_EPSILON, MAX_MONTHS};
use crate::error::CalcError;
use crate::loan::LoanEntry;
use crate::rates::monthly_rate;

/// Simulate an untyped loan with interest-then-payment ordering
///
/// There is no term to derive a payment from, so a configured payment is
/// required.
pub fn calculate(entry: &LoanEntry, interest_rate: f64) -> Result<LoanCalculationResult, CalcError> {
    let payment_amount = entry
        .configured_payment()
        .ok_or_else(|| CalcError::invalid("monthlyPayment", "required for untyped loans"))?;

    let mut result = LoanCalculationResult::new(
        &entry.id,
        &entry.name,
        entry.terms.kind(),
        entry.balance,
        interest_rate,
        payment_amount,
    );

    let rate = monthly_rate(interest_rate);
    let mut balance = entry.balance;
    let mut month = 0u32;

    while balance > BALANCE_EPSILON && month < MAX_MONTHS {
        month += 1;

        let start_balance = balance;
        let interest = balance * rate;
        let payment = payment_amount.min(balance + interest);
        let principal_paid = payment - interest;
        balance -= principal_paid;

        let end_balance = balance.max(0.0);
        let mut event = MonthlyEvent::new(month, start_balance, interest, payment, end_balance);
        event.principal_paid = Some(principal_paid);
        event.total_payment = Some(payment);
        result.add_event(event);
    }

    if month == MAX_MONTHS && balance > BALANCE_EPSILON {
        log::warn!(
            "loan {} ({}) did not amortize within {} months; schedule truncated",
            entry.id,
            entry.terms.kind(),
            MAX_MONTHS
        );
    }

    Ok(result)
}
