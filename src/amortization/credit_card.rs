//! Credit card calculator: daily compounding, interest-then-payment
//!
//! The only calculator that does not accrue on a monthly rate. Each month it
//! simulates 30 days of daily compounding, folds the accrued interest into
//! the balance, and then applies the payment.

use super::schedule::{LoanCalculationResult, MonthlyEvent};
use super::{BALANCE_EPSILON, MAX_MONTHS};
use crate::loan::{CreditCardTerms, LoanEntry};
use crate::rates::daily_rate;

const DAYS_PER_MONTH: u32 = 30;

/// Minimum payment: a percentage of the balance with a dollar floor
pub fn minimum_payment(balance: f64, terms: &CreditCardTerms) -> f64 {
    (balance * terms.minimum_payment_percent / 100.0).max(terms.minimum_payment_floor)
}

/// Simulate the card's payoff schedule
///
/// The minimum payment is computed once from the current balance and held
/// constant for the life of the run. Real issuers recompute it monthly; the
/// constant-minimum model is the documented behavior here, not a bug.
pub fn calculate(entry: &LoanEntry, terms: &CreditCardTerms) -> LoanCalculationResult {
    let minimum = minimum_payment(entry.balance, terms);
    let payment_amount = entry.configured_payment().unwrap_or(minimum);

    let mut result = LoanCalculationResult::new(
        &entry.id,
        &entry.name,
        entry.terms.kind(),
        entry.balance,
        terms.apr,
        payment_amount,
    );
    result.minimum_payment = Some(minimum);

    let rate = daily_rate(terms.apr);
    let mut balance = entry.balance;
    let mut month = 0u32;

    while balance > BALANCE_EPSILON && month < MAX_MONTHS {
        month += 1;

        let start_balance = balance;

        // 30 days of daily compounding; interest lands in the balance
        // before the payment is applied
        let mut month_interest = 0.0;
        for _day in 0..DAYS_PER_MONTH {
            let day_interest = balance * rate;
            balance += day_interest;
            month_interest += day_interest;
        }

        let payment = payment_amount.min(balance);
        balance -= payment;

        let end_balance = balance.max(0.0);
        let mut event = MonthlyEvent::new(month, start_balance, month_interest, payment, end_balance);
        event.total_payment = Some(payment);
        result.add_event(event);
    }

    if month == MAX_MONTHS && balance > BALANCE_EPSILON {
        log::warn!(
            "credit card {} did not amortize within {} months; schedule truncated",
            entry.id,
            MAX_MONTHS
        );
    }

    result
}
