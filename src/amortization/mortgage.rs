//! Mortgage calculator: PITI with PMI cancellation and constant escrow
//!
//! PMI is charged only when the original loan-to-value exceeds 80%, on the
//! original balance, and drops permanently once current LTV reaches 78%
//! (automatic termination) or 80% after 24 months (borrower-requested
//! cancellation). Both checks run after the month's principal reduction.

use super::schedule::{LoanCalculationResult, MonthlyEvent};
use super::BALANCE_EPSILON;
use crate::error::CalcError;
use crate::loan::{LoanEntry, MortgageTerms};
use crate::rates::{amortization_payment, monthly_rate};

/// LTV at which PMI terminates automatically
const PMI_AUTO_TERMINATION_LTV: f64 = 0.78;
/// LTV at which the borrower may request cancellation
const PMI_REQUEST_LTV: f64 = 0.80;
/// Months of seasoning before requested cancellation is allowed
const PMI_REQUEST_MIN_MONTHS: u32 = 24;

/// Simulate a mortgage month by month
pub fn calculate(entry: &LoanEntry, terms: &MortgageTerms) -> Result<LoanCalculationResult, CalcError> {
    if terms.home_price <= 0.0 {
        return Err(CalcError::invalid("homePrice", "must be positive"));
    }

    let term_months = terms.term_years * 12;
    let rate = monthly_rate(terms.interest_rate);
    let pi_payment = entry
        .configured_payment()
        .unwrap_or_else(|| amortization_payment(entry.balance, rate, term_months));

    let escrow = if terms.include_escrow {
        terms.property_tax_annual / 12.0 + terms.home_insurance_annual / 12.0 + terms.hoa_monthly
    } else {
        0.0
    };

    // PMI on the original balance, only when the loan started above 80% LTV
    let original_ltv = entry.balance / terms.home_price;
    let monthly_pmi = if original_ltv > PMI_REQUEST_LTV && terms.pmi_rate > 0.0 {
        entry.balance * terms.pmi_rate / 100.0 / 12.0
    } else {
        0.0
    };
    let mut pmi_active = monthly_pmi > 0.0;

    let mut result = LoanCalculationResult::new(
        &entry.id,
        &entry.name,
        entry.terms.kind(),
        entry.balance,
        terms.interest_rate,
        pi_payment,
    );

    let mut balance = entry.balance;
    let mut month = 0u32;

    while balance > BALANCE_EPSILON && month < term_months {
        month += 1;

        let start_balance = balance;
        let interest = balance * rate;
        let payment = pi_payment.min(balance + interest);
        let principal_paid = payment - interest;
        balance -= principal_paid;

        // Cancellation checks run on the post-payment balance; once PMI is
        // off it stays off
        if pmi_active {
            let ltv = balance / terms.home_price;
            if ltv <= PMI_AUTO_TERMINATION_LTV
                || (ltv <= PMI_REQUEST_LTV && month >= PMI_REQUEST_MIN_MONTHS)
            {
                pmi_active = false;
            }
        }
        let pmi_payment = if pmi_active { monthly_pmi } else { 0.0 };

        let end_balance = balance.max(0.0);
        let mut event = MonthlyEvent::new(month, start_balance, interest, payment, end_balance);
        event.principal_paid = Some(principal_paid);
        event.pmi_payment = Some(pmi_payment);
        event.escrow_payment = Some(escrow);
        event.total_payment = Some(payment + pmi_payment + escrow);
        result.add_event(event);
    }

    let final_balance = result.events.last().map(|e| e.end_balance).unwrap_or(entry.balance);
    result.equity_percent = Some((terms.home_price - final_balance) / terms.home_price * 100.0);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::LoanTerms;
    use approx::assert_relative_eq;

    fn mortgage_entry(balance: f64, home_price: f64, pmi_rate: f64) -> (LoanEntry, MortgageTerms) {
        let terms = MortgageTerms {
            interest_rate: 6.0,
            term_years: 30,
            home_price,
            down_payment: home_price - balance,
            property_tax_annual: 3_600.0,
            home_insurance_annual: 1_200.0,
            pmi_rate,
            hoa_monthly: 50.0,
            include_escrow: true,
        };
        let entry = LoanEntry {
            id: "mtg".to_string(),
            name: "House".to_string(),
            balance,
            monthly_payment: None,
            terms: LoanTerms::Mortgage(terms.clone()),
        };
        (entry, terms)
    }

    #[test]
    fn test_escrow_constant_every_month() {
        let (entry, terms) = mortgage_entry(240_000.0, 300_000.0, 0.5);
        let result = calculate(&entry, &terms).unwrap();

        // 3600/12 + 1200/12 + 50 = 450
        for event in &result.events {
            assert_relative_eq!(event.escrow_payment.unwrap(), 450.0);
        }
    }

    #[test]
    fn test_no_pmi_at_80_percent_ltv_or_below() {
        // Exactly 80% LTV at origination: no PMI ever
        let (entry, terms) = mortgage_entry(240_000.0, 300_000.0, 0.5);
        let result = calculate(&entry, &terms).unwrap();
        for event in &result.events {
            assert_relative_eq!(event.pmi_payment.unwrap(), 0.0);
        }
    }

    #[test]
    fn test_pmi_charged_then_cancelled_permanently() {
        // 95% LTV at origination: PMI on the original balance until LTV
        // crosses the cancellation thresholds
        let (entry, terms) = mortgage_entry(285_000.0, 300_000.0, 0.5);
        let result = calculate(&entry, &terms).unwrap();

        let expected_pmi = 285_000.0 * 0.5 / 100.0 / 12.0;
        assert_relative_eq!(result.events[0].pmi_payment.unwrap(), expected_pmi);

        // Find the first zero-PMI month and verify it never comes back
        let first_zero = result
            .events
            .iter()
            .position(|e| e.pmi_payment.unwrap() == 0.0)
            .expect("PMI should cancel before payoff");
        assert!(first_zero > 0);
        for event in &result.events[first_zero..] {
            assert_relative_eq!(event.pmi_payment.unwrap(), 0.0);
        }

        // The cancellation month's LTV is at or below the request threshold
        let crossing = &result.events[first_zero];
        assert!(crossing.end_balance / 300_000.0 <= PMI_REQUEST_LTV + 1e-9);
    }

    #[test]
    fn test_full_term_reaches_full_equity() {
        let (entry, terms) = mortgage_entry(240_000.0, 300_000.0, 0.0);
        let result = calculate(&entry, &terms).unwrap();

        assert_eq!(result.total_months, 360);
        assert!(result.events.last().unwrap().end_balance <= BALANCE_EPSILON);
        assert_relative_eq!(result.equity_percent.unwrap(), 100.0, epsilon = 0.01);
    }

    #[test]
    fn test_total_payment_includes_pmi_and_escrow() {
        let (entry, terms) = mortgage_entry(285_000.0, 300_000.0, 0.5);
        let result = calculate(&entry, &terms).unwrap();

        let first = &result.events[0];
        assert_relative_eq!(
            first.total_payment.unwrap(),
            first.payment + first.pmi_payment.unwrap() + first.escrow_payment.unwrap(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_home_price_rejected() {
        let (entry, mut terms) = mortgage_entry(240_000.0, 300_000.0, 0.5);
        terms.home_price = 0.0;
        assert!(calculate(&entry, &terms).is_err());
    }

    #[test]
    fn test_escrow_excluded_when_disabled() {
        let (entry, mut terms) = mortgage_entry(240_000.0, 300_000.0, 0.0);
        terms.include_escrow = false;
        let result = calculate(&entry, &terms).unwrap();
        assert_relative_eq!(result.events[0].escrow_payment.unwrap(), 0.0);
        assert_relative_eq!(result.events[0].total_payment.unwrap(), result.events[0].payment);
    }
}
