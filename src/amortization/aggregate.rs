//! Portfolio-level calculation: run every loan's calculator and aggregate

use super::dispatch::calculate_loan;
use super::schedule::CombinedLoanResult;
use crate::error::CalcError;
use crate::loan::LoanEntry;
use rayon::prelude::*;

/// Run the dispatcher over every loan and combine the results
///
/// Loans run in parallel; each one is an independent pure simulation.
/// Callers filter zero-balance loans before handing the portfolio in.
pub fn calculate_portfolio(loans: &[LoanEntry]) -> Result<CombinedLoanResult, CalcError> {
    if loans.is_empty() {
        return Err(CalcError::EmptyPortfolio);
    }

    log::debug!("calculating portfolio of {} loans", loans.len());

    let results = loans
        .par_iter()
        .map(calculate_loan)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CombinedLoanResult::from_results(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{CreditCardTerms, LoanTerms, PersonalLoanTerms};
    use approx::assert_relative_eq;

    fn sample_portfolio() -> Vec<LoanEntry> {
        vec![
            LoanEntry {
                id: "cc".to_string(),
                name: "Card".to_string(),
                balance: 2_000.0,
                monthly_payment: Some(200.0),
                terms: LoanTerms::CreditCard(CreditCardTerms {
                    apr: 19.99,
                    credit_limit: 5_000.0,
                    minimum_payment_percent: 2.0,
                    minimum_payment_floor: 25.0,
                }),
            },
            LoanEntry {
                id: "pl".to_string(),
                name: "Personal".to_string(),
                balance: 10_000.0,
                monthly_payment: None,
                terms: LoanTerms::PersonalLoan(PersonalLoanTerms {
                    interest_rate: 8.0,
                    term_months: 48,
                    origination_fee_percent: 0.0,
                }),
            },
        ]
    }

    #[test]
    fn test_empty_portfolio_rejected() {
        match calculate_portfolio(&[]) {
            Err(CalcError::EmptyPortfolio) => {}
            other => panic!("expected EmptyPortfolio, got {:?}", other),
        }
    }

    #[test]
    fn test_sums_and_max_months() {
        let loans = sample_portfolio();
        let combined = calculate_portfolio(&loans).unwrap();

        assert_eq!(combined.loans.len(), 2);
        assert_relative_eq!(combined.total_principal, 12_000.0);

        let interest_sum: f64 = combined.loans.iter().map(|l| l.total_interest).sum();
        assert_relative_eq!(combined.total_interest, interest_sum, epsilon = 1e-9);

        let max_months = combined.loans.iter().map(|l| l.total_months).max().unwrap();
        assert_eq!(combined.total_months, max_months);

        let payment_sum: f64 = combined.loans.iter().map(|l| l.monthly_payment).sum();
        assert_relative_eq!(combined.total_monthly_payment, payment_sum, epsilon = 1e-9);
    }

    #[test]
    fn test_single_failing_loan_fails_the_portfolio() {
        let mut loans = sample_portfolio();
        loans.push(LoanEntry {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            balance: 1_000.0,
            monthly_payment: Some(50.0),
            terms: LoanTerms::Other {
                kind: "loan-shark".to_string(),
                interest_rate: 500.0,
            },
        });
        assert!(calculate_portfolio(&loans).is_err());
    }
}
