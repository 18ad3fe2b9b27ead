//! Routes a loan entry to the calculator for its type

use super::schedule::LoanCalculationResult;
use super::{auto_loan, credit_card, generic, mortgage, personal_loan, student_loan};
use crate::error::CalcError;
use crate::loan::{LoanEntry, LoanTerms};

/// Calculate one loan's schedule using its type-specific model
///
/// Rate bounds are checked here once so the calculators can assume a sane
/// annual rate. Zero-balance loans are the caller's job to filter out.
pub fn calculate_loan(entry: &LoanEntry) -> Result<LoanCalculationResult, CalcError> {
    let annual_rate = entry.terms.annual_rate();
    if !(0.0..=100.0).contains(&annual_rate) {
        return Err(CalcError::invalid("interestRate", "must be between 0 and 100"));
    }

    match &entry.terms {
        LoanTerms::CreditCard(terms) => Ok(credit_card::calculate(entry, terms)),
        LoanTerms::PersonalLoan(terms) => Ok(personal_loan::calculate(entry, terms)),
        LoanTerms::AutoLoan(terms) => Ok(auto_loan::calculate(entry, terms)),
        LoanTerms::Mortgage(terms) => mortgage::calculate(entry, terms),
        LoanTerms::StudentLoan(terms) => Ok(student_loan::calculate(entry, terms)),
        LoanTerms::Other { interest_rate, .. } => generic::calculate(entry, *interest_rate),
    }
}
