//! Loan data model and portfolio loaders

mod data;
pub mod loader;

pub use data::{
    AutoLoanTerms, CreditCardTerms, LoanEntry, LoanTerms, MortgageTerms, PersonalLoanTerms,
    RepaymentPlan, StudentLoanTerms,
};
pub use loader::{load_portfolio, load_portfolio_csv, load_portfolio_json, parse_portfolio_value};
