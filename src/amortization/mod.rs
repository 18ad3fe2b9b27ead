//! Per-type amortization calculators, dispatch, and portfolio aggregation

mod aggregate;
mod auto_loan;
mod credit_card;
mod dispatch;
mod generic;
mod legacy;
mod mortgage;
mod personal_loan;
mod schedule;
mod student_loan;

pub use aggregate::calculate_portfolio;
pub use dispatch::calculate_loan;
pub use legacy::{calculate as calculate_legacy, LegacyLoanRequest, LegacyLoanResult};
pub use schedule::{CombinedLoanResult, LoanCalculationResult, MonthlyEvent};

/// Balances at or below this are treated as paid off
pub const BALANCE_EPSILON: f64 = 0.01;

/// Iteration ceiling (100 years). Hitting it truncates the schedule; it is
/// never an error.
pub const MAX_MONTHS: u32 = 1200;
