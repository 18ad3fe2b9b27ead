//! Loan Engine - amortization and multi-loan payoff-strategy simulation
//!
//! This library provides:
//! - Per-type amortization schedules (credit card, personal, auto, mortgage, student)
//! - Single-loan payment-then-interest amortization (legacy endpoint)
//! - Multi-loan portfolio aggregation
//! - Payoff strategy simulation (avalanche, snowball, standard) with rollover
//!   of freed minimum payments
//! - Strategy comparison against a minimums-only baseline

pub mod amortization;
pub mod error;
pub mod loan;
pub mod rates;
pub mod strategy;

// Re-export commonly used types
pub use amortization::{
    calculate_legacy, calculate_loan, calculate_portfolio, CombinedLoanResult,
    LegacyLoanRequest, LegacyLoanResult, LoanCalculationResult, MonthlyEvent,
};
pub use error::CalcError;
pub use loan::{LoanEntry, LoanTerms};
pub use strategy::{compare_strategies, simulate, Strategy, StrategyComparison, StrategyResult};
