//! Payoff strategy simulation and comparison

mod comparator;
mod simulator;
mod snapshot;

pub use comparator::{compare_snapshots, compare_strategies, StrategyComparison};
pub use simulator::{
    simulate, PayoffEntry, Strategy, StrategyLoanEvent, StrategyMonthEvent, StrategyResult,
};
pub use snapshot::{snapshots_from_combined, LoanSnapshot};
