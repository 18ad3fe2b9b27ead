//! Runs every strategy against a no-extra baseline and computes savings

use super::simulator::{simulate, Strategy, StrategyResult};
use super::snapshot::{snapshots_from_combined, LoanSnapshot};
use crate::amortization::CombinedLoanResult;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// All three strategies at the requested extra payment, with savings
/// relative to paying only minimums
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyComparison {
    pub extra_payment: f64,
    pub strategies: Vec<StrategyResult>,
}

/// Compare avalanche, snowball, and standard at the given extra payment
///
/// Savings are measured against a zero-extra standard baseline, not against
/// each other.
pub fn compare_strategies(combined: &CombinedLoanResult, extra_payment: f64) -> StrategyComparison {
    let snapshots = snapshots_from_combined(combined);
    compare_snapshots(&snapshots, extra_payment)
}

/// Same comparison from pre-built snapshots
pub fn compare_snapshots(snapshots: &[LoanSnapshot], extra_payment: f64) -> StrategyComparison {
    let baseline = simulate(snapshots, 0.0, Strategy::Standard);
    log::debug!(
        "baseline: {} months, {:.2} interest",
        baseline.total_months,
        baseline.total_interest
    );

    let mut strategies: Vec<StrategyResult> =
        [Strategy::Avalanche, Strategy::Snowball, Strategy::Standard]
            .par_iter()
            .map(|&strategy| simulate(snapshots, extra_payment, strategy))
            .collect();

    for result in &mut strategies {
        result.interest_saved = baseline.total_interest - result.total_interest;
        result.months_saved = baseline.total_months.saturating_sub(result.total_months);
    }

    StrategyComparison {
        extra_payment,
        strategies,
    }
}
