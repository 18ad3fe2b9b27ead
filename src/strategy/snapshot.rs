//! Flattened per-loan view consumed by the strategy simulator

use crate::amortization::CombinedLoanResult;
use serde::{Deserialize, Serialize};

/// One loan as the strategy simulator sees it: balance, rate, and the
/// minimum payment that must be made while the loan is open
///
/// Snapshots are immutable; the simulator keeps its own mutable balance
/// tracking per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSnapshot {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub apr: f64,
    pub minimum_payment: f64,
    pub loan_type: String,
}

/// Derive snapshots from an already-calculated portfolio
///
/// Credit cards contribute their computed minimum payment; other types
/// contribute the payment the amortization run actually used.
pub fn snapshots_from_combined(combined: &CombinedLoanResult) -> Vec<LoanSnapshot> {
    combined
        .loans
        .iter()
        .map(|loan| LoanSnapshot {
            id: loan.loan_id.clone(),
            name: loan.loan_name.clone(),
            balance: loan.principal,
            apr: loan.interest_rate,
            minimum_payment: loan.minimum_payment.unwrap_or(loan.monthly_payment),
            loan_type: loan.loan_type.clone(),
        })
        .collect()
}
