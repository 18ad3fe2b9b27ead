//! Month-by-month payoff strategy simulation across a portfolio
//!
//! All three strategies share one discretionary extra-payment budget. As
//! loans reach zero their minimum payments roll into that budget for every
//! later month, which is the mechanic that makes avalanche and snowball
//! outpace paying minimums.

use super::snapshot::LoanSnapshot;
use crate::amortization::{BALANCE_EPSILON, MAX_MONTHS};
use crate::rates::monthly_rate;
use serde::{Deserialize, Serialize};

/// Extra-payment allocation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Highest APR first, ties broken by smaller balance
    Avalanche,
    /// Smallest balance first, ties broken by higher APR
    Snowball,
    /// Whole budget split evenly across active loans
    Standard,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball => "snowball",
            Strategy::Standard => "standard",
        }
    }
}

/// One loan's share of a simulated month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyLoanEvent {
    pub loan_id: String,
    pub start_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub end_balance: f64,
    pub is_paid_off: bool,
}

/// One month across the whole portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyMonthEvent {
    pub month: u32,
    pub loans: Vec<StrategyLoanEvent>,
    pub total_payment: f64,
    pub total_balance: f64,
}

/// A loan's place in the payoff sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffEntry {
    pub loan_id: String,
    pub loan_name: String,
    pub payoff_month: u32,
    pub total_interest_paid: f64,
    pub total_paid: f64,
}

/// Full result of one strategy run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub total_months: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    /// Relative to the no-extra-payment baseline; filled in by the comparator
    #[serde(default)]
    pub interest_saved: f64,
    #[serde(default)]
    pub months_saved: u32,
    /// Loans in the order they reached zero balance
    pub payoff_order: Vec<PayoffEntry>,
    pub monthly_events: Vec<StrategyMonthEvent>,
}

/// Mutable per-loan state scoped to one simulation call
struct LoanState {
    balance: f64,
    interest_paid: f64,
    total_paid: f64,
    paid_off: bool,
}

/// Simulate one strategy until every loan is paid off or the month cap hits
pub fn simulate(snapshots: &[LoanSnapshot], extra_payment: f64, strategy: Strategy) -> StrategyResult {
    log::debug!(
        "simulating {} strategy over {} loans with {:.2} extra",
        strategy.as_str(),
        snapshots.len(),
        extra_payment
    );

    let mut states: Vec<LoanState> = snapshots
        .iter()
        .map(|s| LoanState {
            balance: s.balance,
            interest_paid: 0.0,
            total_paid: 0.0,
            paid_off: s.balance <= BALANCE_EPSILON,
        })
        .collect();

    let mut result = StrategyResult {
        strategy,
        total_months: 0,
        total_interest: 0.0,
        total_paid: 0.0,
        interest_saved: 0.0,
        months_saved: 0,
        payoff_order: Vec::new(),
        monthly_events: Vec::new(),
    };

    // Minimum payments of finished loans, permanently redirected into the
    // extra-payment pool
    let mut freed_min_payments = 0.0;
    let mut month = 0u32;

    while states.iter().any(|s| s.balance > BALANCE_EPSILON) && month < MAX_MONTHS {
        month += 1;

        let active: Vec<usize> = (0..states.len())
            .filter(|&i| states[i].balance > BALANCE_EPSILON)
            .collect();
        let total_extra = extra_payment + freed_min_payments;

        let payments = allocate_payments(snapshots, &states, &active, total_extra, strategy);

        let mut loans = Vec::with_capacity(states.len());
        let mut total_payment = 0.0;
        let mut total_balance = 0.0;

        for (i, state) in states.iter_mut().enumerate() {
            if state.paid_off {
                loans.push(StrategyLoanEvent {
                    loan_id: snapshots[i].id.clone(),
                    start_balance: 0.0,
                    payment: 0.0,
                    interest: 0.0,
                    end_balance: 0.0,
                    is_paid_off: true,
                });
                continue;
            }

            let start_balance = state.balance;
            let payment = payments[i];
            let interest = start_balance * monthly_rate(snapshots[i].apr);
            let end_balance = (start_balance - payment + interest).max(0.0);

            state.balance = end_balance;
            state.interest_paid += interest;
            state.total_paid += payment;

            let is_paid_off = end_balance <= BALANCE_EPSILON;
            if is_paid_off {
                state.paid_off = true;
                result.payoff_order.push(PayoffEntry {
                    loan_id: snapshots[i].id.clone(),
                    loan_name: snapshots[i].name.clone(),
                    payoff_month: month,
                    total_interest_paid: state.interest_paid,
                    total_paid: state.total_paid,
                });
                freed_min_payments += snapshots[i].minimum_payment;
            }

            total_payment += payment;
            total_balance += end_balance;
            loans.push(StrategyLoanEvent {
                loan_id: snapshots[i].id.clone(),
                start_balance,
                payment,
                interest,
                end_balance,
                is_paid_off,
            });
        }

        result.monthly_events.push(StrategyMonthEvent {
            month,
            loans,
            total_payment,
            total_balance,
        });
    }

    result.total_months = month;
    result.total_interest = states.iter().map(|s| s.interest_paid).sum();
    result.total_paid = states.iter().map(|s| s.total_paid).sum();
    result
}

/// Decide this month's payment for every loan
fn allocate_payments(
    snapshots: &[LoanSnapshot],
    states: &[LoanState],
    active: &[usize],
    total_extra: f64,
    strategy: Strategy,
) -> Vec<f64> {
    let mut payments = vec![0.0; states.len()];
    if active.is_empty() {
        return payments;
    }

    match strategy {
        Strategy::Standard => {
            // Entire budget (minimums plus extra) split evenly
            let minimum_sum: f64 = active.iter().map(|&i| snapshots[i].minimum_payment).sum();
            let per_loan = (minimum_sum + total_extra) / active.len() as f64;
            for &i in active {
                payments[i] = per_loan.min(states[i].balance);
            }
        }
        Strategy::Avalanche | Strategy::Snowball => {
            // Everyone gets their minimum first
            for &i in active {
                payments[i] = snapshots[i].minimum_payment.min(states[i].balance);
            }

            // Then walk loans in priority order, each absorbing extra up to
            // its remaining balance
            let mut order = active.to_vec();
            match strategy {
                Strategy::Avalanche => order.sort_by(|&a, &b| {
                    snapshots[b]
                        .apr
                        .total_cmp(&snapshots[a].apr)
                        .then(states[a].balance.total_cmp(&states[b].balance))
                }),
                Strategy::Snowball => order.sort_by(|&a, &b| {
                    states[a]
                        .balance
                        .total_cmp(&states[b].balance)
                        .then(snapshots[b].apr.total_cmp(&snapshots[a].apr))
                }),
                Strategy::Standard => unreachable!(),
            }

            let mut remaining = total_extra;
            for &i in &order {
                if remaining <= 0.0 {
                    break;
                }
                let capacity = (states[i].balance - payments[i]).max(0.0);
                let applied = remaining.min(capacity);
                payments[i] += applied;
                remaining -= applied;
            }
        }
    }

    payments
}
