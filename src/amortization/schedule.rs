//! Schedule output structures shared by every calculator

use serde::{Deserialize, Serialize};

/// One simulated month for one loan
///
/// Invariant: `end_balance` never goes negative; the exact ordering of
/// interest accrual vs. payment is type-specific and documented on each
/// calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEvent {
    /// 1-based month number
    pub month: u32,
    pub start_balance: f64,
    /// Interest accrued this month
    pub interest: f64,
    /// Principal-bearing payment applied this month
    pub payment: f64,
    pub end_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_paid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmi_payment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escrow_payment: Option<f64>,
    /// Payment plus PMI plus escrow where those apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_payment: Option<f64>,
}

impl MonthlyEvent {
    /// A bare principal/interest event with no extras
    pub fn new(month: u32, start_balance: f64, interest: f64, payment: f64, end_balance: f64) -> Self {
        Self {
            month,
            start_balance,
            interest,
            payment,
            end_balance,
            principal_paid: None,
            pmi_payment: None,
            escrow_payment: None,
            total_payment: None,
        }
    }

    /// The amount actually spent this month (falls back to the principal
    /// payment when no PMI/escrow breakdown was recorded)
    pub fn spent(&self) -> f64 {
        self.total_payment.unwrap_or(self.payment)
    }
}

/// One loan's full simulated life
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanCalculationResult {
    pub loan_id: String,
    pub loan_name: String,
    pub loan_type: String,
    /// Original balance at simulation start
    pub principal: f64,
    pub interest_rate: f64,
    /// Payment actually used by the simulation
    pub monthly_payment: f64,
    pub events: Vec<MonthlyEvent>,
    pub total_months: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    /// Credit cards only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_payment: Option<f64>,
    /// Auto loans only: depreciated vehicle value at end of schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_value: Option<f64>,
    /// Mortgages only: terminal equity percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity_percent: Option<f64>,
}

impl LoanCalculationResult {
    /// Start an empty result for one loan
    pub fn new(
        loan_id: impl Into<String>,
        loan_name: impl Into<String>,
        loan_type: impl Into<String>,
        principal: f64,
        interest_rate: f64,
        monthly_payment: f64,
    ) -> Self {
        Self {
            loan_id: loan_id.into(),
            loan_name: loan_name.into(),
            loan_type: loan_type.into(),
            principal,
            interest_rate,
            monthly_payment,
            events: Vec::new(),
            total_months: 0,
            total_interest: 0.0,
            total_paid: 0.0,
            minimum_payment: None,
            vehicle_value: None,
            equity_percent: None,
        }
    }

    /// Append a month and accumulate the running totals
    pub fn add_event(&mut self, event: MonthlyEvent) {
        self.total_interest += event.interest;
        self.total_paid += event.spent();
        self.total_months += 1;
        self.events.push(event);
    }
}

/// Aggregate across a portfolio of loans
///
/// All totals are simple sums except `total_months`, which is the maximum
/// across loans: the portfolio is not done until its slowest loan is done.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedLoanResult {
    pub loans: Vec<LoanCalculationResult>,
    pub total_principal: f64,
    pub total_interest: f64,
    pub total_months: u32,
    pub total_monthly_payment: f64,
    pub total_paid: f64,
}

impl CombinedLoanResult {
    /// Combine individual results into portfolio totals
    pub fn from_results(loans: Vec<LoanCalculationResult>) -> Self {
        let mut combined = Self {
            loans: Vec::new(),
            total_principal: 0.0,
            total_interest: 0.0,
            total_months: 0,
            total_monthly_payment: 0.0,
            total_paid: 0.0,
        };

        for result in &loans {
            combined.total_principal += result.principal;
            combined.total_interest += result.total_interest;
            combined.total_monthly_payment += result.monthly_payment;
            combined.total_paid += result.total_paid;
            combined.total_months = combined.total_months.max(result.total_months);
        }

        combined.loans = loans;
        combined
    }
}
