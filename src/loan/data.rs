//! Loan data structures: one tagged union with a payload variant per loan type

use serde::Deserialize;

/// Credit card terms. Interest compounds daily; the minimum payment is a
/// percentage of balance with a dollar floor.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditCardTerms {
    pub apr: f64,
    pub credit_limit: f64,
    pub minimum_payment_percent: f64,
    pub minimum_payment_floor: f64,
}

/// Fixed-term personal loan terms
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalLoanTerms {
    pub interest_rate: f64,
    pub term_months: u32,
    /// Informational only; not amortized into the balance
    pub origination_fee_percent: f64,
}

/// Auto loan terms, including the vehicle details that drive depreciation
#[derive(Debug, Clone, PartialEq)]
pub struct AutoLoanTerms {
    pub interest_rate: f64,
    pub term_months: u32,
    pub vehicle_price: f64,
    pub down_payment: f64,
    pub trade_in_value: f64,
    pub trade_in_payoff: f64,
    pub vehicle_year: u32,
    pub is_used: bool,
}

impl AutoLoanTerms {
    /// Amount financed: price less down payment and trade equity, plus any
    /// payoff still owed on the trade-in. Clamped at zero.
    pub fn financed_amount(&self) -> f64 {
        (self.vehicle_price - self.down_payment - self.trade_in_value + self.trade_in_payoff)
            .max(0.0)
    }
}

/// Mortgage terms for the PITI model (principal, interest, taxes, insurance)
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageTerms {
    pub interest_rate: f64,
    pub term_years: u32,
    pub home_price: f64,
    pub down_payment: f64,
    pub property_tax_annual: f64,
    pub home_insurance_annual: f64,
    pub pmi_rate: f64,
    pub hoa_monthly: f64,
    pub include_escrow: bool,
}

/// Student loan repayment plan, selecting the nominal term and payment shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepaymentPlan {
    Standard,
    Extended,
    IncomeDriven,
    Graduated,
}

impl RepaymentPlan {
    /// Nominal term in months for the plan
    pub fn term_months(&self) -> u32 {
        match self {
            RepaymentPlan::Standard | RepaymentPlan::Graduated => 120,
            RepaymentPlan::Extended | RepaymentPlan::IncomeDriven => 300,
        }
    }
}

/// Student loan terms
#[derive(Debug, Clone, PartialEq)]
pub struct StudentLoanTerms {
    pub interest_rate: f64,
    pub repayment_plan: RepaymentPlan,
}

/// Type-specific loan terms. Unrecognized discriminators land in `Other`,
/// which keeps the original tag for reporting and runs the generic
/// simple-interest calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum LoanTerms {
    CreditCard(CreditCardTerms),
    PersonalLoan(PersonalLoanTerms),
    AutoLoan(AutoLoanTerms),
    Mortgage(MortgageTerms),
    StudentLoan(StudentLoanTerms),
    Other { kind: String, interest_rate: f64 },
}

impl LoanTerms {
    /// The wire discriminator for this loan type
    pub fn kind(&self) -> &str {
        match self {
            LoanTerms::CreditCard(_) => "credit-card",
            LoanTerms::PersonalLoan(_) => "personal-loan",
            LoanTerms::AutoLoan(_) => "auto-loan",
            LoanTerms::Mortgage(_) => "mortgage",
            LoanTerms::StudentLoan(_) => "student-loan",
            LoanTerms::Other { kind, .. } => kind,
        }
    }

    /// Annual rate used for interest accrual (APR for cards, stated rate
    /// for everything else)
    pub fn annual_rate(&self) -> f64 {
        match self {
            LoanTerms::CreditCard(t) => t.apr,
            LoanTerms::PersonalLoan(t) => t.interest_rate,
            LoanTerms::AutoLoan(t) => t.interest_rate,
            LoanTerms::Mortgage(t) => t.interest_rate,
            LoanTerms::StudentLoan(t) => t.interest_rate,
            LoanTerms::Other { interest_rate, .. } => *interest_rate,
        }
    }
}

/// A single loan in a portfolio
///
/// Deserialized through the flat wire shape in [`crate::loan::loader`], which
/// validates required fields per type and maps unknown types to
/// [`LoanTerms::Other`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::loan::loader::RawLoan")]
pub struct LoanEntry {
    /// Unique identifier (caller-supplied, or the loan name when omitted)
    pub id: String,
    /// Display label
    pub name: String,
    /// Current outstanding principal
    pub balance: f64,
    /// Caller-specified payment; when absent or <= 0 the calculator derives one
    pub monthly_payment: Option<f64>,
    /// Type-specific terms
    pub terms: LoanTerms,
}

impl LoanEntry {
    /// Caller-specified payment if it is usable (present and positive)
    pub fn configured_payment(&self) -> Option<f64> {
        self.monthly_payment.filter(|p| *p > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financed_amount() {
        let terms = AutoLoanTerms {
            interest_rate: 6.0,
            term_months: 60,
            vehicle_price: 35_000.0,
            down_payment: 5_000.0,
            trade_in_value: 8_000.0,
            trade_in_payoff: 3_000.0,
            vehicle_year: 2022,
            is_used: true,
        };
        assert_eq!(terms.financed_amount(), 25_000.0);
    }

    #[test]
    fn test_financed_amount_clamped_at_zero() {
        let terms = AutoLoanTerms {
            interest_rate: 6.0,
            term_months: 60,
            vehicle_price: 10_000.0,
            down_payment: 12_000.0,
            trade_in_value: 0.0,
            trade_in_payoff: 0.0,
            vehicle_year: 2018,
            is_used: true,
        };
        assert_eq!(terms.financed_amount(), 0.0);
    }

    #[test]
    fn test_repayment_plan_terms() {
        assert_eq!(RepaymentPlan::Standard.term_months(), 120);
        assert_eq!(RepaymentPlan::Graduated.term_months(), 120);
        assert_eq!(RepaymentPlan::Extended.term_months(), 300);
        assert_eq!(RepaymentPlan::IncomeDriven.term_months(), 300);
    }

    #[test]
    fn test_kind_strings() {
        let other = LoanTerms::Other {
            kind: "payday".to_string(),
            interest_rate: 400.0,
        };
        assert_eq!(other.kind(), "payday");
        assert_eq!(other.annual_rate(), 400.0);
    }
}
