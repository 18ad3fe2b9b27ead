//! Load loan portfolios from JSON or CSV
//!
//! Both formats share one flat wire shape (`RawLoan`) with camelCase field
//! names matching the frontend contract. Conversion to [`LoanEntry`] checks
//! the per-type required fields up front so calculators never see a
//! half-specified loan.

use super::data::{
    AutoLoanTerms, CreditCardTerms, LoanEntry, LoanTerms, MortgageTerms, PersonalLoanTerms,
    RepaymentPlan, StudentLoanTerms,
};
use crate::error::CalcError;
use csv::Reader;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default minimum payment terms for credit cards when the caller omits them
const DEFAULT_MIN_PAYMENT_PERCENT: f64 = 2.0;
const DEFAULT_MIN_PAYMENT_FLOOR: f64 = 25.0;

/// Flat wire row covering every loan type's fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawLoan {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub loan_type: String,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub monthly_payment: Option<f64>,

    // Credit card
    #[serde(default)]
    pub apr: Option<f64>,
    #[serde(default)]
    pub credit_limit: Option<f64>,
    #[serde(default)]
    pub minimum_payment_percent: Option<f64>,
    #[serde(default)]
    pub minimum_payment_floor: Option<f64>,

    // Installment loans
    #[serde(default)]
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub term_months: Option<u32>,
    #[serde(default)]
    pub origination_fee_percent: Option<f64>,

    // Auto
    #[serde(default)]
    pub vehicle_price: Option<f64>,
    #[serde(default)]
    pub down_payment: Option<f64>,
    #[serde(default)]
    pub trade_in_value: Option<f64>,
    #[serde(default)]
    pub trade_in_payoff: Option<f64>,
    #[serde(default)]
    pub vehicle_year: Option<u32>,
    #[serde(default)]
    pub is_used: Option<bool>,

    // Mortgage
    #[serde(default)]
    pub term_years: Option<u32>,
    #[serde(default)]
    pub home_price: Option<f64>,
    #[serde(default)]
    pub property_tax_annual: Option<f64>,
    #[serde(default)]
    pub home_insurance_annual: Option<f64>,
    #[serde(default)]
    pub pmi_rate: Option<f64>,
    #[serde(default)]
    pub hoa_monthly: Option<f64>,
    #[serde(default)]
    pub include_escrow: Option<bool>,

    // Student
    #[serde(default)]
    pub repayment_plan: Option<String>,
}

fn require(field: &str, value: Option<f64>) -> Result<f64, CalcError> {
    value.ok_or_else(|| CalcError::invalid(field, "required for this loan type"))
}

fn require_u32(field: &str, value: Option<u32>) -> Result<u32, CalcError> {
    value.ok_or_else(|| CalcError::invalid(field, "required for this loan type"))
}

impl RawLoan {
    fn parse_terms(&self) -> Result<LoanTerms, CalcError> {
        match self.loan_type.as_str() {
            "credit-card" => Ok(LoanTerms::CreditCard(CreditCardTerms {
                apr: require("apr", self.apr)?,
                credit_limit: self.credit_limit.unwrap_or(0.0),
                minimum_payment_percent: self
                    .minimum_payment_percent
                    .unwrap_or(DEFAULT_MIN_PAYMENT_PERCENT),
                minimum_payment_floor: self
                    .minimum_payment_floor
                    .unwrap_or(DEFAULT_MIN_PAYMENT_FLOOR),
            })),
            "personal-loan" => Ok(LoanTerms::PersonalLoan(PersonalLoanTerms {
                interest_rate: require("interestRate", self.interest_rate)?,
                term_months: require_u32("termMonths", self.term_months)?,
                origination_fee_percent: self.origination_fee_percent.unwrap_or(0.0),
            })),
            "auto-loan" => Ok(LoanTerms::AutoLoan(AutoLoanTerms {
                interest_rate: require("interestRate", self.interest_rate)?,
                term_months: require_u32("termMonths", self.term_months)?,
                vehicle_price: require("vehiclePrice", self.vehicle_price)?,
                down_payment: self.down_payment.unwrap_or(0.0),
                trade_in_value: self.trade_in_value.unwrap_or(0.0),
                trade_in_payoff: self.trade_in_payoff.unwrap_or(0.0),
                vehicle_year: self.vehicle_year.unwrap_or(0),
                is_used: self.is_used.unwrap_or(false),
            })),
            "mortgage" => Ok(LoanTerms::Mortgage(MortgageTerms {
                interest_rate: require("interestRate", self.interest_rate)?,
                term_years: require_u32("termYears", self.term_years)?,
                home_price: require("homePrice", self.home_price)?,
                down_payment: self.down_payment.unwrap_or(0.0),
                property_tax_annual: self.property_tax_annual.unwrap_or(0.0),
                home_insurance_annual: self.home_insurance_annual.unwrap_or(0.0),
                pmi_rate: self.pmi_rate.unwrap_or(0.0),
                hoa_monthly: self.hoa_monthly.unwrap_or(0.0),
                include_escrow: self.include_escrow.unwrap_or(true),
            })),
            "student-loan" => Ok(LoanTerms::StudentLoan(StudentLoanTerms {
                interest_rate: require("interestRate", self.interest_rate)?,
                repayment_plan: match self.repayment_plan.as_deref() {
                    None | Some("standard") => RepaymentPlan::Standard,
                    Some("extended") => RepaymentPlan::Extended,
                    Some("income-driven") => RepaymentPlan::IncomeDriven,
                    Some("graduated") => RepaymentPlan::Graduated,
                    Some(other) => {
                        return Err(CalcError::invalid(
                            "repaymentPlan",
                            format!("unknown plan: {}", other),
                        ))
                    }
                },
            })),
            // Unrecognized types run the generic simple-interest calculator
            other => Ok(LoanTerms::Other {
                kind: other.to_string(),
                interest_rate: require("interestRate", self.interest_rate)?,
            }),
        }
    }
}

impl TryFrom<RawLoan> for LoanEntry {
    type Error = CalcError;

    fn try_from(raw: RawLoan) -> Result<Self, Self::Error> {
        let terms = raw.parse_terms()?;

        // Auto loans may omit the balance; derive it from the vehicle numbers
        let balance = match raw.balance {
            Some(b) if b > 0.0 => b,
            _ => match &terms {
                LoanTerms::AutoLoan(t) => t.financed_amount(),
                _ => raw.balance.unwrap_or(0.0),
            },
        };

        Ok(LoanEntry {
            id: raw.id.unwrap_or_else(|| raw.name.clone()),
            name: raw.name,
            balance,
            monthly_payment: raw.monthly_payment,
            terms,
        })
    }
}

/// JSON request body shape: `{"loans": [...]}`
#[derive(Debug, Deserialize)]
struct PortfolioRequest {
    loans: Vec<LoanEntry>,
}

/// Load a portfolio from a JSON file (`{"loans": [...]}` or a bare array)
pub fn load_portfolio_json<P: AsRef<Path>>(path: P) -> Result<Vec<LoanEntry>, CalcError> {
    let reader = BufReader::new(File::open(path)?);
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    parse_portfolio_value(value)
}

/// Parse a portfolio from an already-deserialized JSON value
pub fn parse_portfolio_value(value: serde_json::Value) -> Result<Vec<LoanEntry>, CalcError> {
    if value.is_array() {
        Ok(serde_json::from_value::<Vec<LoanEntry>>(value)?)
    } else {
        let request: PortfolioRequest = serde_json::from_value(value)?;
        Ok(request.loans)
    }
}

/// Load a portfolio from a CSV file with camelCase headers
pub fn load_portfolio_csv<P: AsRef<Path>>(path: P) -> Result<Vec<LoanEntry>, CalcError> {
    let mut reader = Reader::from_path(path)?;
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let raw: RawLoan = result?;
        loans.push(LoanEntry::try_from(raw)?);
    }

    Ok(loans)
}

/// Load a portfolio, picking the format from the file extension
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<Vec<LoanEntry>, CalcError> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_portfolio_csv(path),
        _ => load_portfolio_json(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_portfolio() {
        let json = serde_json::json!({
            "loans": [
                {
                    "id": "cc-1",
                    "name": "Visa",
                    "type": "credit-card",
                    "balance": 4500.0,
                    "apr": 22.99,
                    "creditLimit": 10000.0,
                    "minimumPaymentPercent": 2.0,
                    "minimumPaymentFloor": 25.0
                },
                {
                    "name": "Car",
                    "type": "auto-loan",
                    "interestRate": 6.5,
                    "termMonths": 60,
                    "vehiclePrice": 30000.0,
                    "downPayment": 4000.0,
                    "isUsed": true
                }
            ]
        });

        let loans = parse_portfolio_value(json).unwrap();
        assert_eq!(loans.len(), 2);

        assert_eq!(loans[0].id, "cc-1");
        assert!(matches!(loans[0].terms, LoanTerms::CreditCard(_)));

        // No id given: falls back to the name. No balance given: derived
        // from the vehicle numbers.
        assert_eq!(loans[1].id, "Car");
        assert_eq!(loans[1].balance, 26_000.0);
    }

    #[test]
    fn test_parse_bare_array() {
        let json = serde_json::json!([
            {"name": "Loan", "type": "personal-loan", "balance": 1000.0,
             "interestRate": 10.0, "termMonths": 24}
        ]);
        let loans = parse_portfolio_value(json).unwrap();
        assert_eq!(loans.len(), 1);
    }

    #[test]
    fn test_unknown_type_becomes_other() {
        let json = serde_json::json!([
            {"name": "Margin", "type": "margin-loan", "balance": 2000.0, "interestRate": 9.0}
        ]);
        let loans = parse_portfolio_value(json).unwrap();
        match &loans[0].terms {
            LoanTerms::Other { kind, interest_rate } => {
                assert_eq!(kind, "margin-loan");
                assert_eq!(*interest_rate, 9.0);
            }
            other => panic!("expected Other, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = serde_json::json!([
            {"name": "House", "type": "mortgage", "balance": 250000.0, "termYears": 30,
             "homePrice": 300000.0}
        ]);
        let err = parse_portfolio_value(json).unwrap_err();
        assert!(err.to_string().contains("interestRate"), "got: {}", err);
    }

    #[test]
    fn test_csv_round_trip() {
        let csv_data = "\
name,type,balance,interestRate,termMonths,apr,minimumPaymentPercent,minimumPaymentFloor,vehiclePrice,downPayment,isUsed,termYears,homePrice,repaymentPlan,monthlyPayment
Visa,credit-card,3000,,,19.99,2.0,25,,,,,,,
Car,auto-loan,,5.5,48,,,,22000,2000,true,,,,
Degree,student-loan,18000,4.5,,,,,,,,,,graduated,
";
        let mut reader = Reader::from_reader(csv_data.as_bytes());
        let mut loans = Vec::new();
        for row in reader.deserialize() {
            let raw: RawLoan = row.unwrap();
            loans.push(LoanEntry::try_from(raw).unwrap());
        }

        assert_eq!(loans.len(), 3);
        assert!(matches!(loans[0].terms, LoanTerms::CreditCard(_)));
        assert_eq!(loans[1].balance, 20_000.0);
        match &loans[2].terms {
            LoanTerms::StudentLoan(t) => assert_eq!(t.repayment_plan, RepaymentPlan::Graduated),
            other => panic!("expected StudentLoan, got {:?}", other),
        }
    }
}
