//! Periodic rate conversions and the fixed-payment amortization formula
//!
//! Every calculator works from these helpers so that rate handling is
//! identical across loan types.

/// Convert an annual percentage rate (e.g. 18.99) to a monthly periodic rate
pub fn monthly_rate(annual_percent: f64) -> f64 {
    annual_percent / 100.0 / 12.0
}

/// Convert an annual percentage rate to a daily periodic rate
///
/// Only the credit card calculator compounds daily; everything else is
/// monthly simple interest.
pub fn daily_rate(annual_percent: f64) -> f64 {
    annual_percent / 100.0 / 365.0
}

/// Standard fixed-payment amortization formula: P*r*(1+r)^n / ((1+r)^n - 1)
///
/// Degenerate zero-rate case returns a straight principal split so callers
/// never divide by zero. Callers using the result as a per-period cap must
/// still clamp it to the remaining balance.
pub fn amortization_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return principal;
    }
    if monthly_rate == 0.0 {
        return principal / months as f64;
    }
    let factor = (1.0 + monthly_rate).powi(months as i32);
    principal * monthly_rate * factor / (factor - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rate() {
        assert_relative_eq!(monthly_rate(12.0), 0.01);
        assert_relative_eq!(monthly_rate(18.99), 0.015825);
        assert_relative_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_daily_rate() {
        assert_relative_eq!(daily_rate(36.5), 0.001);
    }

    #[test]
    fn test_amortization_payment_standard() {
        // 200k at 6% over 30 years: the textbook answer is $1199.10
        let payment = amortization_payment(200_000.0, monthly_rate(6.0), 360);
        assert_relative_eq!(payment, 1199.10, epsilon = 0.01);
    }

    #[test]
    fn test_amortization_payment_zero_rate() {
        let payment = amortization_payment(12_000.0, 0.0, 48);
        assert_relative_eq!(payment, 250.0);
    }

    #[test]
    fn test_amortization_payment_zero_months() {
        // Degenerate term: the whole principal is due
        assert_relative_eq!(amortization_payment(5_000.0, 0.01, 0), 5_000.0);
    }

    #[test]
    fn test_amortization_payment_exceeds_pure_principal_split() {
        // Any positive rate must push the payment above principal/months
        let payment = amortization_payment(10_000.0, monthly_rate(5.0), 60);
        assert!(payment > 10_000.0 / 60.0);
    }
}
