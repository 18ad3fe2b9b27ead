//! Compare payoff strategies for a portfolio
//!
//! Usage: cargo run --bin compare_strategies -- portfolio.json --extra-payment 200

use anyhow::Context;
use clap::Parser;
use loan_engine::amortization::calculate_portfolio;
use loan_engine::loan::load_portfolio;
use loan_engine::strategy::compare_strategies;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "compare_strategies", about = "Debt payoff strategy comparison")]
struct Args {
    /// Portfolio file (.json or .csv)
    portfolio: PathBuf,

    /// Monthly extra-payment budget shared across the portfolio
    #[arg(long, default_value_t = 0.0)]
    extra_payment: f64,

    /// Emit the comparison as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut loans = load_portfolio(&args.portfolio)
        .with_context(|| format!("failed to load {}", args.portfolio.display()))?;
    loans.retain(|l| l.balance > 0.0);

    let combined = calculate_portfolio(&loans)?;
    let comparison = compare_strategies(&combined, args.extra_payment);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!("Strategy comparison (extra payment ${:.2}/month)", comparison.extra_payment);
    println!("{}", "=".repeat(60));
    println!(
        "{:>10} {:>8} {:>14} {:>14} {:>12} {:>8}",
        "Strategy", "Months", "Interest", "Total Paid", "Saved", "Faster"
    );

    for result in &comparison.strategies {
        println!(
            "{:>10} {:>8} {:>14.2} {:>14.2} {:>12.2} {:>8}",
            result.strategy.as_str(),
            result.total_months,
            result.total_interest,
            result.total_paid,
            result.interest_saved,
            format!("{} mo", result.months_saved),
        );
    }

    for result in &comparison.strategies {
        println!("\nPayoff order ({}):", result.strategy.as_str());
        for (i, entry) in result.payoff_order.iter().enumerate() {
            println!(
                "  {}. {} at month {} (${:.2} interest, ${:.2} paid)",
                i + 1,
                entry.loan_name,
                entry.payoff_month,
                entry.total_interest_paid,
                entry.total_paid,
            );
        }
    }

    Ok(())
}
