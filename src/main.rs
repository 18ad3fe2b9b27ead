//! Loan Engine CLI
//!
//! Loads a portfolio (JSON or CSV), runs the per-type calculators, and
//! prints the combined amortization summary. Optionally writes every loan's
//! monthly schedule to CSV.

use anyhow::Context;
use clap::Parser;
use loan_engine::amortization::{calculate_legacy, calculate_portfolio, LegacyLoanRequest};
use loan_engine::loan::load_portfolio;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "loan_engine", about = "Multi-loan amortization calculator")]
struct Args {
    /// Portfolio file (.json or .csv)
    #[arg(required_unless_present = "principal")]
    portfolio: Option<PathBuf>,

    /// Run the single-loan payment-first calculator instead of a portfolio
    #[arg(long, requires = "apr", requires = "payment", conflicts_with = "portfolio")]
    principal: Option<f64>,

    /// APR for single-loan mode
    #[arg(long)]
    apr: Option<f64>,

    /// Monthly payment for single-loan mode
    #[arg(long)]
    payment: Option<f64>,

    /// Write the full monthly schedule for every loan to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit the combined result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Months of schedule to print per loan in table mode
    #[arg(long, default_value_t = 12)]
    preview_months: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(principal) = args.principal {
        return run_single_loan(&args, principal);
    }

    let portfolio = args.portfolio.as_ref().expect("clap enforces portfolio or --principal");
    let mut loans = load_portfolio(portfolio)
        .with_context(|| format!("failed to load {}", portfolio.display()))?;

    // Zero-balance loans are excluded before calculation
    loans.retain(|l| l.balance > 0.0);

    let combined = calculate_portfolio(&loans)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&combined)?);
        return Ok(());
    }

    println!("Loan Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("{}\n", "=".repeat(60));

    for loan in &combined.loans {
        println!("{} ({}, {})", loan.loan_name, loan.loan_id, loan.loan_type);
        println!(
            "  Principal: ${:.2}  Rate: {:.2}%  Payment: ${:.2}",
            loan.principal, loan.interest_rate, loan.monthly_payment
        );
        if let Some(minimum) = loan.minimum_payment {
            println!("  Minimum payment: ${:.2}", minimum);
        }
        if let Some(value) = loan.vehicle_value {
            println!("  Vehicle value at payoff: ${:.2}", value);
        }
        if let Some(equity) = loan.equity_percent {
            println!("  Equity at payoff: {:.1}%", equity);
        }
        println!(
            "  {} months, ${:.2} interest, ${:.2} paid",
            loan.total_months, loan.total_interest, loan.total_paid
        );

        println!(
            "  {:>5} {:>12} {:>10} {:>10} {:>12}",
            "Month", "Start", "Interest", "Payment", "End"
        );
        for event in loan.events.iter().take(args.preview_months) {
            println!(
                "  {:>5} {:>12.2} {:>10.2} {:>10.2} {:>12.2}",
                event.month, event.start_balance, event.interest, event.payment, event.end_balance
            );
        }
        if loan.events.len() > args.preview_months {
            println!("  ... ({} more months)", loan.events.len() - args.preview_months);
        }
        println!();
    }

    println!("Portfolio totals:");
    println!("  Principal:       ${:>14.2}", combined.total_principal);
    println!("  Interest:        ${:>14.2}", combined.total_interest);
    println!("  Monthly payment: ${:>14.2}", combined.total_monthly_payment);
    println!("  Total paid:      ${:>14.2}", combined.total_paid);
    println!("  Months to clear: {:>15}", combined.total_months);

    if let Some(path) = &args.output {
        write_schedule_csv(path, &combined)?;
        println!("\nFull schedule written to: {}", path.display());
    }

    Ok(())
}

/// Single-loan mode: the original payment-then-interest endpoint
fn run_single_loan(args: &Args, principal: f64) -> anyhow::Result<()> {
    let request = LegacyLoanRequest {
        principal,
        apr: args.apr.expect("clap enforces --apr"),
        monthly_payment: args.payment.expect("clap enforces --payment"),
    };
    let result = calculate_legacy(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "${:.2} at {:.2}% APR, ${:.2}/month",
        result.principal, result.apr, result.monthly_payment
    );
    println!(
        "{} months to payoff, ${:.2} total interest\n",
        result.total_months, result.total_interest
    );
    println!(
        "{:>5} {:>12} {:>10} {:>10} {:>12}",
        "Month", "Start", "Payment", "Interest", "End"
    );
    for event in result.events.iter().take(args.preview_months) {
        println!(
            "{:>5} {:>12.2} {:>10.2} {:>10.2} {:>12.2}",
            event.month, event.start_balance, event.payment, event.interest, event.end_balance
        );
    }
    if result.events.len() > args.preview_months {
        println!("... ({} more months)", result.events.len() - args.preview_months);
    }

    Ok(())
}

/// One row per loan-month, wide enough for every loan type's extras
fn write_schedule_csv(path: &PathBuf, combined: &loan_engine::CombinedLoanResult) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    writeln!(
        file,
        "loanId,loanType,month,startBalance,interest,payment,endBalance,principalPaid,pmiPayment,escrowPayment,totalPayment"
    )?;

    for loan in &combined.loans {
        for event in &loan.events {
            writeln!(
                file,
                "{},{},{},{:.8},{:.8},{:.8},{:.8},{:.8},{:.8},{:.8},{:.8}",
                loan.loan_id,
                loan.loan_type,
                event.month,
                event.start_balance,
                event.interest,
                event.payment,
                event.end_balance,
                event.principal_paid.unwrap_or(0.0),
                event.pmi_payment.unwrap_or(0.0),
                event.escrow_payment.unwrap_or(0.0),
                event.total_payment.unwrap_or(event.payment),
            )?;
        }
    }

    Ok(())
}
