mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::ScheduleArgs;
use commands::emi::EmiArgs;
use commands::project_report::{DepreciationArgs, OperationsArgs};
use commands::schemes::{CompareArgs, ResolveArgs};

/// Loan schedules and subsidy comparisons for MSME government schemes
#[derive(Parser)]
#[command(
    name = "msme",
    version,
    about = "Loan schedules and subsidy comparisons for MSME government schemes",
    long_about = "A CLI for estimating repayment schedules under Indian MSME subsidy \
                  schemes (PMEGP, PMFME, Stand-Up India, PM Vishwakarma and others) \
                  with decimal precision. Computes level-principal schedules with \
                  capital subsidy and interest subvention, ranks schemes by total \
                  benefit, and produces project-report statements."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log debug detail to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Month-by-month level-principal repayment schedule
    Schedule(ScheduleArgs),
    /// Repayment schedule rolled up by loan year
    Annual(ScheduleArgs),
    /// Rank pre-resolved scheme candidates by total benefit
    Compare(CompareArgs),
    /// Resolve an applicant profile against a policy table and rank the schemes
    Resolve(ResolveArgs),
    /// Equated monthly installment (annuity) schedule
    Emi(EmiArgs),
    /// Written-down-value depreciation statement
    Depreciation(DepreciationArgs),
    /// Capacity ramp, sales realization and operating expenses by year
    Operations(OperationsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Annual(args) => commands::amortization::run_annual(args),
        Commands::Compare(args) => commands::schemes::run_compare(args),
        Commands::Resolve(args) => commands::schemes::run_resolve(args),
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::Depreciation(args) => commands::project_report::run_depreciation(args),
        Commands::Operations(args) => commands::project_report::run_operations(args),
        Commands::Version => {
            println!("msme {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
