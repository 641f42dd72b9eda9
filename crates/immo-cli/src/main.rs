mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analysis::AnalyzeArgs;
use commands::reference::{MarginalRateArgs, StatesArgs};
use commands::schedule::ScheduleArgs;

/// German buy-to-let investment calculator
#[derive(Parser)]
#[command(
    name = "immo",
    version,
    about = "German buy-to-let investment calculator",
    long_about = "Analyse a rental property purchase in Germany with decimal precision: \
                  purchase side costs (Kaufnebenkosten), financing, cash flow, yields, \
                  depreciation (AfA) and the rental income tax effect, plus month-by-month \
                  mortgage payoff schedules with extra repayments (Sondertilgung)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a buy-to-let investment
    Analyze(AnalyzeArgs),
    /// Build a mortgage payoff schedule
    Schedule(ScheduleArgs),
    /// List the German states and their transfer tax rates
    States(StatesArgs),
    /// Marginal income-tax rate for a taxable income
    MarginalRate(MarginalRateArgs),
    /// Common marginal tax rate presets
    Presets,
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
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::analysis::run_analyze(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::States(args) => commands::reference::run_states(args),
        Commands::MarginalRate(args) => commands::reference::run_marginal_rate(args),
        Commands::Presets => commands::reference::run_presets(),
        Commands::Version => {
            println!("immo {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
