mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::returns::ReturnsArgs;
use commands::sip::SipArgs;

/// Mutual fund performance analytics
#[derive(Parser)]
#[command(
    name = "mfa",
    version,
    about = "Mutual fund performance analytics",
    long_about = "A CLI for computing mutual fund performance metrics from NAV \
                  history with decimal precision. Supports SIP simulation and \
                  trailing-period returns over JSON or CSV NAV feeds."
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
    /// Simulate a monthly SIP over a NAV history
    Sip(SipArgs),
    /// Trailing-period returns (1m, 3m, 6m, 1y, 3y, 5y)
    Returns(ReturnsArgs),
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

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Sip(args) => commands::sip::run_sip(args),
        Commands::Returns(args) => commands::returns::run_returns(args),
        Commands::Version => {
            println!("mfa {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
