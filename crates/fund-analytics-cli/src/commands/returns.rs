use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fund_analytics_core::trailing::{trailing_return, TrailingPeriod};
use fund_analytics_core::FundAnalyticsError;

use crate::input;

/// Arguments for trailing-period returns
#[derive(Args)]
pub struct ReturnsArgs {
    /// Path to NAV history file (JSON array of {date, nav}, or CSV with
    /// date,nav columns)
    #[arg(long)]
    pub nav_file: Option<String>,

    /// Comma-separated period tokens
    #[arg(long, value_delimiter = ',', default_value = "1m,3m,6m,1y,3y,5y")]
    pub periods: Vec<String>,
}

/// One row per requested period. A period the series cannot reach back to is
/// reported as unavailable, not as a command failure.
#[derive(Debug, Serialize, Deserialize)]
struct PeriodReturnRow {
    period: String,
    available: bool,
    simple_return: Option<Decimal>,
    annualized_return: Option<Decimal>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

pub fn run_returns(args: ReturnsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let series = input::load_nav_series(&args.nav_file)?;

    let mut results: Vec<PeriodReturnRow> = Vec::new();
    for token in &args.periods {
        let period: TrailingPeriod = token.parse()?;
        match trailing_return(&series, period) {
            Ok(envelope) => {
                let out = envelope.result;
                results.push(PeriodReturnRow {
                    period: period.to_string(),
                    available: true,
                    simple_return: Some(out.simple_return),
                    annualized_return: out.annualized_return,
                    start_date: Some(out.start_date),
                    end_date: Some(out.end_date),
                });
            }
            Err(FundAnalyticsError::InsufficientHistory { .. }) => {
                results.push(PeriodReturnRow {
                    period: period.to_string(),
                    available: false,
                    simple_return: None,
                    annualized_return: None,
                    start_date: None,
                    end_date: None,
                });
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(serde_json::json!({ "results": results }))
}
