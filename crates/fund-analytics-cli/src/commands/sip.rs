use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fund_analytics_core::sip::{simulate_sip, SipFrequency, SipInput};

use crate::input;

/// Arguments for SIP simulation
#[derive(Args)]
pub struct SipArgs {
    /// Path to NAV history file (JSON array of {date, nav}, or CSV with
    /// date,nav columns)
    #[arg(long)]
    pub nav_file: Option<String>,

    /// Instalment amount
    #[arg(long)]
    pub amount: Decimal,

    /// First contribution date (YYYY-MM-DD)
    #[arg(long)]
    pub from: NaiveDate,

    /// Last date a contribution may fall on, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: NaiveDate,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let series = input::load_nav_series(&args.nav_file)?;

    let request = SipInput {
        amount: args.amount,
        frequency: SipFrequency::Monthly,
        from: args.from,
        to: args.to,
    };
    let envelope = simulate_sip(&request, &series)?;
    Ok(serde_json::to_value(envelope)?)
}
