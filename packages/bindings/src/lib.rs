use napi::Result as NapiResult;
use napi_derive::napi;

use fund_analytics_core::nav::NavSeries;
use fund_analytics_core::types::RawNavEntry;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_series(nav_history_json: &str) -> NapiResult<NavSeries> {
    let entries: Vec<RawNavEntry> =
        serde_json::from_str(nav_history_json).map_err(to_napi_error)?;
    NavSeries::from_raw(&entries).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// SIP simulation
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate_sip(input_json: String, nav_history_json: String) -> NapiResult<String> {
    let input: fund_analytics_core::sip::SipInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let series = parse_series(&nav_history_json)?;
    let output =
        fund_analytics_core::sip::simulate_sip(&input, &series).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Trailing returns
// ---------------------------------------------------------------------------

#[napi]
pub fn trailing_return(period: String, nav_history_json: String) -> NapiResult<String> {
    let period: fund_analytics_core::trailing::TrailingPeriod =
        period.parse().map_err(to_napi_error)?;
    let series = parse_series(&nav_history_json)?;
    let output =
        fund_analytics_core::trailing::trailing_return(&series, period).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
