pub mod file;
pub mod stdin;

use fund_analytics_core::nav::NavSeries;
use fund_analytics_core::types::RawNavEntry;

/// Load a NAV history from `--nav-file` (JSON or CSV by extension) or from
/// JSON piped on stdin.
pub fn load_nav_series(
    nav_file: &Option<String>,
) -> Result<NavSeries, Box<dyn std::error::Error>> {
    let entries: Vec<RawNavEntry> = if let Some(path) = nav_file {
        if path.to_lowercase().ends_with(".csv") {
            file::read_nav_csv(path)?
        } else {
            file::read_nav_json(path)?
        }
    } else if let Some(entries) = stdin::read_nav_stdin()? {
        entries
    } else {
        return Err("Provide --nav-file or pipe NAV history JSON via stdin".into());
    };

    if entries.is_empty() {
        return Err("NAV history contains no entries".into());
    }

    Ok(NavSeries::from_raw(&entries)?)
}
