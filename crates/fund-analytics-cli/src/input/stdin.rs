use std::io::{self, Read};

use fund_analytics_core::types::RawNavEntry;

/// Read NAV history JSON from stdin if data is being piped.
/// Returns None when stdin is a TTY (interactive).
pub fn read_nav_stdin() -> Result<Option<Vec<RawNavEntry>>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let entries: Vec<RawNavEntry> = serde_json::from_str(trimmed)
        .map_err(|e| format!("Stdin is not a NAV history JSON array: {e}"))?;
    Ok(Some(entries))
}
