use std::fs;
use std::path::Path;

use fund_analytics_core::types::RawNavEntry;

/// Read NAV history from a JSON file holding an array of `{date, nav}`
/// entries.
pub fn read_nav_json(path: &str) -> Result<Vec<RawNavEntry>, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let entries: Vec<RawNavEntry> = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(entries)
}

/// Read NAV history from a CSV file with `date,nav` columns.
pub fn read_nav_csv(path: &str) -> Result<Vec<RawNavEntry>, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let mut reader = csv::Reader::from_path(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;

    let mut entries = Vec::new();
    for record in reader.deserialize::<RawNavEntry>() {
        let entry =
            record.map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Resolve and validate the path, preventing directory traversal.
fn resolve_path(path: &str) -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }
    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}
