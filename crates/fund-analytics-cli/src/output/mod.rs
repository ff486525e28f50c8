pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
///
/// Envelope warnings ride along on stderr for the csv and minimal forms,
/// which cannot carry them inline.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => {
            warn_stderr(value);
            csv_out::print_csv(value);
        }
        OutputFormat::Minimal => {
            warn_stderr(value);
            minimal::print_minimal(value);
        }
    }
}

fn warn_stderr(value: &Value) {
    let Some(Value::Array(warnings)) = value.get("warnings") else {
        return;
    };
    for w in warnings {
        if let Value::String(s) = w {
            eprintln!("warning: {s}");
        }
    }
}
