//! Sample record builders and CSV file helpers for tests.

use anyhow::Result;
use chrono::NaiveDate;
use recylog_types::{DEFAULT_LOCATION, DEFAULT_STATUS, MaterialRecord};
use std::path::Path;

/// A fully-populated record with a fixed date, so chart and stats
/// output is deterministic across test runs.
pub fn record(id: &str, name: &str, material_type: &str) -> MaterialRecord {
    MaterialRecord {
        id: id.to_string(),
        name: name.to_string(),
        material_type: material_type.to_string(),
        quantity: 10.0,
        value: 25.0,
        location: DEFAULT_LOCATION.to_string(),
        status: DEFAULT_STATUS.to_string(),
        recorded_date: date(2026, 3, 1),
    }
}

/// A record with explicit numeric fields, for aggregation tests.
pub fn record_with_amounts(
    id: &str,
    name: &str,
    material_type: &str,
    quantity: f64,
    value: f64,
) -> MaterialRecord {
    MaterialRecord {
        quantity,
        value,
        ..record(id, name, material_type)
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Write a CSV file in the import format, one row per tuple of
/// (id, name, type, quantity, value, location, status, date).
pub fn write_csv(path: &Path, rows: &[[&str; 8]]) -> Result<()> {
    let mut content =
        String::from("ID,Material,Type,Quantity,Value,Location,Status,Date\n");
    for row in rows {
        content.push_str(&row.join(","));
        content.push('\n');
    }
    std::fs::write(path, content)?;
    Ok(())
}
