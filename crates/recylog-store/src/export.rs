use crate::Store;
use anyhow::{Context, Result};
use std::path::Path;

pub(crate) const CSV_HEADER: [&str; 8] = [
    "ID", "Material", "Type", "Quantity", "Value", "Location", "Status", "Date",
];

/// Serialize every record to a headered CSV file. Numeric fields are
/// written with the shortest representation that parses back to the
/// same f64, so an export/import cycle is lossless. Returns the number
/// of rows written.
pub fn export_csv(store: &Store, path: &Path) -> Result<usize> {
    let records = store.get_all()?;

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    for record in &records {
        writer.write_record([
            record.id.as_str(),
            record.name.as_str(),
            record.material_type.as_str(),
            &record.quantity.to_string(),
            &record.value.to_string(),
            record.location.as_str(),
            record.status.as_str(),
            &record.recorded_date.format("%Y-%m-%d").to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(records.len())
}
