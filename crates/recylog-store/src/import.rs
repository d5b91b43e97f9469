use crate::Store;
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use recylog_types::{Error as ValidationError, MaterialRecord};
use std::path::Path;

/// Outcome of a bulk import: rows that made it into the store versus
/// rows that were rejected (bad fields, duplicate ids).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Parse a headered CSV in the export layout and insert each row.
///
/// Material, Type, Quantity and Value are required; a row missing one,
/// or carrying a non-numeric or negative number, is skipped with a
/// warning. ID, Location, Status and Date are optional columns and fall
/// back to the documented defaults (generated id, "unspecified",
/// "Available", today). Duplicate ids are skipped, never overwritten.
pub fn import_csv(store: &Store, path: &Path) -> Result<ImportSummary> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open import file: {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let id_col = column("ID");
    let name_col = column("Material");
    let type_col = column("Type");
    let quantity_col = column("Quantity");
    let value_col = column("Value");
    let location_col = column("Location");
    let status_col = column("Status");
    let date_col = column("Date");

    let (Some(name_col), Some(type_col), Some(quantity_col), Some(value_col)) =
        (name_col, type_col, quantity_col, value_col)
    else {
        bail!(
            "missing required column(s); expected at least Material, Type, Quantity, Value"
        );
    };

    let mut summary = ImportSummary::default();

    for (index, row) in reader.records().enumerate() {
        let line = index + 2; // 1-based, after the header
        let row = row.with_context(|| format!("Failed to read row at line {}", line))?;
        let field = |col: Option<usize>| {
            col.and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let record = parse_row(
            field(id_col),
            field(Some(name_col)),
            field(Some(type_col)),
            field(Some(quantity_col)),
            field(Some(value_col)),
            field(location_col),
            field(status_col),
            field(date_col),
        );

        match record {
            Ok(record) => {
                if store.insert(&record)? {
                    summary.imported += 1;
                } else {
                    eprintln!("Warning: line {}: duplicate id {:?}, skipped", line, record.id);
                    summary.skipped += 1;
                }
            }
            Err(e) => {
                eprintln!("Warning: line {}: {}, skipped", line, e);
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

#[allow(clippy::too_many_arguments)]
fn parse_row(
    id: Option<String>,
    name: Option<String>,
    material_type: Option<String>,
    quantity: Option<String>,
    value: Option<String>,
    location: Option<String>,
    status: Option<String>,
    date: Option<String>,
) -> std::result::Result<MaterialRecord, ValidationError> {
    let name = name.ok_or(ValidationError::MissingField("Material"))?;
    let material_type = material_type.ok_or(ValidationError::MissingField("Type"))?;
    let quantity = parse_number("Quantity", quantity)?;
    let value = parse_number("Value", value)?;
    let recorded_date = match date {
        Some(raw) => Some(
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate(raw))?,
        ),
        None => None,
    };

    MaterialRecord::new(
        id,
        name,
        material_type,
        quantity,
        value,
        location,
        status,
        recorded_date,
    )
}

fn parse_number(
    field: &'static str,
    raw: Option<String>,
) -> std::result::Result<f64, ValidationError> {
    let raw = raw.ok_or(ValidationError::MissingField(field))?;
    raw.parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber { field, raw })
}
