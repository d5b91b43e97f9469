use crate::error::{Error, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status assigned when the caller leaves it blank.
pub const DEFAULT_STATUS: &str = "Available";

/// Location assigned when the caller leaves it blank.
pub const DEFAULT_LOCATION: &str = "unspecified";

/// Sentinel filter value meaning "do not filter on this field".
pub const FILTER_ALL: &str = "All";

/// Known material categories. The field itself is an open string; this
/// list only drives CLI suggestions and sample data.
pub const MATERIAL_TYPES: [&str; 10] = [
    "Solid",
    "Hazardous",
    "Organic",
    "Liquid",
    "Metallic",
    "Paper",
    "Glass",
    "Electronic",
    "Textile",
    "Chemical",
];

/// Known lifecycle statuses.
pub const STATUSES: [&str; 5] = ["Available", "In Use", "Depleted", "Damaged", "Under Repair"];

/// One tracked material. The id is unique within a store and stable
/// across edits; `recorded_date` reflects creation and is not refreshed
/// by updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub id: String,
    pub name: String,
    pub material_type: String,
    pub quantity: f64,
    pub value: f64,
    pub location: String,
    pub status: String,
    pub recorded_date: NaiveDate,
}

impl MaterialRecord {
    /// Build a record, applying the documented defaults for blank
    /// optional fields. This is the single defaulting path for both the
    /// `add` command and CSV import.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<String>,
        name: String,
        material_type: String,
        quantity: f64,
        value: f64,
        location: Option<String>,
        status: Option<String>,
        recorded_date: Option<NaiveDate>,
    ) -> Result<Self> {
        let record = Self {
            id: id.filter(|s| !s.trim().is_empty()).unwrap_or_else(generate_id),
            name,
            material_type,
            quantity,
            value,
            location: location
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            status: status
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            recorded_date: recorded_date.unwrap_or_else(today),
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the invariants enforced at the input boundary.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingField("name"));
        }
        if self.material_type.trim().is_empty() {
            return Err(Error::MissingField("material type"));
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(Error::NegativeNumber {
                field: "quantity",
                value: self.quantity,
            });
        }
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(Error::NegativeNumber {
                field: "value",
                value: self.value,
            });
        }
        Ok(())
    }
}

/// Generate a fresh record id, e.g. `MAT-20260828143002-a1b2c3`.
pub fn generate_id() -> String {
    let stamp = Utc::now().format("%Y%m%d%H%M%S");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("MAT-{}-{}", stamp, &suffix[..6])
}

/// Today's date in UTC, used as the default `recorded_date`.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
