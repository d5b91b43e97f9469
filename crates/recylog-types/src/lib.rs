//! Domain types shared across the recylog workspace.

mod error;
mod record;
mod stats;

pub use error::{Error, Result};
pub use stats::{Bucket, OverallStats, Statistics};
pub use record::{
    MaterialRecord, DEFAULT_LOCATION, DEFAULT_STATUS, FILTER_ALL, MATERIAL_TYPES, STATUSES,
    generate_id, today,
};
