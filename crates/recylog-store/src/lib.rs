//! Durable storage for material records.
//!
//! The store is deliberately thin: every mutating call is a single SQL
//! statement, so each operation is atomic from the caller's point of
//! view and no partial row is ever observable. Aggregate queries are
//! computed in SQL; heavier report shaping lives in recylog-report.

mod db;
mod export;
mod import;
mod samples;

pub use db::Store;
pub use export::export_csv;
pub use import::{ImportSummary, import_csv};
pub use samples::{sample_records, seed};
