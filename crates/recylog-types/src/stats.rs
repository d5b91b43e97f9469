use serde::Serialize;

/// Aggregated totals for one distinct value of a grouping key (material
/// type or location). Derived per report invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub key: String,
    pub count: usize,
    pub quantity_sum: f64,
    pub value_sum: f64,
    pub value_avg: f64,
}

/// Totals across an entire record snapshot. All zero for an empty
/// snapshot; average never divides by zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverallStats {
    pub count: usize,
    pub quantity_sum: f64,
    pub value_sum: f64,
    pub value_avg: f64,
}

/// The store-level aggregate query result: overall totals plus one
/// bucket per distinct type and per distinct location.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Statistics {
    pub overall: OverallStats,
    pub by_type: Vec<Bucket>,
    pub by_location: Vec<Bucket>,
}
