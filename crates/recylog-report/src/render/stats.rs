use super::{banner, frame_rule, section};
use crate::aggregate::percentage;
use crate::span::{Line, Span};
use recylog_types::{DEFAULT_LOCATION, Statistics};

/// Compact statistics summary: overall totals, then per-type and
/// per-location roll-ups.
pub fn summary(stats: &Statistics) -> Vec<Line> {
    if stats.overall.count == 0 {
        return vec![vec![Span::plain("No data available for statistics")]];
    }

    let mut lines: Vec<Line> = vec![
        vec![Span::heading("--- General Statistics ---")],
        vec![Span::plain(format!("Total Records: {}", stats.overall.count))],
        vec![Span::plain(format!(
            "Total Quantity: {:.2}",
            stats.overall.quantity_sum
        ))],
        vec![Span::plain(format!(
            "Total Inventory Value: ${:.2}",
            stats.overall.value_sum
        ))],
        vec![Span::plain(format!(
            "Average Value per Material: ${:.2}",
            stats.overall.value_avg
        ))],
        Vec::new(),
        vec![Span::heading("--- Materials by Type ---")],
    ];

    for bucket in &stats.by_type {
        lines.push(vec![Span::plain(format!(
            "  - {}: {} items | {:.2} units | value: ${:.2}",
            bucket.key, bucket.count, bucket.quantity_sum, bucket.value_sum
        ))]);
    }

    lines.push(Vec::new());
    lines.push(vec![Span::heading("--- Materials by Location ---")]);
    for bucket in &stats.by_location {
        let key = if bucket.key.is_empty() {
            DEFAULT_LOCATION
        } else {
            &bucket.key
        };
        lines.push(vec![Span::plain(format!(
            "  - {}: {} items",
            key, bucket.count
        ))]);
    }

    lines
}

/// Long-form analysis with percentage shares and per-bucket averages.
pub fn full_analysis(stats: &Statistics) -> Vec<Line> {
    if stats.overall.count == 0 {
        return vec![vec![Span::plain("No data available for analysis")]];
    }

    let mut lines = banner("FULL DATA ANALYSIS");

    lines.extend(section("OVERVIEW:"));
    lines.push(plain(format!("   • Total materials: {}", stats.overall.count)));
    lines.push(plain(format!(
        "   • Total quantity: {:.2}",
        stats.overall.quantity_sum
    )));
    lines.push(plain(format!(
        "   • Total value: ${:.2}",
        stats.overall.value_sum
    )));
    lines.push(plain(format!(
        "   • Average value: ${:.2}",
        stats.overall.value_avg
    )));
    lines.push(Vec::new());

    lines.extend(section("BY TYPE:"));
    for bucket in &stats.by_type {
        lines.push(plain(format!("   • {}:", bucket.key)));
        lines.push(plain(format!(
            "     - quantity: {:.2} ({:.1}%)",
            bucket.quantity_sum,
            percentage(bucket.quantity_sum, stats.overall.quantity_sum)
        )));
        lines.push(plain(format!(
            "     - value: ${:.2} ({:.1}%)",
            bucket.value_sum,
            percentage(bucket.value_sum, stats.overall.value_sum)
        )));
        lines.push(plain(format!("     - materials: {}", bucket.count)));
        lines.push(plain(format!(
            "     - average value: ${:.2}",
            bucket.value_avg
        )));
    }
    lines.push(Vec::new());

    lines.extend(section("BY LOCATION:"));
    for bucket in &stats.by_location {
        let key = if bucket.key.is_empty() {
            DEFAULT_LOCATION
        } else {
            &bucket.key
        };
        lines.push(plain(format!(
            "   • {}: {} materials ({:.1}%)",
            key,
            bucket.count,
            percentage(bucket.count as f64, stats.overall.count as f64)
        )));
    }

    lines.push(Vec::new());
    lines.push(frame_rule());
    lines
}

fn plain(text: String) -> Line {
    vec![Span::plain(text)]
}
