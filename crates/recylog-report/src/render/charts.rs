use super::{LABEL_WIDTH, banner, clip, frame_rule, no_data, section};
use crate::aggregate::{KeyBy, group_by, percentage};
use crate::histogram::{DEFAULT_BINS, HistBin, histogram};
use crate::scale::{BAR_WIDTH, DUAL_BAR_WIDTH, HIST_BAR_WIDTH, bar_len};
use crate::scatter::{DEFAULT_GRID, scatter};
use crate::span::{Line, Span};
use recylog_types::{Bucket, MaterialRecord};

const BAR_GLYPH: &str = "█";
const ALT_BAR_GLYPH: &str = "▓";
const POINT_GLYPH: &str = "●";

/// Horizontal bar chart of quantity and value totals per type.
pub fn bar_chart(records: &[MaterialRecord]) -> Vec<Line> {
    if records.is_empty() {
        return no_data();
    }
    let buckets = group_by(records, KeyBy::Type);
    let max_quantity = series_max(&buckets, |b| b.quantity_sum);
    let max_value = series_max(&buckets, |b| b.value_sum);

    let mut lines = banner("BAR CHART - TOTALS BY TYPE");

    lines.extend(section("QUANTITIES BY TYPE:"));
    for (i, bucket) in buckets.iter().enumerate() {
        let bar = BAR_GLYPH.repeat(bar_len(bucket.quantity_sum, max_quantity, BAR_WIDTH));
        lines.push(vec![
            Span::palette(
                format!(
                    "{:<width$} {:>8.1} ",
                    clip(&bucket.key, LABEL_WIDTH),
                    bucket.quantity_sum,
                    width = LABEL_WIDTH
                ),
                i,
            ),
            Span::palette(bar, i),
        ]);
    }

    lines.push(Vec::new());
    lines.extend(section("VALUES BY TYPE:"));
    for (i, bucket) in buckets.iter().enumerate() {
        let bar = BAR_GLYPH.repeat(bar_len(bucket.value_sum, max_value, BAR_WIDTH));
        lines.push(vec![
            Span::palette(
                format!(
                    "{:<width$} ${:>7.1} ",
                    clip(&bucket.key, LABEL_WIDTH),
                    bucket.value_sum,
                    width = LABEL_WIDTH
                ),
                i,
            ),
            Span::palette(bar, i),
        ]);
    }

    lines.push(Vec::new());
    lines.push(frame_rule());
    lines
}

/// Pie-style percentage listing of quantity and value shares per type.
pub fn pie_chart(records: &[MaterialRecord]) -> Vec<Line> {
    if records.is_empty() {
        return no_data();
    }
    let buckets = group_by(records, KeyBy::Type);
    let total_quantity: f64 = buckets.iter().map(|b| b.quantity_sum).sum();
    let total_value: f64 = buckets.iter().map(|b| b.value_sum).sum();

    let mut lines = banner("PIE CHART - DISTRIBUTION BY TYPE");

    lines.extend(section("QUANTITY DISTRIBUTION:"));
    for (i, bucket) in buckets.iter().enumerate() {
        lines.push(vec![Span::palette(
            format!(
                "{:<width$} {:>8.1} ({:>5.1}%)",
                clip(&bucket.key, LABEL_WIDTH),
                bucket.quantity_sum,
                percentage(bucket.quantity_sum, total_quantity),
                width = LABEL_WIDTH
            ),
            i,
        )]);
    }

    lines.push(Vec::new());
    lines.extend(section("VALUE DISTRIBUTION:"));
    for (i, bucket) in buckets.iter().enumerate() {
        lines.push(vec![Span::palette(
            format!(
                "{:<width$} ${:>7.1} ({:>5.1}%)",
                clip(&bucket.key, LABEL_WIDTH),
                bucket.value_sum,
                percentage(bucket.value_sum, total_value),
                width = LABEL_WIDTH
            ),
            i,
        )]);
    }

    lines.push(Vec::new());
    lines.push(frame_rule());
    lines
}

/// Line-style chart: one dash run per type ending in a point marker.
pub fn line_chart(records: &[MaterialRecord]) -> Vec<Line> {
    if records.is_empty() {
        return no_data();
    }
    let buckets = group_by(records, KeyBy::Type);
    let max_quantity = series_max(&buckets, |b| b.quantity_sum);
    let max_value = series_max(&buckets, |b| b.value_sum);

    let mut lines = banner("LINE CHART - SERIES BY TYPE");

    lines.extend(section("QUANTITY SERIES:"));
    for (i, bucket) in buckets.iter().enumerate() {
        let run = "─".repeat(bar_len(bucket.quantity_sum, max_quantity, DUAL_BAR_WIDTH));
        lines.push(vec![
            Span::palette(
                format!(
                    "{:<width$} {:>8.1} ",
                    clip(&bucket.key, LABEL_WIDTH),
                    bucket.quantity_sum,
                    width = LABEL_WIDTH
                ),
                i,
            ),
            Span::palette(format!("{}{}", run, POINT_GLYPH), i),
        ]);
    }

    lines.push(Vec::new());
    lines.extend(section("VALUE SERIES:"));
    for (i, bucket) in buckets.iter().enumerate() {
        let run = "─".repeat(bar_len(bucket.value_sum, max_value, DUAL_BAR_WIDTH));
        lines.push(vec![
            Span::palette(
                format!(
                    "{:<width$} ${:>7.1} ",
                    clip(&bucket.key, LABEL_WIDTH),
                    bucket.value_sum,
                    width = LABEL_WIDTH
                ),
                i,
            ),
            Span::palette(format!("{}{}", run, POINT_GLYPH), i),
        ]);
    }

    lines.push(Vec::new());
    lines.push(frame_rule());
    lines
}

/// Ten-bin histograms of the value and quantity distributions.
pub fn histogram_chart(records: &[MaterialRecord]) -> Vec<Line> {
    if records.is_empty() {
        return no_data();
    }
    let values: Vec<f64> = records.iter().map(|r| r.value).collect();
    let quantities: Vec<f64> = records.iter().map(|r| r.quantity).collect();

    let mut lines = banner("HISTOGRAM - VALUE AND QUANTITY DISTRIBUTIONS");

    lines.extend(section("VALUE DISTRIBUTION:"));
    lines.extend(histogram_lines(&histogram(&values, DEFAULT_BINS), true));

    lines.push(Vec::new());
    lines.extend(section("QUANTITY DISTRIBUTION:"));
    lines.extend(histogram_lines(&histogram(&quantities, DEFAULT_BINS), false));

    lines.push(Vec::new());
    lines.push(frame_rule());
    lines
}

fn histogram_lines(bins: &[HistBin], money: bool) -> Vec<Line> {
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);

    bins.iter()
        .enumerate()
        .map(|(i, bin)| {
            let bar = BAR_GLYPH.repeat(bar_len(bin.count as f64, max_count as f64, HIST_BAR_WIDTH));
            let edges = if money {
                format!("${:>6.1}-${:>6.1}", bin.lo, bin.hi)
            } else {
                format!("{:>6.1}-{:>6.1}", bin.lo, bin.hi)
            };
            vec![
                Span::palette(format!("{} {:>3} ", edges, bin.count), i),
                Span::palette(bar, i),
            ]
        })
        .collect()
}

/// Quantity/value scatter grid plus a short record detail listing.
pub fn scatter_chart(records: &[MaterialRecord]) -> Vec<Line> {
    if records.is_empty() {
        return no_data();
    }
    let points: Vec<(f64, f64)> = records.iter().map(|r| (r.quantity, r.value)).collect();
    let grid = scatter(&points, DEFAULT_GRID);
    let side = grid.side();

    let mut lines = banner("SCATTER - QUANTITY VS VALUE");

    lines.extend(section("QUANTITY-VALUE RELATION:"));
    lines.push(vec![Span::plain("Value ↑")]);

    // top row first: highest y at the top of the printout
    for row in (0..side).rev() {
        let mut line: Line = vec![Span::plain("│")];
        for col in 0..side {
            if grid.occupied(col, row) {
                line.push(Span::palette(POINT_GLYPH, 0));
            } else {
                line.push(Span::plain(" "));
            }
        }
        line.push(Span::plain("│"));
        lines.push(line);
    }
    lines.push(vec![Span::plain(format!(
        "└{}┘ Quantity →",
        "─".repeat(side)
    ))]);

    lines.push(Vec::new());
    lines.extend(section("RECORD DETAIL:"));
    for (i, record) in records.iter().take(10).enumerate() {
        lines.push(vec![Span::palette(
            format!(
                "{:>2}. {:<20} qty:{:>6.1} val:${:>6.1}",
                i + 1,
                clip(&record.name, 20),
                record.quantity,
                record.value
            ),
            i,
        )]);
    }

    lines.push(Vec::new());
    lines.push(frame_rule());
    lines
}

/// Dual-series comparison: adjacent quantity and value bars per type
/// and per location, with distinct glyphs for the two series.
pub fn comparative_chart(records: &[MaterialRecord]) -> Vec<Line> {
    if records.is_empty() {
        return no_data();
    }

    let mut lines = banner("COMPARATIVE - TYPES AND LOCATIONS");

    lines.extend(section("BY MATERIAL TYPE:"));
    lines.extend(dual_bar_lines(&group_by(records, KeyBy::Type)));

    lines.push(Vec::new());
    lines.extend(section("BY LOCATION:"));
    lines.extend(dual_bar_lines(&group_by(records, KeyBy::Location)));

    lines.push(Vec::new());
    lines.push(frame_rule());
    lines
}

fn dual_bar_lines(buckets: &[Bucket]) -> Vec<Line> {
    let max_quantity = series_max(buckets, |b| b.quantity_sum);
    let max_value = series_max(buckets, |b| b.value_sum);

    buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let quantity_bar =
                BAR_GLYPH.repeat(bar_len(bucket.quantity_sum, max_quantity, DUAL_BAR_WIDTH));
            let value_bar =
                ALT_BAR_GLYPH.repeat(bar_len(bucket.value_sum, max_value, DUAL_BAR_WIDTH));
            vec![
                Span::palette(
                    format!("{:<width$} qty:", clip(&bucket.key, LABEL_WIDTH), width = LABEL_WIDTH),
                    i,
                ),
                Span::palette(quantity_bar, 2),
                Span::palette(" val:", i),
                Span::palette(value_bar, 3),
            ]
        })
        .collect()
}

fn series_max(buckets: &[Bucket], field: impl Fn(&Bucket) -> f64) -> f64 {
    buckets.iter().map(field).fold(0.0, f64::max)
}
