//! Report builders: each function maps an immutable snapshot (records
//! or pre-aggregated statistics) to a block of styled lines. Rendering
//! is idempotent; identical input reproduces identical text.

mod canned;
mod charts;
mod stats;

pub use canned::{forecast, trends};
pub use charts::{
    bar_chart, comparative_chart, histogram_chart, line_chart, pie_chart, scatter_chart,
};
pub use stats::{full_analysis, summary};

use crate::span::{Line, Span};

pub(crate) const FRAME_WIDTH: usize = 80;
pub(crate) const SECTION_WIDTH: usize = 60;
pub(crate) const LABEL_WIDTH: usize = 15;

pub(crate) fn frame_rule() -> Line {
    vec![Span::plain("=".repeat(FRAME_WIDTH))]
}

/// Framed, centered report title.
pub(crate) fn banner(title: &str) -> Vec<Line> {
    let centered = format!("{:^width$}", title, width = FRAME_WIDTH)
        .trim_end()
        .to_string();
    vec![
        frame_rule(),
        vec![Span::heading(centered)],
        frame_rule(),
        Vec::new(),
    ]
}

pub(crate) fn section(title: &str) -> Vec<Line> {
    vec![
        vec![Span::heading(title)],
        vec![Span::plain("-".repeat(SECTION_WIDTH))],
    ]
}

pub(crate) fn no_data() -> Vec<Line> {
    vec![vec![Span::plain("No data to display")]]
}

/// Truncate to `max` characters, appending "..." when cut.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
