use crate::args::{ChartKind, OutputFormat};
use crate::output::ConsoleRenderer;
use anyhow::{Result, bail};
use recylog_report::render;
use recylog_store::Store;

pub fn handle(
    store: &Store,
    renderer: &ConsoleRenderer,
    format: OutputFormat,
    kind: ChartKind,
) -> Result<()> {
    // Charts are inherently textual; the record snapshot behind them is
    // available as JSON through `list`.
    if format == OutputFormat::Json {
        bail!("chart output is plain text only; use 'list --format json' for the raw records");
    }

    let records = store.get_all()?;

    let lines = match kind {
        ChartKind::Bars => render::bar_chart(&records),
        ChartKind::Pie => render::pie_chart(&records),
        ChartKind::Lines => render::line_chart(&records),
        ChartKind::Histogram => render::histogram_chart(&records),
        ChartKind::Scatter => render::scatter_chart(&records),
        ChartKind::Compare => render::comparative_chart(&records),
    };

    renderer.print_lines(&lines);
    Ok(())
}
