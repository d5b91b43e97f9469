use crate::args::{AnalysisMode, OutputFormat};
use crate::output::ConsoleRenderer;
use anyhow::{Result, bail};
use recylog_report::render;
use recylog_store::Store;

pub fn handle(
    store: &Store,
    renderer: &ConsoleRenderer,
    format: OutputFormat,
    mode: AnalysisMode,
) -> Result<()> {
    // Analysis reports are prose; the numbers behind the full mode are
    // available as JSON through `stats`.
    if format == OutputFormat::Json {
        bail!("analysis output is plain text only; use 'stats --format json' for the raw numbers");
    }

    let lines = match mode {
        AnalysisMode::Full => {
            let stats = store.statistics()?;
            render::full_analysis(&stats)
        }
        AnalysisMode::Trends => render::trends(),
        AnalysisMode::Forecast => render::forecast(),
    };

    renderer.print_lines(&lines);
    Ok(())
}
