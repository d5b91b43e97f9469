use crate::args::OutputFormat;
use crate::output::ConsoleRenderer;
use anyhow::Result;
use recylog_report::render;
use recylog_store::Store;

pub fn handle(store: &Store, renderer: &ConsoleRenderer, format: OutputFormat) -> Result<()> {
    let stats = store.statistics()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            renderer.print_lines(&render::summary(&stats));
        }
    }

    Ok(())
}
