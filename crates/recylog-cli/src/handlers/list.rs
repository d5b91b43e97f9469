use crate::args::OutputFormat;
use crate::output::ConsoleRenderer;
use anyhow::Result;
use recylog_store::Store;

pub fn handle(store: &Store, renderer: &ConsoleRenderer, format: OutputFormat) -> Result<()> {
    let records = store.get_all()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Plain => {
            if records.is_empty() {
                println!("No materials recorded");
                return Ok(());
            }
            renderer.print_table(&records);
            println!();
            println!("{} materials", records.len());
        }
    }

    Ok(())
}
