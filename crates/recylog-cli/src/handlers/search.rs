use crate::args::OutputFormat;
use crate::output::ConsoleRenderer;
use anyhow::Result;
use recylog_store::Store;

pub fn handle(
    store: &Store,
    renderer: &ConsoleRenderer,
    format: OutputFormat,
    name: &str,
    material_type: &str,
    status: &str,
) -> Result<()> {
    let records = store.search(name, material_type, status)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Plain => {
            if records.is_empty() {
                println!("No materials matched the search");
                return Ok(());
            }
            renderer.print_table(&records);
            println!();
            println!("{} materials matched", records.len());
        }
    }

    Ok(())
}
