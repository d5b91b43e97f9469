use anyhow::{Context, Result};
use recylog_store::{Store, export_csv};
use std::path::Path;

pub fn handle(store: &Store, path: &Path) -> Result<()> {
    let written = export_csv(store, path)
        .with_context(|| format!("Failed to export to {}", path.display()))?;

    println!("Exported {} materials to {}", written, path.display());
    Ok(())
}
