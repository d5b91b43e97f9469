use anyhow::{Context, Result};
use recylog_store::{Store, import_csv};
use std::path::Path;

pub fn handle(store: &Store, path: &Path) -> Result<()> {
    let summary = import_csv(store, path)
        .with_context(|| format!("Failed to import from {}", path.display()))?;

    println!(
        "Imported {} materials ({} skipped)",
        summary.imported, summary.skipped
    );
    Ok(())
}
