use anyhow::{Result, bail};
use recylog_store::Store;
use recylog_types::MaterialRecord;

/// Merge the supplied flags over the stored record. Fields left out
/// keep their current values, and the recorded date always survives an
/// edit unchanged.
#[allow(clippy::too_many_arguments)]
pub fn handle(
    store: &Store,
    id: &str,
    name: Option<String>,
    material_type: Option<String>,
    quantity: Option<f64>,
    value: Option<f64>,
    location: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let Some(existing) = store.get(id)? else {
        bail!("No material with id '{}'", id);
    };

    let merged = MaterialRecord::new(
        Some(existing.id.clone()),
        name.unwrap_or(existing.name),
        material_type.unwrap_or(existing.material_type),
        quantity.unwrap_or(existing.quantity),
        value.unwrap_or(existing.value),
        Some(location.unwrap_or(existing.location)),
        Some(status.unwrap_or(existing.status)),
        Some(existing.recorded_date),
    )?;

    if !store.update(id, &merged)? {
        bail!("No material with id '{}'", id);
    }

    println!("Updated material {}", id);
    Ok(())
}
