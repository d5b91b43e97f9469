use anyhow::{Result, bail};
use recylog_store::Store;
use recylog_types::MaterialRecord;

#[allow(clippy::too_many_arguments)]
pub fn handle(
    store: &Store,
    id: Option<String>,
    name: String,
    material_type: String,
    quantity: f64,
    value: f64,
    location: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let record = MaterialRecord::new(
        id,
        name,
        material_type,
        quantity,
        value,
        location,
        status,
        None,
    )?;

    if !store.insert(&record)? {
        bail!("A material with id '{}' already exists", record.id);
    }

    println!("Added material '{}' with id {}", record.name, record.id);
    Ok(())
}
