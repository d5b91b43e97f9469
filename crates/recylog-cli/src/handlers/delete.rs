use anyhow::{Result, bail};
use recylog_store::Store;

pub fn handle(store: &Store, id: &str) -> Result<()> {
    if !store.delete(id)? {
        bail!("No material with id '{}'", id);
    }

    println!("Deleted material {}", id);
    Ok(())
}
