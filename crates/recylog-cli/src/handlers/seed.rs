use anyhow::Result;
use recylog_store::{Store, seed};

pub fn handle(store: &Store) -> Result<()> {
    let inserted = seed(store)?;

    if inserted == 0 {
        println!("Store already has data; sample set not loaded");
    } else {
        println!("Loaded {} sample materials", inserted);
    }

    Ok(())
}
