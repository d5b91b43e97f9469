use crate::Store;
use anyhow::Result;
use recylog_types::{MaterialRecord, generate_id, today};

/// Starter data covering every known material type, a spread of
/// locations and a few non-default statuses so charts and filters have
/// something to show on a fresh install.
pub fn sample_records() -> Vec<MaterialRecord> {
    const ROWS: [(&str, &str, f64, f64, &str, &str); 22] = [
        ("PET Plastic Bottle", "Solid", 25.0, 15.0, "Depot A", "Available"),
        ("HDPE Plastic Bag", "Solid", 100.0, 5.0, "Depot B", "Available"),
        ("Corrugated Cardboard", "Solid", 30.0, 20.0, "Depot A", "Available"),
        ("Car Battery 12V", "Hazardous", 3.0, 150.0, "Secure Depot", "Available"),
        ("AA Alkaline Batteries", "Hazardous", 50.0, 8.0, "Secure Depot", "Available"),
        ("Mercury Thermometer", "Hazardous", 2.0, 5.0, "Secure Depot", "Damaged"),
        ("Food Scraps", "Organic", 40.0, 0.0, "Composter", "Available"),
        ("Dry Leaves", "Organic", 60.0, 0.0, "Composter", "Available"),
        ("Ground Coffee", "Organic", 8.0, 0.0, "Composter", "Available"),
        ("Used Cooking Oil", "Liquid", 12.0, 15.0, "Tank A", "Available"),
        ("Leftover Paint", "Liquid", 3.0, 20.0, "Tank C", "Available"),
        ("Aluminum Cans", "Metallic", 40.0, 35.0, "Metal Yard", "Available"),
        ("Copper Wire", "Metallic", 12.0, 60.0, "Metal Yard", "Available"),
        ("Newspapers", "Paper", 50.0, 8.0, "Paper Depot", "Available"),
        ("Office Paper", "Paper", 40.0, 10.0, "Paper Depot", "Available"),
        ("Green Glass Bottles", "Glass", 25.0, 15.0, "Glass Depot", "Available"),
        ("Broken Mirrors", "Glass", 5.0, 5.0, "Glass Depot", "Damaged"),
        ("Desktop Computers", "Electronic", 5.0, 200.0, "Electronics Depot", "Under Repair"),
        ("Mobile Phones", "Electronic", 15.0, 50.0, "Electronics Depot", "Available"),
        ("Used Clothing", "Textile", 50.0, 10.0, "Textile Depot", "Available"),
        ("Cleaning Products", "Chemical", 15.0, 25.0, "Chemical Depot", "Available"),
        ("Solvents", "Chemical", 8.0, 45.0, "Chemical Depot", "In Use"),
    ];

    ROWS.iter()
        .map(|(name, material_type, quantity, value, location, status)| MaterialRecord {
            id: generate_id(),
            name: name.to_string(),
            material_type: material_type.to_string(),
            quantity: *quantity,
            value: *value,
            location: location.to_string(),
            status: status.to_string(),
            recorded_date: today(),
        })
        .collect()
}

/// Insert the sample set when the store is empty. Returns the number of
/// records added (zero when data already exists).
pub fn seed(store: &Store) -> Result<usize> {
    if !store.is_empty()? {
        return Ok(0);
    }

    let mut added = 0;
    for record in sample_records() {
        if store.insert(&record)? {
            added += 1;
        }
    }
    Ok(added)
}
