use anyhow::{Context, Result};
use chrono::NaiveDate;
use recylog_types::{Bucket, MaterialRecord, OverallStats, Statistics, FILTER_ALL};
use rusqlite::{params, Connection, Row};
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-backed store for material records.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS materials (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                material_type TEXT NOT NULL,
                quantity REAL NOT NULL,
                value REAL NOT NULL,
                location TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'Available',
                recorded_date TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_materials_date ON materials(recorded_date DESC);
            CREATE INDEX IF NOT EXISTS idx_materials_type ON materials(material_type);
            "#,
        )?;

        Ok(())
    }

    /// Insert a record. Returns `Ok(false)` without writing anything
    /// when the id is already taken.
    pub fn insert(&self, record: &MaterialRecord) -> Result<bool> {
        let inserted = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO materials
                (id, name, material_type, quantity, value, location, status, recorded_date)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                &record.id,
                &record.name,
                &record.material_type,
                record.quantity,
                record.value,
                &record.location,
                &record.status,
                record.recorded_date.format(DATE_FORMAT).to_string(),
            ],
        )?;

        Ok(inserted > 0)
    }

    /// All records, newest recorded_date first. Ties keep insertion
    /// order via rowid.
    pub fn get_all(&self) -> Result<Vec<MaterialRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, material_type, quantity, value, location, status, recorded_date
            FROM materials
            ORDER BY recorded_date DESC, rowid
            "#,
        )?;

        let records = stmt
            .query_map([], row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    pub fn get(&self, id: &str) -> Result<Option<MaterialRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, material_type, quantity, value, location, status, recorded_date
            FROM materials
            WHERE id = ?1
            "#,
        )?;

        let mut rows = stmt.query_map([id], row_to_record)?;
        match rows.next() {
            Some(record) => Ok(Some(record?)),
            None => Ok(None),
        }
    }

    /// Filtered query. `text` matches the name case-insensitively as a
    /// substring when non-empty; type and status are exact matches
    /// unless the filter is the sentinel `"All"`. Filters compose with
    /// AND; an empty result is not an error.
    pub fn search(
        &self,
        text: &str,
        type_filter: &str,
        status_filter: &str,
    ) -> Result<Vec<MaterialRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, material_type, quantity, value, location, status, recorded_date
            FROM materials
            WHERE (?1 = '' OR instr(lower(name), lower(?1)) > 0)
              AND (?2 = ?4 OR material_type = ?2)
              AND (?3 = ?4 OR status = ?3)
            ORDER BY recorded_date DESC, rowid
            "#,
        )?;

        let records = stmt
            .query_map(
                params![text, type_filter, status_filter, FILTER_ALL],
                row_to_record,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Replace every field except the id. The caller supplies the
    /// recorded_date; the update path passes the original creation date
    /// through untouched. Returns `Ok(false)` when the id is unknown.
    pub fn update(&self, id: &str, record: &MaterialRecord) -> Result<bool> {
        let changed = self.conn.execute(
            r#"
            UPDATE materials
            SET name = ?1, material_type = ?2, quantity = ?3, value = ?4,
                location = ?5, status = ?6, recorded_date = ?7
            WHERE id = ?8
            "#,
            params![
                &record.name,
                &record.material_type,
                record.quantity,
                record.value,
                &record.location,
                &record.status,
                record.recorded_date.format(DATE_FORMAT).to_string(),
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    /// Delete by id. Returns `Ok(false)` when the id is unknown.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM materials WHERE id = ?1", [id])?;

        Ok(deleted > 0)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM materials", [], |row| row.get(0))?;

        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }

    /// Overall totals plus one bucket per distinct type and location,
    /// computed in SQL. Buckets come back sorted by key.
    pub fn statistics(&self) -> Result<Statistics> {
        let overall = self.conn.query_row(
            r#"
            SELECT COUNT(*),
                   COALESCE(SUM(quantity), 0),
                   COALESCE(SUM(value), 0),
                   COALESCE(AVG(value), 0)
            FROM materials
            "#,
            [],
            |row| {
                Ok(OverallStats {
                    count: row.get::<_, i64>(0)? as usize,
                    quantity_sum: row.get(1)?,
                    value_sum: row.get(2)?,
                    value_avg: row.get(3)?,
                })
            },
        )?;

        Ok(Statistics {
            overall,
            by_type: self.grouped_buckets("material_type")?,
            by_location: self.grouped_buckets("location")?,
        })
    }

    fn grouped_buckets(&self, column: &str) -> Result<Vec<Bucket>> {
        // column is one of two fixed identifiers, never user input
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {col}, COUNT(*), SUM(quantity), SUM(value), AVG(value)
            FROM materials
            GROUP BY {col}
            ORDER BY {col}
            "#,
            col = column
        ))?;

        let buckets = stmt
            .query_map([], |row| {
                Ok(Bucket {
                    key: row.get(0)?,
                    count: row.get::<_, i64>(1)? as usize,
                    quantity_sum: row.get(2)?,
                    value_sum: row.get(3)?,
                    value_avg: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(buckets)
    }
}

fn row_to_record(row: &Row) -> rusqlite::Result<MaterialRecord> {
    let date: String = row.get(7)?;
    let recorded_date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(MaterialRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        material_type: row.get(2)?,
        quantity: row.get(3)?,
        value: row.get(4)?,
        location: row.get(5)?,
        status: row.get(6)?,
        recorded_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use recylog_types::FILTER_ALL;

    fn record(id: &str, name: &str, material_type: &str, date: &str) -> MaterialRecord {
        MaterialRecord {
            id: id.to_string(),
            name: name.to_string(),
            material_type: material_type.to_string(),
            quantity: 2.0,
            value: 5.0,
            location: "Depot A".to_string(),
            status: "Available".to_string(),
            recorded_date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
        }
    }

    #[test]
    fn test_schema_initialization() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_insert_and_get() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.insert(&record("m-1", "PET Bottle", "Solid", "2026-08-01")).unwrap());

        let fetched = store.get("m-1").unwrap().unwrap();
        assert_eq!(fetched.name, "PET Bottle");
        assert_eq!(fetched.recorded_date.to_string(), "2026-08-01");
    }

    #[test]
    fn test_insert_duplicate_id_is_rejected() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.insert(&record("m-1", "PET Bottle", "Solid", "2026-08-01")).unwrap());
        assert!(!store.insert(&record("m-1", "Other", "Glass", "2026-08-02")).unwrap());

        // the losing insert must not overwrite the existing row
        assert_eq!(store.get("m-1").unwrap().unwrap().name, "PET Bottle");
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_get_all_orders_by_date_descending() {
        let store = Store::open_in_memory().unwrap();
        store.insert(&record("m-1", "Old", "Solid", "2026-01-05")).unwrap();
        store.insert(&record("m-2", "New", "Solid", "2026-08-20")).unwrap();
        store.insert(&record("m-3", "Mid", "Solid", "2026-04-11")).unwrap();

        let ids: Vec<_> = store.get_all().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["m-2", "m-3", "m-1"]);
    }

    #[test]
    fn test_search_name_is_case_insensitive_substring() {
        let store = Store::open_in_memory().unwrap();
        store.insert(&record("m-1", "Glass Bottle", "Glass", "2026-08-01")).unwrap();
        store.insert(&record("m-2", "BOTTLE cap", "Metallic", "2026-08-02")).unwrap();
        store.insert(&record("m-3", "Newspaper", "Paper", "2026-08-03")).unwrap();

        let hits = store.search("bottle", FILTER_ALL, FILTER_ALL).unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.name.to_lowercase().contains("bottle")));
    }

    #[test]
    fn test_search_filters_compose_with_and() {
        let store = Store::open_in_memory().unwrap();
        store.insert(&record("m-1", "Glass Bottle", "Glass", "2026-08-01")).unwrap();
        let mut in_use = record("m-2", "Plastic Bottle", "Solid", "2026-08-02");
        in_use.status = "In Use".to_string();
        store.insert(&in_use).unwrap();

        let hits = store.search("bottle", "Solid", "In Use").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "m-2");

        // empty result is a valid outcome, not an error
        let none = store.search("bottle", "Organic", FILTER_ALL).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_date() {
        let store = Store::open_in_memory().unwrap();
        store.insert(&record("m-1", "Tin Can", "Metallic", "2026-03-14")).unwrap();

        let mut edited = store.get("m-1").unwrap().unwrap();
        edited.quantity = 9.0;
        edited.status = "Depleted".to_string();
        assert!(store.update("m-1", &edited).unwrap());

        let fetched = store.get("m-1").unwrap().unwrap();
        assert_eq!(fetched.quantity, 9.0);
        assert_eq!(fetched.status, "Depleted");
        assert_eq!(fetched.recorded_date.to_string(), "2026-03-14");
    }

    #[test]
    fn test_update_unknown_id_returns_false() {
        let store = Store::open_in_memory().unwrap();
        let r = record("m-9", "Ghost", "Solid", "2026-08-01");
        assert!(!store.update("m-9", &r).unwrap());
    }

    #[test]
    fn test_delete_then_get_all_excludes_id() {
        let store = Store::open_in_memory().unwrap();
        store.insert(&record("m-1", "Tin Can", "Metallic", "2026-03-14")).unwrap();
        store.insert(&record("m-2", "Cardboard", "Paper", "2026-03-15")).unwrap();

        assert!(store.delete("m-1").unwrap());
        let ids: Vec<_> = store.get_all().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["m-2"]);

        // deleting again fails without altering the store
        assert!(!store.delete("m-1").unwrap());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_statistics_empty_store_is_all_zero() {
        let store = Store::open_in_memory().unwrap();
        let stats = store.statistics().unwrap();
        assert_eq!(stats.overall.count, 0);
        assert_eq!(stats.overall.quantity_sum, 0.0);
        assert_eq!(stats.overall.value_avg, 0.0);
        assert!(stats.by_type.is_empty());
        assert!(stats.by_location.is_empty());
    }

    #[test]
    fn test_statistics_buckets_and_totals() {
        let store = Store::open_in_memory().unwrap();
        let mut a = record("m-1", "A", "Solid", "2026-08-01");
        a.quantity = 10.0;
        a.value = 5.0;
        let mut b = record("m-2", "B", "Organic", "2026-08-02");
        b.quantity = 30.0;
        b.value = 15.0;
        store.insert(&a).unwrap();
        store.insert(&b).unwrap();

        let stats = store.statistics().unwrap();
        assert_eq!(stats.overall.count, 2);
        assert_eq!(stats.overall.quantity_sum, 40.0);
        assert_eq!(stats.overall.value_sum, 20.0);
        assert_eq!(stats.overall.value_avg, 10.0);

        assert_eq!(stats.by_type.len(), 2);
        // sorted by key
        assert_eq!(stats.by_type[0].key, "Organic");
        assert_eq!(stats.by_type[0].quantity_sum, 30.0);
        assert_eq!(stats.by_type[1].key, "Solid");
        assert_eq!(stats.by_type[1].value_avg, 5.0);

        assert_eq!(stats.by_location.len(), 1);
        assert_eq!(stats.by_location[0].count, 2);
    }
}
