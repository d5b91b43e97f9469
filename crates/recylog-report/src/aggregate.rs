use recylog_types::{Bucket, MaterialRecord, OverallStats};
use std::collections::BTreeMap;

/// Grouping dimension for bucket reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBy {
    Type,
    Location,
}

impl KeyBy {
    fn key<'a>(&self, record: &'a MaterialRecord) -> &'a str {
        match self {
            KeyBy::Type => &record.material_type,
            KeyBy::Location => &record.location,
        }
    }
}

/// Reduce a snapshot to one bucket per distinct key. Key equality is
/// exact string match; buckets come back sorted ascending by key so
/// display order is deterministic regardless of input order.
pub fn group_by(records: &[MaterialRecord], key_by: KeyBy) -> Vec<Bucket> {
    let mut groups: BTreeMap<&str, (usize, f64, f64)> = BTreeMap::new();

    for record in records {
        let entry = groups.entry(key_by.key(record)).or_insert((0, 0.0, 0.0));
        entry.0 += 1;
        entry.1 += record.quantity;
        entry.2 += record.value;
    }

    groups
        .into_iter()
        .map(|(key, (count, quantity_sum, value_sum))| Bucket {
            key: key.to_string(),
            count,
            quantity_sum,
            value_sum,
            value_avg: value_sum / count as f64,
        })
        .collect()
}

/// Totals across the whole snapshot; all zero when it is empty.
pub fn overall(records: &[MaterialRecord]) -> OverallStats {
    if records.is_empty() {
        return OverallStats::default();
    }

    let count = records.len();
    let quantity_sum = records.iter().map(|r| r.quantity).sum();
    let value_sum: f64 = records.iter().map(|r| r.value).sum();

    OverallStats {
        count,
        quantity_sum,
        value_sum,
        value_avg: value_sum / count as f64,
    }
}

/// Share of `part` in `total` as a percentage. Defined as zero when the
/// total is zero so empty snapshots never produce NaN or infinity.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        100.0 * part / total
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(name: &str, material_type: &str, location: &str, quantity: f64, value: f64) -> MaterialRecord {
        MaterialRecord {
            id: format!("m-{}", name),
            name: name.to_string(),
            material_type: material_type.to_string(),
            quantity,
            value,
            location: location.to_string(),
            status: "Available".to_string(),
            recorded_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        }
    }

    #[test]
    fn test_group_by_type_scenario() {
        let records = vec![
            record("a", "A", "x", 10.0, 5.0),
            record("b", "B", "x", 30.0, 15.0),
        ];

        let buckets = group_by(&records, KeyBy::Type);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].key, "A");
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[0].quantity_sum, 10.0);
        assert_eq!(buckets[0].value_sum, 5.0);
        assert_eq!(buckets[1].key, "B");
        assert_eq!(buckets[1].quantity_sum, 30.0);

        let total: f64 = buckets.iter().map(|b| b.quantity_sum).sum();
        assert_eq!(percentage(buckets[0].quantity_sum, total), 25.0);
        assert_eq!(percentage(buckets[1].quantity_sum, total), 75.0);
    }

    #[test]
    fn test_group_by_partitions_the_totals() {
        let records = vec![
            record("a", "Solid", "Depot A", 3.5, 1.0),
            record("b", "Glass", "Depot B", 2.0, 4.5),
            record("c", "Solid", "Depot A", 7.25, 0.0),
            record("d", "Paper", "Depot B", 1.25, 9.0),
        ];

        for key_by in [KeyBy::Type, KeyBy::Location] {
            let buckets = group_by(&records, key_by);
            let quantity: f64 = buckets.iter().map(|b| b.quantity_sum).sum();
            let value: f64 = buckets.iter().map(|b| b.value_sum).sum();
            let count: usize = buckets.iter().map(|b| b.count).sum();
            assert_eq!(quantity, records.iter().map(|r| r.quantity).sum::<f64>());
            assert_eq!(value, records.iter().map(|r| r.value).sum::<f64>());
            assert_eq!(count, records.len());
        }
    }

    #[test]
    fn test_group_by_key_match_is_case_sensitive() {
        let records = vec![
            record("a", "glass", "x", 1.0, 1.0),
            record("b", "Glass", "x", 2.0, 2.0),
        ];
        let buckets = group_by(&records, KeyBy::Type);
        assert_eq!(buckets.len(), 2);
        // lexicographic order: uppercase sorts before lowercase
        assert_eq!(buckets[0].key, "Glass");
        assert_eq!(buckets[1].key, "glass");
    }

    #[test]
    fn test_group_by_total_independent_of_input_order() {
        let mut records = vec![
            record("a", "Solid", "x", 1.5, 2.0),
            record("b", "Solid", "x", 2.5, 3.0),
            record("c", "Glass", "x", 4.0, 5.0),
        ];
        let forward = group_by(&records, KeyBy::Type);
        records.reverse();
        let backward = group_by(&records, KeyBy::Type);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_overall_empty_is_zero() {
        let stats = overall(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.value_avg, 0.0);
    }

    #[test]
    fn test_overall_average() {
        let records = vec![
            record("a", "Solid", "x", 10.0, 5.0),
            record("b", "Glass", "x", 30.0, 15.0),
        ];
        let stats = overall(&records);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.quantity_sum, 40.0);
        assert_eq!(stats.value_sum, 20.0);
        assert_eq!(stats.value_avg, 10.0);
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, 10.0), 0.0);
        assert_eq!(percentage(10.0, 10.0), 100.0);

        let p = percentage(3.0, 7.0);
        assert!(p > 0.0 && p < 100.0);
        assert!(p.is_finite());
    }
}
