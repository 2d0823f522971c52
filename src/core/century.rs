use std::collections::HashMap;

use super::models::PredictionItem;

/// Bucket for decade labels whose two-character prefix is not numeric. Kept
/// visible rather than dropped so malformed server labels still show up.
pub const UNKNOWN_CENTURY: &str = "Unknown Century";

/// Decade predictions rolled up under one century label. `total` is always
/// the sum of `items` probabilities; it is only ever recomputed here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenturyBucket {
    pub total: f64,
    pub items: Vec<PredictionItem>,
}

/// Groups decade-level predictions into century buckets. Map order is
/// unspecified; item order within a bucket follows input order. Only applied
/// when the active model is the decade model.
pub fn group_by_century(items: &[PredictionItem]) -> HashMap<String, CenturyBucket> {
    let mut buckets: HashMap<String, CenturyBucket> = HashMap::new();

    for item in items {
        let bucket = buckets.entry(century_label(&item.label)).or_default();
        bucket.total += item.probability;
        bucket.items.push(item.clone());
    }

    buckets
}

/// A "1920"-style decade label belongs to century 19 + 1 = 20.
fn century_label(label: &str) -> String {
    match label.get(0..2).and_then(|prefix| prefix.parse::<u32>().ok()) {
        Some(prefix) => {
            let century = prefix + 1;
            if century == 21 {
                "21st Century".to_string()
            } else {
                format!("{}th Century", century)
            }
        }
        None => UNKNOWN_CENTURY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str, probability: f64) -> PredictionItem {
        PredictionItem { label: label.to_string(), probability }
    }

    #[test]
    fn groups_decades_into_their_century() {
        let buckets = group_by_century(&[item("1920", 0.4), item("1930", 0.3)]);

        assert_eq!(buckets.len(), 1);
        let bucket = &buckets["20th Century"];
        assert!((bucket.total - 0.7).abs() < 1e-9);
        assert_eq!(bucket.items.len(), 2);
        assert_eq!(bucket.items[0].label, "1920");
        assert_eq!(bucket.items[1].label, "1930");
    }

    #[test]
    fn twenty_first_century_gets_ordinal_label() {
        let buckets = group_by_century(&[item("2010", 0.2)]);
        assert!(buckets.contains_key("21st Century"));
    }

    #[test]
    fn splits_across_century_boundaries() {
        let buckets =
            group_by_century(&[item("1890", 0.1), item("1900", 0.2), item("2000", 0.3)]);

        assert_eq!(buckets.len(), 3);
        assert!((buckets["19th Century"].total - 0.1).abs() < 1e-9);
        assert!((buckets["20th Century"].total - 0.2).abs() < 1e-9);
        assert!((buckets["21st Century"].total - 0.3).abs() < 1e-9);
    }

    #[test]
    fn total_always_equals_item_sum() {
        let items: Vec<_> =
            (0..10).map(|i| item(&format!("19{}0", i % 10), 0.01 * i as f64)).collect();

        for bucket in group_by_century(&items).values() {
            let sum: f64 = bucket.items.iter().map(|i| i.probability).sum();
            assert!((bucket.total - sum).abs() < 1e-9);
        }
    }

    #[test]
    fn malformed_labels_land_in_the_unknown_bucket() {
        let buckets = group_by_century(&[item("??20", 0.5), item("", 0.1)]);

        let bucket = &buckets[UNKNOWN_CENTURY];
        assert_eq!(bucket.items.len(), 2);
        assert!((bucket.total - 0.6).abs() < 1e-9);
    }
}
