// src/domain/insights.rs

use crate::domain::listing::Listing;
use std::collections::BTreeMap;

/// Headline metrics over a filtered result, shown as the metric cards.
/// Empty results produce zeros rather than errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_price: f64,
    pub max_price: f64,
}

impl Summary {
    pub fn of(rows: &[&Listing]) -> Self {
        Self {
            count: rows.len(),
            mean_price: mean_price(rows),
            max_price: max_price(rows),
        }
    }
}

/// Mean listing price, 0.0 for an empty result.
pub fn mean_price(rows: &[&Listing]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().map(|l| l.price).sum::<f64>() / rows.len() as f64
}

/// Highest listing price, 0.0 for an empty result.
pub fn max_price(rows: &[&Listing]) -> f64 {
    rows.iter().map(|l| l.price).fold(0.0, f64::max)
}

/// Count of listings per property type, keyed alphabetically.
pub fn property_type_distribution(rows: &[&Listing]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for l in rows {
        *counts.entry(l.property_type.clone()).or_insert(0) += 1;
    }
    counts
}

/// Count of listings per city, keyed alphabetically.
pub fn city_distribution(rows: &[&Listing]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for l in rows {
        *counts.entry(l.city.clone()).or_insert(0) += 1;
    }
    counts
}

/// Listings per calendar month in chronological order, keyed "YYYY-MM".
/// Rows without a listing date are skipped.
pub fn monthly_counts(rows: &[&Listing]) -> Vec<(String, usize)> {
    let mut counts = BTreeMap::new();
    for l in rows {
        if let Some(d) = l.date_listed {
            *counts.entry(d.format("%Y-%m").to_string()).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn listing(city: &str, price: f64, date: Option<(i32, u32, u32)>) -> Listing {
        Listing {
            id: 0,
            city: city.to_string(),
            property_type: "House".to_string(),
            price,
            sqft: 1000.0,
            agent_id: "AGT-001".to_string(),
            date_listed: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn empty_result_yields_all_zero_metrics() {
        let rows: Vec<&Listing> = Vec::new();
        let summary = Summary::of(&rows);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_price, 0.0);
        assert_eq!(summary.max_price, 0.0);
        assert!(property_type_distribution(&rows).is_empty());
        assert!(city_distribution(&rows).is_empty());
        assert!(monthly_counts(&rows).is_empty());
    }

    #[test]
    fn single_row_mean_equals_its_price() {
        let a = listing("A", 100.0, None);
        let b = listing("B", 300.0, None);
        let table = vec![a, b];
        // Price range [100, 100] keeps only the first row.
        let rows: Vec<&Listing> = table.iter().filter(|l| l.price == 100.0).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].city, "A");
        assert_eq!(mean_price(&rows), 100.0);
    }

    #[test]
    fn distributions_count_per_category() {
        let table = vec![
            listing("Austin", 100.0, None),
            listing("Austin", 200.0, None),
            listing("Dallas", 300.0, None),
        ];
        let rows: Vec<&Listing> = table.iter().collect();

        let cities = city_distribution(&rows);
        assert_eq!(cities.get("Austin"), Some(&2));
        assert_eq!(cities.get("Dallas"), Some(&1));
    }

    #[test]
    fn monthly_counts_are_chronological_and_skip_undated() {
        let table = vec![
            listing("A", 1.0, Some((2023, 11, 5))),
            listing("A", 1.0, Some((2023, 2, 1))),
            listing("A", 1.0, Some((2023, 2, 28))),
            listing("A", 1.0, None),
        ];
        let rows: Vec<&Listing> = table.iter().collect();

        let monthly = monthly_counts(&rows);
        assert_eq!(
            monthly,
            vec![("2023-02".to_string(), 2), ("2023-11".to_string(), 1)]
        );
    }
}
