// src/domain/facets.rs

use crate::domain::listing::Listing;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Distinct values and global bounds derived from the full table.
///
/// Populates the filter sidebar (city checkboxes, type/agent dropdowns,
/// price slider bounds, date pickers) and provides the bounds the price
/// criterion is clamped against. Computed once at startup, right after
/// the table is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Facets {
    pub cities: Vec<String>,
    pub property_types: Vec<String>,
    pub agents: Vec<String>,
    pub price_min: f64,
    pub price_max: f64,
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
}

impl Facets {
    pub fn from_table(table: &[Listing]) -> Self {
        let mut cities = BTreeSet::new();
        let mut property_types = BTreeSet::new();
        let mut agents = BTreeSet::new();
        let mut price_min = f64::INFINITY;
        let mut price_max = f64::NEG_INFINITY;
        let mut date_min: Option<NaiveDate> = None;
        let mut date_max: Option<NaiveDate> = None;

        for l in table {
            cities.insert(l.city.clone());
            property_types.insert(l.property_type.clone());
            agents.insert(l.agent_id.clone());
            price_min = price_min.min(l.price);
            price_max = price_max.max(l.price);
            if let Some(d) = l.date_listed {
                date_min = Some(date_min.map_or(d, |m| m.min(d)));
                date_max = Some(date_max.map_or(d, |m| m.max(d)));
            }
        }

        if table.is_empty() {
            price_min = 0.0;
            price_max = 0.0;
        }

        Self {
            cities: cities.into_iter().collect(),
            property_types: property_types.into_iter().collect(),
            agents: agents.into_iter().collect(),
            price_min,
            price_max,
            date_min,
            date_max,
        }
    }

    pub fn price_bounds(&self) -> (f64, f64) {
        (self.price_min, self.price_max)
    }
}
