// src/domain/criteria.rs

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// User-selected filter constraints, built once per interaction.
///
/// Every field is optional and an absent field imposes no constraint.
/// Note the distinction for cities: `None` means "all cities", while
/// `Some(empty set)` is a real selection that matches nothing. The old
/// "All" sentinel strings for property type and agent are represented
/// as `None` here so they can never collide with real data values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub cities: Option<BTreeSet<String>>,
    pub property_type: Option<String>,
    /// Inclusive (min, max). Callers clamp to the table's global bounds
    /// before filtering, see `filter::clamp_price_range`.
    pub price_range: Option<(f64, f64)>,
    pub agent: Option<String>,
    /// Inclusive (start, end). Built via `date_range_from_bounds`.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

/// Build a date constraint from two independently-optional bounds.
///
/// A half-specified range applies no date filtering at all. The original
/// dashboard silently fell through when the user had picked only one end
/// of the range; this constructor keeps that behavior but makes it an
/// explicit, testable rule instead of an accident.
pub fn date_range_from_bounds(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Option<(NaiveDate, NaiveDate)> {
    match (start, end) {
        (Some(s), Some(e)) => Some((s, e)),
        _ => None,
    }
}
