// src/domain/filter.rs

use crate::domain::criteria::FilterCriteria;
use crate::domain::listing::Listing;

/// Fixed page size for the listings table.
pub const ROWS_PER_PAGE: usize = 10;

/// Apply the full criteria conjunction to the table in one pass.
///
/// Criteria combine with logical AND; a multi-valued criterion (the city
/// set) is an OR over its members. Survivors keep the table's insertion
/// order; nothing here sorts.
pub fn apply<'a>(table: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    table.iter().filter(|l| matches(l, criteria)).collect()
}

fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    // An empty selected set is a real selection that matches nothing,
    // unlike an absent (None) criterion which matches everything.
    if let Some(cities) = &criteria.cities {
        if !cities.contains(&listing.city) {
            return false;
        }
    }

    if let Some(property_type) = &criteria.property_type {
        if &listing.property_type != property_type {
            return false;
        }
    }

    if let Some((min, max)) = criteria.price_range {
        if listing.price < min || listing.price > max {
            return false;
        }
    }

    if let Some(agent) = &criteria.agent {
        if &listing.agent_id != agent {
            return false;
        }
    }

    if let Some((start, end)) = criteria.date_range {
        match listing.date_listed {
            Some(d) => {
                if d < start || d > end {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}

/// Clamp a requested price range to the table's global bounds.
pub fn clamp_price_range(range: (f64, f64), bounds: (f64, f64)) -> (f64, f64) {
    let (lo, hi) = bounds;
    (range.0.clamp(lo, hi), range.1.clamp(lo, hi))
}

/// Number of pages for `len` rows, never less than 1.
pub fn page_count(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Slice out one page of a filtered result.
///
/// Policy: out-of-range page numbers clamp into `[1, page_count]` rather
/// than erroring, mirroring the bounded page input in the UI. An empty
/// result always yields an empty page.
pub fn paginate<'a, 'b>(
    result: &'b [&'a Listing],
    page: usize,
    page_size: usize,
) -> &'b [&'a Listing] {
    let page_size = page_size.max(1);
    let page = page.clamp(1, page_count(result.len(), page_size));

    let start = ((page - 1) * page_size).min(result.len());
    let end = (start + page_size).min(result.len());
    &result[start..end]
}
