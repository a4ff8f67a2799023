// src/domain/catalog.rs
//
// Fixed registry of the fifteen canned business-insight queries. Each entry
// pairs a route-friendly name and a human label with an aggregate computed
// in memory over the loaded table, so the contract is the columns and
// values returned rather than any SQL text.

use crate::domain::listing::Listing;
use crate::errors::ServerError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single cell value in a query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v:.2}"),
            Scalar::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Columns plus rows, in the order they should be displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutput {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Scalar>>,
}

/// One immutable catalog entry.
pub struct QueryDef {
    pub name: &'static str,
    pub label: &'static str,
    run: fn(&[Listing]) -> QueryOutput,
}

impl QueryDef {
    pub fn execute(&self, table: &[Listing]) -> QueryOutput {
        (self.run)(table)
    }
}

pub static CATALOG: [QueryDef; 15] = [
    QueryDef {
        name: "avg-price-by-city",
        label: "1. Average Price by City",
        run: avg_price_by_city,
    },
    QueryDef {
        name: "highest-avg-price-city",
        label: "2. Highest Avg Price City",
        run: highest_avg_price_city,
    },
    QueryDef {
        name: "listings-per-city",
        label: "3. Listings per City",
        run: listings_per_city,
    },
    QueryDef {
        name: "avg-price-by-type",
        label: "4. Average Price by Property Type",
        run: avg_price_by_type,
    },
    QueryDef {
        name: "most-common-type",
        label: "5. Most Common Property Type",
        run: most_common_type,
    },
    QueryDef {
        name: "top-5-expensive",
        label: "6. Top 5 Expensive Listings",
        run: top_5_expensive,
    },
    QueryDef {
        name: "top-5-cheapest",
        label: "7. Top 5 Cheapest Listings",
        run: top_5_cheapest,
    },
    QueryDef {
        name: "top-agent",
        label: "8. Agent with Most Listings",
        run: top_agent,
    },
    QueryDef {
        name: "avg-price-by-agent",
        label: "9. Average Price by Agent",
        run: avg_price_by_agent,
    },
    QueryDef {
        name: "listings-per-month",
        label: "10. Listings per Month",
        run: listings_per_month,
    },
    QueryDef {
        name: "busiest-month",
        label: "11. Highest Activity Month",
        run: busiest_month,
    },
    QueryDef {
        name: "avg-price-per-sqft",
        label: "12. Average Price per Sqft",
        run: avg_price_per_sqft,
    },
    QueryDef {
        name: "highest-priced-city",
        label: "13. Highest Priced City",
        run: highest_priced_city,
    },
    QueryDef {
        name: "above-avg-count",
        label: "14. Properties Above Avg Price",
        run: above_avg_count,
    },
    QueryDef {
        name: "market-value-per-city",
        label: "15. Total Market Value per City",
        run: market_value_per_city,
    },
];

/// Look a query up by name and run it.
pub fn run(name: &str, table: &[Listing]) -> Result<QueryOutput, ServerError> {
    CATALOG
        .iter()
        .find(|q| q.name == name)
        .map(|q| q.execute(table))
        .ok_or_else(|| ServerError::UnknownQuery(name.to_string()))
}

// ---- grouping helpers ----

/// Group rows by a key, skipping rows where the key is absent.
/// BTreeMap keeps group output deterministic (ordered by key).
fn group_by<'a, F>(table: &'a [Listing], key: F) -> BTreeMap<String, Vec<&'a Listing>>
where
    F: Fn(&Listing) -> Option<String>,
{
    let mut groups: BTreeMap<String, Vec<&Listing>> = BTreeMap::new();
    for l in table {
        if let Some(k) = key(l) {
            groups.entry(k).or_default().push(l);
        }
    }
    groups
}

fn mean(rows: &[&Listing]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().map(|l| l.price).sum::<f64>() / rows.len() as f64
}

/// Per-group aggregate rows, ordered by group key.
fn grouped_rows<F>(table: &[Listing], key: F, agg: fn(&[&Listing]) -> Scalar) -> Vec<Vec<Scalar>>
where
    F: Fn(&Listing) -> Option<String>,
{
    group_by(table, key)
        .into_iter()
        .map(|(k, rows)| vec![Scalar::Text(k), agg(&rows)])
        .collect()
}

/// The single group with the largest aggregate (SQL's ORDER BY ... DESC
/// LIMIT 1). Ties break toward the smaller key so the result is stable.
fn top_group<F>(table: &[Listing], key: F, agg: fn(&[&Listing]) -> f64) -> Vec<Vec<Scalar>>
where
    F: Fn(&Listing) -> Option<String>,
{
    let mut best: Option<(String, f64)> = None;
    for (k, rows) in group_by(table, key) {
        let value = agg(&rows);
        // BTreeMap iterates in key order, so strictly-greater keeps the
        // first (smallest) key on ties.
        if best.as_ref().map_or(true, |(_, v)| value > *v) {
            best = Some((k, value));
        }
    }
    match best {
        Some((k, v)) => vec![vec![Scalar::Text(k), Scalar::Float(v)]],
        None => Vec::new(),
    }
}

fn full_record(l: &Listing) -> Vec<Scalar> {
    vec![
        Scalar::Int(l.id),
        Scalar::Text(l.city.clone()),
        Scalar::Text(l.property_type.clone()),
        Scalar::Float(l.price),
        Scalar::Float(l.sqft),
        Scalar::Text(l.agent_id.clone()),
        match l.date_listed {
            Some(d) => Scalar::Text(d.format("%Y-%m-%d").to_string()),
            None => Scalar::Null,
        },
        l.latitude.map_or(Scalar::Null, Scalar::Float),
        l.longitude.map_or(Scalar::Null, Scalar::Float),
    ]
}

const LISTING_COLUMNS: [&str; 9] = [
    "id",
    "city",
    "property_type",
    "price",
    "sqft",
    "agent_id",
    "date_listed",
    "latitude",
    "longitude",
];

fn month_key(l: &Listing) -> Option<String> {
    l.date_listed.map(|d| d.format("%Y-%m").to_string())
}

// ---- the fifteen definitions ----

fn avg_price_by_city(table: &[Listing]) -> QueryOutput {
    QueryOutput {
        columns: vec!["city", "avg_price"],
        rows: grouped_rows(table, |l| Some(l.city.clone()), |rows| {
            Scalar::Float(mean(rows))
        }),
    }
}

fn highest_avg_price_city(table: &[Listing]) -> QueryOutput {
    QueryOutput {
        columns: vec!["city", "avg_price"],
        rows: top_group(table, |l| Some(l.city.clone()), mean),
    }
}

fn listings_per_city(table: &[Listing]) -> QueryOutput {
    QueryOutput {
        columns: vec!["city", "listings"],
        rows: grouped_rows(table, |l| Some(l.city.clone()), |rows| {
            Scalar::Int(rows.len() as i64)
        }),
    }
}

fn avg_price_by_type(table: &[Listing]) -> QueryOutput {
    QueryOutput {
        columns: vec!["property_type", "avg_price"],
        rows: grouped_rows(table, |l| Some(l.property_type.clone()), |rows| {
            Scalar::Float(mean(rows))
        }),
    }
}

fn most_common_type(table: &[Listing]) -> QueryOutput {
    let rows = top_group(
        table,
        |l| Some(l.property_type.clone()),
        |rows| rows.len() as f64,
    );
    QueryOutput {
        columns: vec!["property_type", "listings"],
        rows: counts_as_int(rows),
    }
}

fn top_5_expensive(table: &[Listing]) -> QueryOutput {
    let mut sorted: Vec<&Listing> = table.iter().collect();
    sorted.sort_by(|a, b| b.price.total_cmp(&a.price));
    QueryOutput {
        columns: LISTING_COLUMNS.to_vec(),
        rows: sorted.iter().take(5).map(|l| full_record(l)).collect(),
    }
}

fn top_5_cheapest(table: &[Listing]) -> QueryOutput {
    let mut sorted: Vec<&Listing> = table.iter().collect();
    sorted.sort_by(|a, b| a.price.total_cmp(&b.price));
    QueryOutput {
        columns: LISTING_COLUMNS.to_vec(),
        rows: sorted.iter().take(5).map(|l| full_record(l)).collect(),
    }
}

fn top_agent(table: &[Listing]) -> QueryOutput {
    let rows = top_group(
        table,
        |l| Some(l.agent_id.clone()),
        |rows| rows.len() as f64,
    );
    QueryOutput {
        columns: vec!["agent_id", "listings"],
        rows: counts_as_int(rows),
    }
}

fn avg_price_by_agent(table: &[Listing]) -> QueryOutput {
    QueryOutput {
        columns: vec!["agent_id", "avg_price"],
        rows: grouped_rows(table, |l| Some(l.agent_id.clone()), |rows| {
            Scalar::Float(mean(rows))
        }),
    }
}

fn listings_per_month(table: &[Listing]) -> QueryOutput {
    QueryOutput {
        columns: vec!["month", "listings"],
        rows: grouped_rows(table, month_key, |rows| Scalar::Int(rows.len() as i64)),
    }
}

fn busiest_month(table: &[Listing]) -> QueryOutput {
    let rows = top_group(table, month_key, |rows| rows.len() as f64);
    QueryOutput {
        columns: vec!["month", "listings"],
        rows: counts_as_int(rows),
    }
}

fn avg_price_per_sqft(table: &[Listing]) -> QueryOutput {
    // Rows with zero square footage are excluded rather than dividing
    // by zero; an all-excluded (or empty) table yields a neutral 0.0.
    let ratios: Vec<f64> = table
        .iter()
        .filter(|l| l.sqft != 0.0)
        .map(|l| l.price / l.sqft)
        .collect();
    let avg = if ratios.is_empty() {
        0.0
    } else {
        ratios.iter().sum::<f64>() / ratios.len() as f64
    };
    QueryOutput {
        columns: vec!["avg_price_per_sqft"],
        rows: vec![vec![Scalar::Float(avg)]],
    }
}

fn highest_priced_city(table: &[Listing]) -> QueryOutput {
    QueryOutput {
        columns: vec!["city", "max_price"],
        rows: top_group(table, |l| Some(l.city.clone()), |rows| {
            rows.iter().map(|l| l.price).fold(0.0, f64::max)
        }),
    }
}

fn above_avg_count(table: &[Listing]) -> QueryOutput {
    // Two steps, like the original subquery: global average first, then
    // count the rows strictly above it.
    let global_avg = {
        let all: Vec<&Listing> = table.iter().collect();
        mean(&all)
    };
    let count = table.iter().filter(|l| l.price > global_avg).count();
    QueryOutput {
        columns: vec!["above_avg_count"],
        rows: vec![vec![Scalar::Int(count as i64)]],
    }
}

fn market_value_per_city(table: &[Listing]) -> QueryOutput {
    let mut totals: Vec<(String, f64)> = group_by(table, |l| Some(l.city.clone()))
        .into_iter()
        .map(|(k, rows)| (k, rows.iter().map(|l| l.price).sum()))
        .collect();
    // Descending by total; group key breaks ties (already key-sorted,
    // and the sort is stable).
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    QueryOutput {
        columns: vec!["city", "total_price"],
        rows: totals
            .into_iter()
            .map(|(k, v)| vec![Scalar::Text(k), Scalar::Float(v)])
            .collect(),
    }
}

/// `top_group` reports its aggregate as a float; count-style queries
/// re-narrow it to an integer column.
fn counts_as_int(rows: Vec<Vec<Scalar>>) -> Vec<Vec<Scalar>> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|s| match s {
                    Scalar::Float(v) => Scalar::Int(v as i64),
                    other => other,
                })
                .collect()
        })
        .collect()
}
