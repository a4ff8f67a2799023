use chrono::NaiveDate;
use serde::Serialize;

/// One real-estate record as stored in the listings table.
///
/// Price and square footage are non-negative (enforced by the schema);
/// `date_listed` and the coordinates may be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: i64,
    pub city: String,
    pub property_type: String,
    pub price: f64,
    pub sqft: f64,
    pub agent_id: String,
    pub date_listed: Option<NaiveDate>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Listing {
    pub fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
