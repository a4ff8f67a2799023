use crate::db::connection::{init_db, Database};
use crate::domain::Listing;
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use http::Method;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns a fresh temp-file database using the production schema.
pub fn init_test_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// Small fixed table used by the router tests.
pub fn sample_table() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            city: "Austin".to_string(),
            property_type: "House".to_string(),
            price: 400000.0,
            sqft: 2000.0,
            agent_id: "AGT-001".to_string(),
            date_listed: NaiveDate::from_ymd_opt(2023, 1, 10),
            latitude: Some(30.2672),
            longitude: Some(-97.7431),
        },
        Listing {
            id: 2,
            city: "Austin".to_string(),
            property_type: "Condo".to_string(),
            price: 200000.0,
            sqft: 1000.0,
            agent_id: "AGT-002".to_string(),
            date_listed: NaiveDate::from_ymd_opt(2023, 2, 20),
            latitude: None,
            longitude: None,
        },
        Listing {
            id: 3,
            city: "Dallas".to_string(),
            property_type: "House".to_string(),
            price: 300000.0,
            sqft: 1500.0,
            agent_id: "AGT-001".to_string(),
            date_listed: NaiveDate::from_ymd_opt(2023, 3, 5),
            latitude: Some(32.7767),
            longitude: Some(-96.7970),
        },
        Listing {
            id: 4,
            city: "Houston".to_string(),
            property_type: "Townhouse".to_string(),
            price: 500000.0,
            sqft: 2200.0,
            agent_id: "AGT-003".to_string(),
            date_listed: None,
            latitude: None,
            longitude: None,
        },
    ]
}

/// Build a GET request for the router.
pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body into a string.
pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
