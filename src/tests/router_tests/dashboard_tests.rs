use crate::domain::Facets;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_table};

#[test]
fn dashboard_renders_every_listing_without_filters() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    let resp = handle(get("/"), &table, &facets).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Real Estate Analytics Dashboard"));
    // All four listings fit on page 1.
    assert!(body.contains("<h2>4</h2>"));
    assert!(body.contains("Page 1 of 1"));
    assert!(body.contains("Houston"));
}

#[test]
fn city_filter_narrows_the_table() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    let resp = handle(get("/?city=Austin"), &table, &facets).unwrap();
    let body = body_string(resp);

    // Two Austin listings, and the Dallas row is out of the table body.
    assert!(body.contains("<h2>2</h2>"));
    assert!(!body.contains("<td>3</td>"));
}

#[test]
fn submitted_empty_city_selection_matches_nothing() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    let resp = handle(get("/?city="), &table, &facets).unwrap();
    let body = body_string(resp);

    assert!(body.contains("<h2>0</h2>"));
    assert!(body.contains("Page 1 of 1"));
}

#[test]
fn price_range_params_are_inclusive() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    let resp = handle(
        get("/?price_min=200000&price_max=200000"),
        &table,
        &facets,
    )
    .unwrap();
    let body = body_string(resp);

    // Exactly the $200k condo survives.
    assert!(body.contains("<h2>1</h2>"));
    assert!(body.contains("<td>2</td>"));
}

#[test]
fn partial_date_range_param_is_ignored() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    // Only a start date: no date filtering happens, all rows survive.
    let resp = handle(get("/?date_start=2023-03-01"), &table, &facets).unwrap();
    let body = body_string(resp);
    assert!(body.contains("<h2>4</h2>"));

    // Both bounds: row 4 has no date and rows outside drop away.
    let resp = handle(
        get("/?date_start=2023-02-01&date_end=2023-03-31"),
        &table,
        &facets,
    )
    .unwrap();
    let body = body_string(resp);
    assert!(body.contains("<h2>2</h2>"));
}

#[test]
fn unknown_route_is_not_found() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    match handle(get("/nope"), &table, &facets) {
        Err(ServerError::NotFound) => {}
        Err(e) => panic!("expected NotFound, got {e}"),
        Ok(_) => panic!("expected NotFound, got a response"),
    }
}

#[test]
fn empty_table_dashboard_still_renders() {
    let table = Vec::new();
    let facets = Facets::from_table(&table);

    let resp = handle(get("/"), &table, &facets).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<h2>0</h2>"));
    assert!(body.contains("Page 1 of 1"));
}
