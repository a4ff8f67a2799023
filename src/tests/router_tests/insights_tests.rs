use crate::domain::catalog::CATALOG;
use crate::domain::Facets;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_table};

#[test]
fn every_catalog_query_renders_as_a_page() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    for def in &CATALOG {
        let resp = handle(get(&format!("/insights?query={}", def.name)), &table, &facets)
            .unwrap_or_else(|e| panic!("{} failed: {e}", def.name));
        assert_eq!(resp.status(), 200);

        let body = body_string(resp);
        assert!(body.contains(def.label), "{} page lost its label", def.name);
    }
}

#[test]
fn insights_without_a_query_param_is_a_bad_request() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    match handle(get("/insights"), &table, &facets) {
        Err(ServerError::BadRequest(_)) => {}
        Err(e) => panic!("expected BadRequest, got {e}"),
        Ok(_) => panic!("expected BadRequest, got a response"),
    }
}

#[test]
fn unknown_query_name_surfaces_as_a_lookup_failure() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    match handle(get("/insights?query=bogus"), &table, &facets) {
        Err(ServerError::UnknownQuery(name)) => assert_eq!(name, "bogus"),
        Err(e) => panic!("expected UnknownQuery, got {e}"),
        Ok(_) => panic!("expected UnknownQuery, got a response"),
    }

    match handle(get("/api/query/bogus"), &table, &facets) {
        Err(ServerError::UnknownQuery(_)) => {}
        Err(e) => panic!("expected UnknownQuery, got {e}"),
        Ok(_) => panic!("expected UnknownQuery, got a response"),
    }
}

#[test]
fn api_query_returns_columns_and_rows_as_json() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    let resp = handle(get("/api/query/listings-per-city"), &table, &facets).unwrap();
    assert_eq!(resp.status(), 200);

    let parsed: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(parsed["query"], "listings-per-city");
    assert_eq!(parsed["columns"], serde_json::json!(["city", "listings"]));
    assert_eq!(
        parsed["rows"],
        serde_json::json!([["Austin", 2], ["Dallas", 1], ["Houston", 1]])
    );
}

#[test]
fn api_query_serializes_missing_values_as_null() {
    let table = sample_table();
    let facets = Facets::from_table(&table);

    let resp = handle(get("/api/query/top-5-expensive"), &table, &facets).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();

    // Highest price is listing 4, which has no date or coordinates.
    let top = &parsed["rows"][0];
    assert_eq!(top[0], 4);
    assert!(top[6].is_null());
    assert!(top[7].is_null());
}
