use crate::domain::catalog;
use crate::domain::criteria::{date_range_from_bounds, FilterCriteria};
use crate::domain::filter::{self, ROWS_PER_PAGE};
use crate::domain::insights::{self, Summary};
use crate::domain::{Facets, Listing};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates::pages::{dashboard_page, insights_page, DashboardVm};
use astra::Request;
use chrono::NaiveDate;

pub fn handle(req: Request, table: &[Listing], facets: &Facets) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path().to_string();
    let params = parse_query(&req);

    match (method, path.as_str()) {
        ("GET", "/") => dashboard(table, facets, &params),
        ("GET", "/insights") => insights_route(table, &params),
        ("GET", p) if p.starts_with("/api/query/") => {
            api_query(table, p.trim_start_matches("/api/query/"))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(table: &[Listing], facets: &Facets, params: &[(String, String)]) -> ResultResp {
    let criteria = criteria_from_params(params, facets);
    let rows = filter::apply(table, &criteria);

    let page_count = filter::page_count(rows.len(), ROWS_PER_PAGE);
    let page = first(params, "page")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, page_count);
    let page_rows = filter::paginate(&rows, page, ROWS_PER_PAGE);

    let vm = DashboardVm {
        facets,
        criteria: &criteria,
        summary: Summary::of(&rows),
        page,
        page_count,
        page_rows,
        type_distribution: insights::property_type_distribution(&rows),
        city_distribution: insights::city_distribution(&rows),
        monthly: insights::monthly_counts(&rows),
        located: rows.iter().filter(|l| l.has_location()).copied().collect(),
    };

    html_response(dashboard_page(&vm))
}

fn insights_route(table: &[Listing], params: &[(String, String)]) -> ResultResp {
    let name = first(params, "query")
        .ok_or_else(|| ServerError::BadRequest("missing query parameter".to_string()))?;

    let def = catalog::CATALOG
        .iter()
        .find(|q| q.name == name)
        .ok_or_else(|| ServerError::UnknownQuery(name.to_string()))?;

    let output = def.execute(table);
    html_response(insights_page(def.name, def.label, &output))
}

fn api_query(table: &[Listing], name: &str) -> ResultResp {
    let output = catalog::run(name, table)?;
    json_response(&serde_json::json!({
        "query": name,
        "columns": output.columns,
        "rows": output.rows,
    }))
}

/// Build criteria from the filter form's query string.
///
/// Absent keys impose no constraint. An explicitly submitted but empty
/// value maps to the absent case for the single-valued selects (the
/// form's "All" option has an empty value), while for cities the present
/// key with no usable values is a real empty selection.
fn criteria_from_params(params: &[(String, String)], facets: &Facets) -> FilterCriteria {
    let city_selected = params.iter().any(|(k, _)| k == "city");
    let cities = city_selected.then(|| {
        params
            .iter()
            .filter(|(k, v)| k == "city" && !v.is_empty())
            .map(|(_, v)| v.clone())
            .collect()
    });

    let price_min = first(params, "price_min").and_then(|v| v.parse::<f64>().ok());
    let price_max = first(params, "price_max").and_then(|v| v.parse::<f64>().ok());
    let price_range = match (price_min, price_max) {
        (None, None) => None,
        (lo, hi) => Some(filter::clamp_price_range(
            (
                lo.unwrap_or(facets.price_min),
                hi.unwrap_or(facets.price_max),
            ),
            facets.price_bounds(),
        )),
    };

    FilterCriteria {
        cities,
        property_type: non_empty(first(params, "type")),
        price_range,
        agent: non_empty(first(params, "agent")),
        date_range: date_range_from_bounds(
            parse_date(first(params, "date_start")),
            parse_date(first(params, "date_end")),
        ),
    }
}

fn parse_query(req: &Request) -> Vec<(String, String)> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => Vec::new(),
    }
}

fn first<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| v.to_string())
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| v.parse().ok())
}
