use crate::domain::catalog::CATALOG;
use crate::domain::insights::Summary;
use crate::domain::{Facets, FilterCriteria, Listing};
use crate::templates::components::{bar_rows, card, metric};
use crate::templates::desktop_layout;
use maud::{html, Markup};
use std::collections::BTreeMap;

pub struct DashboardVm<'a> {
    pub facets: &'a Facets,
    pub criteria: &'a FilterCriteria,
    pub summary: Summary,
    pub page: usize,
    pub page_count: usize,
    pub page_rows: &'a [&'a Listing],
    pub type_distribution: BTreeMap<String, usize>,
    pub city_distribution: BTreeMap<String, usize>,
    pub monthly: Vec<(String, usize)>,
    pub located: Vec<&'a Listing>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Real Estate Dashboard",
        html! {
            main class="container" {
                aside class="sidebar" { (filter_form(vm)) }

                section class="content" {
                    section class="metrics" {
                        (metric("Total Listings", &vm.summary.count.to_string()))
                        (metric("Average Price", &money(vm.summary.mean_price)))
                        (metric("Max Price", &money(vm.summary.max_price)))
                    }

                    (card("📋 Filtered Listings", listings_table(vm)))

                    (card("🥧 Property Type Distribution", bar_rows(&vm.type_distribution)))
                    (card("📊 Listings by City", bar_rows(&vm.city_distribution)))
                    (card("📈 Monthly Listings Trend", monthly_trend(&vm.monthly)))
                    (card("🗺️ Property Locations", locations_table(&vm.located)))
                    (card("📑 Business Insights", query_picker()))
                }
            }
        },
    )
}

fn filter_form(vm: &DashboardVm) -> Markup {
    let criteria = vm.criteria;
    let facets = vm.facets;
    let (price_min, price_max) = criteria.price_range.unwrap_or(facets.price_bounds());

    html! {
        form method="get" action="/" class="card" {
            h2 { "🎛️ Filters" }

            fieldset {
                legend { "City" }
                @for city in &facets.cities {
                    label {
                        input type="checkbox" name="city" value=(city)
                            checked[criteria.cities.as_ref().map_or(true, |s| s.contains(city))];
                        (city)
                    }
                    br;
                }
            }

            label { "Property Type"
                select name="type" {
                    option value="" { "All" }
                    @for t in &facets.property_types {
                        option value=(t) selected[criteria.property_type.as_deref() == Some(t.as_str())] { (t) }
                    }
                }
            }

            label { "Price Range"
                input type="number" name="price_min" value=(format!("{price_min:.0}"));
                input type="number" name="price_max" value=(format!("{price_max:.0}"));
            }

            label { "Agent"
                select name="agent" {
                    option value="" { "All" }
                    @for a in &facets.agents {
                        option value=(a) selected[criteria.agent.as_deref() == Some(a.as_str())] { (a) }
                    }
                }
            }

            label { "Date Listed Range"
                input type="date" name="date_start"
                    value=[criteria.date_range.map(|(s, _)| s.to_string())];
                input type="date" name="date_end"
                    value=[criteria.date_range.map(|(_, e)| e.to_string())];
            }

            label { "Page"
                input type="number" name="page" min="1" max=(vm.page_count) value=(vm.page);
            }

            button type="submit" { "Apply" }
        }
    }
}

fn listings_table(vm: &DashboardVm) -> Markup {
    html! {
        table {
            tr {
                th { "ID" } th { "City" } th { "Type" } th { "Price" }
                th { "Sqft" } th { "Agent" } th { "Listed" }
            }
            @for l in vm.page_rows {
                tr {
                    td { (l.id) }
                    td { (l.city) }
                    td { (l.property_type) }
                    td { (money(l.price)) }
                    td { (format!("{:.0}", l.sqft)) }
                    td { (l.agent_id) }
                    td { (l.date_listed.map(|d| d.to_string()).unwrap_or_default()) }
                }
            }
        }
        p { "Page " (vm.page) " of " (vm.page_count) }
    }
}

fn monthly_trend(monthly: &[(String, usize)]) -> Markup {
    let max = monthly.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
    html! {
        table {
            @for (month, n) in monthly {
                tr {
                    td { (month) }
                    td { span class="bar" style=(format!("width:{}px", n * 160 / max)) {} " " (n) }
                }
            }
        }
    }
}

fn locations_table(located: &[&Listing]) -> Markup {
    html! {
        @if located.is_empty() {
            p { "No geocoded listings in the current selection." }
        } @else {
            table {
                tr { th { "ID" } th { "City" } th { "Latitude" } th { "Longitude" } }
                @for l in located {
                    tr {
                        td { (l.id) }
                        td { (l.city) }
                        td { (format!("{:.4}", l.latitude.unwrap_or_default())) }
                        td { (format!("{:.4}", l.longitude.unwrap_or_default())) }
                    }
                }
            }
        }
    }
}

fn query_picker() -> Markup {
    html! {
        form method="get" action="/insights" {
            label { "Select Business Question"
                select name="query" {
                    @for q in &CATALOG {
                        option value=(q.name) { (q.label) }
                    }
                }
            }
            button type="submit" { "Run" }
        }
    }
}

fn money(v: f64) -> String {
    format!("${:.0}", v)
}
