use maud::{html, Markup};
use std::collections::BTreeMap;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn metric(label: &str, value: &str) -> Markup {
    html! {
        div class="card" {
            p { (label) }
            h2 { (value) }
        }
    }
}

/// Horizontal bar rows for a category → count distribution.
pub fn bar_rows(counts: &BTreeMap<String, usize>) -> Markup {
    let max = counts.values().copied().max().unwrap_or(1).max(1);
    html! {
        table {
            @for (label, n) in counts {
                tr {
                    td { (label) }
                    td { span class="bar" style=(format!("width:{}px", n * 160 / max)) {} " " (n) }
                }
            }
        }
    }
}
