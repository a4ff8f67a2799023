use crate::domain::catalog::QueryOutput;
use crate::templates::components::card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn insights_page(name: &str, label: &str, output: &QueryOutput) -> Markup {
    desktop_layout(
        label,
        html! {
            main class="container" {
                section class="content" {
                    (card(label, html! {
                        table {
                            tr {
                                @for col in &output.columns {
                                    th { (col) }
                                }
                            }
                            @for row in &output.rows {
                                tr {
                                    @for cell in row {
                                        td { (cell) }
                                    }
                                }
                            }
                        }
                        @if output.rows.is_empty() {
                            p { "No rows." }
                        }
                        p {
                            a href=(format!("/api/query/{name}")) { "Raw JSON" }
                            " · "
                            a href="/" { "Back to dashboard" }
                        }
                    }))
                }
            }
        },
    )
}
