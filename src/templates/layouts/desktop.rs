use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLE) }
            }
            body {
                header class="topbar" {
                    h3 { "🏠 Real Estate Analytics Dashboard" }
                    nav {
                        ul {
                            li { a href="/" { "Dashboard" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

const STYLE: &str = "
body { font-family: sans-serif; margin: 0; }
.topbar { display: flex; align-items: center; justify-content: space-between;
          padding: 0.5rem 1.5rem; box-shadow: 0 1px 4px rgba(0,0,0,0.2); }
.topbar ul { list-style: none; display: flex; gap: 1rem; margin: 0; padding: 0; }
main.container { display: flex; gap: 1.5rem; padding: 1.5rem; }
aside.sidebar { flex: 0 0 220px; }
section.content { flex: 1; }
.card { border: 1px solid #ddd; border-radius: 6px; padding: 1rem; margin-bottom: 1rem; }
.metrics { display: flex; gap: 1rem; }
.metrics .card { flex: 1; text-align: center; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #eee; padding: 0.3rem 0.6rem; text-align: left; }
.bar { background: #524ed2; height: 0.8rem; display: inline-block; }
";
