use maud::{html, Markup, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f7fb; color: #1f2330; }
header { display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
main { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
.cards-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem; }
.card { background: #fff; border-radius: 12px; padding: 1rem; box-shadow: 0 1px 2px rgba(0,0,0,.06); }
.card h2 { font-size: 1.1rem; margin: 0 0 .25rem; }
.card-sub, .muted { color: #667; font-size: .9rem; }
.tag { display: inline-block; background: #eef0ff; border-radius: 6px; padding: .1rem .45rem; margin-right: .3rem; font-size: .85rem; }
.price { font-weight: 600; margin-top: .5rem; }
form.search { display: flex; gap: .5rem; flex-wrap: wrap; margin-bottom: 1rem; }
nav.pager { display: flex; justify-content: space-between; align-items: center; margin-top: 1.5rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Apartment Listings" }
                    a href="/api/apartments" { "JSON API" }
                }
                main { (content) }
            }
        }
    }
}
