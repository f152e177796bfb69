use crate::domain::ListingView;
use maud::{html, Markup};

fn or_dash(v: Option<&str>) -> &str {
    match v {
        Some(s) if !s.trim().is_empty() => s,
        _ => "-",
    }
}

pub fn listing_card(listing: &ListingView) -> Markup {
    html! {
        article class="card" data-id=(listing.id) {
            h2 { (listing.name.as_deref().unwrap_or("Unnamed")) }
            div class="card-sub" { (or_dash(listing.address.as_deref())) }

            div {
                @if let Some(fp) = listing.floorplan.as_deref() {
                    span class="tag" { (fp) }
                }
                span class="tag" { "Beds: " (or_dash(listing.bed.as_deref())) }
                span class="tag" { "Baths: " (or_dash(listing.bath.as_deref())) }
                @if let Some(sqft) = listing.sqft.as_deref() {
                    span class="tag" { (sqft) " sqft" }
                }
            }

            div class="price" {
                (or_dash(listing.min_rent.as_deref())) " - " (or_dash(listing.max_rent.as_deref()))
            }
            div class="muted" {
                @match listing.available_date_formatted {
                    Some(d) => { "Available " (d.format("%b %-d, %Y").to_string()) }
                    None => { "Availability unknown" }
                }
                @if let Some(state) = listing.state.as_deref() {
                    " · " (state)
                }
            }
        }
    }
}
