// templates/pages/home.rs

use crate::domain::{ListingView, Page, SortField};
use crate::service::ListParams;
use crate::templates::{desktop_layout, listing_card};
use maud::{html, Markup};

const SORT_CHOICES: [(&str, &str); 6] = [
    ("agg_datetime", "Newest"),
    ("apt_result_apartment_name", "Name"),
    ("apt_result_min_rent", "Min rent"),
    ("apt_result_max_rent", "Max rent"),
    ("apt_result_available_date_formatted", "Available date"),
    ("state", "State"),
];

/// Link to another page of the same query.
fn page_href(params: &ListParams, page: i64) -> String {
    let mut qs = url::form_urlencoded::Serializer::new(String::new());
    qs.append_pair("page", &page.to_string());
    qs.append_pair("size", &params.size.to_string());
    qs.append_pair("sortBy", &params.sort_by);
    if let Some(order) = params.order.as_deref() {
        qs.append_pair("order", order);
    }
    if !params.q.is_empty() {
        qs.append_pair("q", &params.q);
    }
    for filter in &params.filters {
        qs.append_pair(filter.param(), &filter.value);
    }
    format!("/?{}", qs.finish())
}

fn filter_value<'a>(params: &'a ListParams, field: SortField) -> &'a str {
    params
        .filters
        .iter()
        .find(|f| f.field == field)
        .map(|f| f.value.as_str())
        .unwrap_or("")
}

pub fn home_page(params: &ListParams, results: &Page<ListingView>) -> Markup {
    let ascending = params
        .order
        .as_deref()
        .is_some_and(|o| o.eq_ignore_ascii_case("asc"));
    let total_pages = results.total_pages().max(1);

    desktop_layout(
        "Apartments",
        html! {
            form class="search" method="get" action="/" {
                input type="search" name="q" value=(params.q) placeholder="Search name or address";
                select name="sortBy" {
                    @for (value, label) in SORT_CHOICES {
                        option value=(value) selected[params.sort_by == value] { (label) }
                    }
                }
                select name="order" {
                    option value="desc" selected[!ascending] { "Descending" }
                    option value="asc" selected[ascending] { "Ascending" }
                }
                input type="text" name="bed" size="3" value=(filter_value(params, SortField::Bed)) placeholder="Beds";
                input type="text" name="bath" size="3" value=(filter_value(params, SortField::Bath)) placeholder="Baths";
                input type="text" name="state" size="3" value=(filter_value(params, SortField::State)) placeholder="State";
                input type="hidden" name="size" value=(params.size);
                button type="submit" { "Search" }
            }

            p class="muted" { (results.total_elements) " apartments" }

            @if results.items.is_empty() {
                div class="empty" { "No apartments found." }
            } @else {
                div class="cards-grid" {
                    @for listing in &results.items {
                        (listing_card(listing))
                    }
                }
            }

            nav class="pager" {
                @if results.is_first() {
                    span {}
                } @else {
                    a href=(page_href(params, results.page - 1)) { "← Previous" }
                }
                span class="muted" { "Page " (results.page.saturating_add(1)) " of " (total_pages) }
                @if results.is_last() {
                    span {}
                } @else {
                    a href=(page_href(params, results.page.saturating_add(1))) { "Next →" }
                }
            }
        },
    )
}
