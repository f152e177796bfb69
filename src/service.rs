// src/service.rs
use crate::db::{listings, Database};
use crate::domain::{
    Filter, ListingView, Page, PageRequest, Sort, SortDirection, SortField, FILTER_PARAMS,
};
use crate::errors::ServerError;
use std::collections::HashMap;

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_SIZE: i64 = 12;
pub const DEFAULT_SORT_BY: &str = "agg_datetime";

/// Raw list/search parameters, as they arrive on the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: i64,
    pub size: i64,
    pub sort_by: String,
    pub order: Option<String>,
    pub q: String,
    pub filters: Vec<Filter>,
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            sort_by: DEFAULT_SORT_BY.to_string(),
            order: None,
            q: String::new(),
            filters: Vec::new(),
        }
    }
}

impl ListParams {
    /// `page`/`size` must be integers when present; everything else is taken as-is.
    /// Empty filter values are ignored, and one field is filtered at most once.
    pub fn from_query(query: &HashMap<String, String>) -> Result<Self, ServerError> {
        let defaults = ListParams::default();

        Ok(ListParams {
            page: int_param(query, "page")?.unwrap_or(defaults.page),
            size: int_param(query, "size")?.unwrap_or(defaults.size),
            sort_by: query.get("sortBy").cloned().unwrap_or(defaults.sort_by),
            order: query.get("order").cloned(),
            q: query.get("q").cloned().unwrap_or_default(),
            filters: filter_params(query),
        })
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page,
            self.size,
            resolve_sort(&self.sort_by, self.order.as_deref()),
        )
    }

    /// The search term, or `None` when it is blank.
    pub fn search_term(&self) -> Option<&str> {
        if self.q.trim().is_empty() {
            None
        } else {
            Some(&self.q)
        }
    }
}

fn filter_params(query: &HashMap<String, String>) -> Vec<Filter> {
    let mut filters: Vec<Filter> = Vec::new();
    for (name, field) in FILTER_PARAMS {
        let Some(value) = query.get(name).filter(|v| !v.is_empty()) else {
            continue;
        };
        if filters.iter().all(|f| f.field != field) {
            filters.push(Filter::new(field, value.clone()));
        }
    }
    filters
}

fn int_param(query: &HashMap<String, String>, name: &str) -> Result<Option<i64>, ServerError> {
    match query.get(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<i64>().map(Some).map_err(|_| {
            ServerError::BadRequest(format!("parameter '{name}' must be an integer, got '{raw}'"))
        }),
    }
}

/// Unknown fields fall back to `agg_datetime DESC`, whatever `order` said.
pub fn resolve_sort(sort_by: &str, order: Option<&str>) -> Sort {
    match sort_by.parse::<SortField>() {
        Ok(field) => Sort::new(field, SortDirection::from_param(order)),
        Err(e) => {
            tracing::debug!(error = %e, "falling back to default sort");
            Sort::default()
        }
    }
}

pub fn list_listings(db: &Database, params: &ListParams) -> Result<Page<ListingView>, ServerError> {
    let request = params.page_request();

    let page = db.with_conn(|conn| match params.search_term() {
        Some(term) => listings::search(conn, term, &params.filters, &request),
        None => listings::list_all(conn, &params.filters, &request),
    })?;

    tracing::debug!(
        page = request.page(),
        size = request.size(),
        sort = %request.sort.order_by(),
        filters = params.filters.len(),
        total = page.total_elements,
        "listed apartments"
    );

    Ok(page.map(ListingView::from))
}

pub fn get_listing(db: &Database, id: i64) -> Result<ListingView, ServerError> {
    db.with_conn(|conn| listings::get_by_id(conn, id))?
        .map(ListingView::from)
        .ok_or(ServerError::ListingNotFound(id))
}
