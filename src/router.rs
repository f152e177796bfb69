use crate::db::Database;
use crate::errors::ServerError;
use crate::responses::{error_response, html_response, json_response, no_content, ResultResp};
use crate::service::{self, ListParams};
use crate::templates;
use astra::{Request, Response};
use serde_json::json;
use std::collections::HashMap;
use std::time::Instant;

const LISTINGS_PATH: &str = "/api/apartments";

/// Server entry point: route, turn errors into responses, log the outcome.
pub fn serve(req: Request, db: &Database) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    tracing::debug!(%method, %path, "request received");

    let resp = match handle(req, db) {
        Ok(resp) => resp,
        Err(err) => error_response(&err, &path),
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );
    resp
}

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    if method == "OPTIONS" {
        return no_content();
    }

    match (method, path) {
        ("GET", "/") => {
            let params = ListParams::from_query(&parse_query(&req))?;
            let results = service::list_listings(db, &params)?;
            html_response(templates::pages::home_page(&params, &results))
        }

        ("GET", LISTINGS_PATH) => {
            let params = ListParams::from_query(&parse_query(&req))?;
            let page = service::list_listings(db, &params)?;
            json_response(200, &page)
        }

        ("GET", "/api/health") => {
            db.ping()?;
            json_response(200, &json!({ "status": "ok" }))
        }

        ("GET", p) => match listing_id_segment(p) {
            Some(raw) => {
                let listing = service::get_listing(db, parse_listing_id(raw)?)?;
                json_response(200, &listing)
            }
            None => Err(ServerError::NotFound),
        },

        (_, p) if is_known_path(p) => Err(ServerError::MethodNotAllowed),

        _ => Err(ServerError::NotFound),
    }
}

/// `/api/apartments/{id}` -> `{id}`. Trailing slashes and deeper paths do not match.
fn listing_id_segment(path: &str) -> Option<&str> {
    path.strip_prefix(LISTINGS_PATH)?
        .strip_prefix('/')
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
}

fn parse_listing_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("listing id must be an integer, got '{raw}'")))
}

fn is_known_path(path: &str) -> bool {
    matches!(path, "/" | LISTINGS_PATH | "/api/health") || listing_id_segment(path).is_some()
}

/// Decoded query parameters; on repeated keys the last one wins.
fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
