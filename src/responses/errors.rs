use crate::errors::ServerError;
use crate::responses::ALLOW_ORIGIN;
use crate::templates;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

pub use crate::errors::ResultResp;

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    error: &'a str,
    message: String,
    path: &'a str,
}

/// Convert a ServerError into a response: JSON under `/api`, an HTML page elsewhere.
pub fn error_response(err: &ServerError, path: &str) -> Response {
    let status = err.status();

    match err {
        ServerError::DbError(msg) | ServerError::Unavailable(msg) => {
            tracing::error!(%path, error = %msg, "storage failure");
        }
        _ => tracing::debug!(%path, %err, "request failed"),
    }

    if path.starts_with("/api") {
        json_error_response(status, err, path)
    } else {
        templates::html_error_response(status, &err.public_message())
    }
}

fn json_error_response(status: u16, err: &ServerError, path: &str) -> Response {
    let body = ErrorBody {
        status,
        error: reason(status),
        message: err.public_message(),
        path,
    };
    let bytes = serde_json::to_vec(&body).unwrap_or_default();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .body(Body::from(bytes))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

fn reason(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        503 => "Service Unavailable",
        _ => "Internal Server Error",
    }
}
