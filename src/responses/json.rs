// responses/json.rs
use crate::errors::ServerError;
use crate::responses::{ResultResp, ALLOW_ORIGIN};
use astra::{Body, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize response");
        ServerError::InternalError
    })?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// CORS preflight answer.
pub fn no_content() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .header("Access-Control-Allow-Methods", "GET, OPTIONS")
        .header("Access-Control-Allow-Headers", "*")
        .header("Access-Control-Max-Age", "3600")
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
