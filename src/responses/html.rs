use crate::errors::ServerError;
use crate::responses::{ResultResp, ALLOW_ORIGIN};
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
