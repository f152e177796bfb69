use crate::responses::ALLOW_ORIGIN;
use astra::{Body, Response, ResponseBuilder};

/// Build a basic HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let markup = maud::html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to listings" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .body(Body::from(markup.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
