pub mod errors;
pub mod html;
pub mod json;

pub use errors::{error_response, ResultResp};
pub use html::html_response;
pub use json::{json_response, no_content};

/// Every response is readable cross-origin; the API has no credentials to protect.
pub const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
