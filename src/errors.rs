use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, bad parameters) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Apartment not found: {0}")]
    ListingNotFound(i64),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Service Unavailable: {0}")]
    Unavailable(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound | ServerError::ListingNotFound(_) => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::MethodNotAllowed => 405,
            ServerError::Unavailable(_) => 503,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }

    /// Message safe to show to a client. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::DbError(_) => "Internal Server Error".to_string(),
            ServerError::Unavailable(_) => "Database unavailable".to_string(),
            other => other.to_string(),
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
