use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use vgraph_engine::{Cancelled, SparqlError};

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Content Negotiation Failed: {0}")]
    ContentNegotiation(String),
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<SparqlError> for ServerError {
    fn from(error: SparqlError) -> Self {
        match error {
            SparqlError::Syntax(error) => ServerError::BadRequest(error.to_string()),
            error => ServerError::Internal(error.into()),
        }
    }
}

impl From<Cancelled> for ServerError {
    fn from(error: Cancelled) -> Self {
        ServerError::Internal(error.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::ContentNegotiation(msg) => (StatusCode::NOT_ACCEPTABLE, msg),
            ServerError::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            ServerError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, message).into_response()
    }
}
