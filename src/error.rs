//! Defines the app level error type and its mapping to HTTP responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The errors that may occur while handling a request.
///
/// All variants are terminal for the request that raised them: nothing is
/// retried and there are no partial-success responses.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A mutating operation was attempted while its feature flag is off.
    ///
    /// Raised before the request body is validated and before the store is
    /// touched.
    #[error("{0}")]
    Forbidden(&'static str),

    /// The path id or the request body could not be parsed.
    #[error("{0}")]
    BadRequest(String),

    /// The requested row does not exist.
    ///
    /// Raised when a single-row lookup matches nothing, so clients can tell
    /// a missing resource apart from a store failure.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {error}");
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match self {
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // The error text is sent to the client verbatim. No secrets flow
        // through these paths.
        (status_code, Json(self.to_string())).into_response()
    }
}
