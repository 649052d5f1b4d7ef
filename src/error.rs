//! Defines the app level error type and its mapping to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// An empty string was used to create a subcategory name.
    #[error("subcategory name cannot be empty")]
    EmptySubcategoryName,

    /// The request body was missing, was not valid JSON, or was missing a
    /// required field.
    ///
    /// The wrapped string describes the problem and is safe to send to the
    /// client.
    #[error("could not parse the request body: {0}")]
    InvalidRequest(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent with every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// A description of what went wrong.
    ///
    /// Internal failures are replaced with a generic message; the details
    /// only appear in the server logs.
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::EmptyCategoryName | Error::EmptySubcategoryName | Error::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("An unexpected error occurred: {}", self);
            "Internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let response = Error::EmptyCategoryName.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = Error::InvalidRequest("missing field `amount`".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = Error::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn sql_errors_map_to_internal_server_error() {
        let response = Error::SqlError(rusqlite::Error::InvalidQuery).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn no_rows_converts_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert_eq!(error, Error::NotFound);
    }
}
