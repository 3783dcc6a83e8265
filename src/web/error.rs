use crate::errors::Error;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Error returned by page handlers.
///
/// Every failure is scoped to the request that caused it: a missing project
/// becomes a 404 page, anything unexpected a logged 500.
#[derive(Debug)]
pub struct WebError(pub Error);

impl From<Error> for WebError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<askama::Error> for WebError {
    fn from(err: askama::Error) -> Self {
        Self(Error::Template(err))
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::ProjectNotFound { .. } | Error::DonationNotFound { .. } => {
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            Error::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            Error::InvalidAmount { .. } => (
                StatusCode::BAD_REQUEST,
                "Please enter a valid donation amount.".to_string(),
            ),
            _ => {
                tracing::error!("Request failed: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong. Please try again later.".to_string(),
                )
            }
        };

        let body = Html(format!(
            "<!DOCTYPE html><html><body><h1>{}</h1><p>{}</p></body></html>",
            status.as_u16(),
            message
        ));

        (status, body).into_response()
    }
}
