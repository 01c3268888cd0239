//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catchup_domain::aggregate::Aggregate;
use catchup_domain::car::Car;
use catchup_domain::error::{CatchUpError, NotFoundError};
use catchup_domain::id::CarId;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Everything a handler can fail with, mapped to a status code on the way out.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the application layer.
    Domain(CatchUpError),
    /// The request body could not be bound to the expected resource.
    Body(JsonRejection),
    /// The create use-case produced no car.
    NotCreated,
}

impl ApiError {
    /// 404 for a car id with no matching record.
    #[must_use]
    pub fn car_not_found(id: CarId) -> Self {
        Self::Domain(
            NotFoundError {
                entity: Car::NAME,
                id: id.to_string(),
            }
            .into(),
        )
    }
}

impl From<CatchUpError> for ApiError {
    fn from(err: CatchUpError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Domain(CatchUpError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(CatchUpError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(CatchUpError::Storage(err)) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Body(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::NotCreated => (
                StatusCode::BAD_REQUEST,
                "car could not be created".to_string(),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
