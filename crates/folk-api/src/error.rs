//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use folk_core::validate::Violations;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Rendered as a bare 404 with no body.
  #[error("not found")]
  NotFound,

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  Invalid(Violations),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap a backend error; used as `.map_err(ApiError::store)`.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(e))
  }
}

impl From<folk_core::Error> for ApiError {
  fn from(e: folk_core::Error) -> Self {
    match e {
      folk_core::Error::IdSupplied(_) => ApiError::BadRequest(e.to_string()),
      folk_core::Error::Invalid(violations) => ApiError::Invalid(violations),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
      ApiError::BadRequest(message) => {
        tracing::warn!(%message, "rejected request");
        (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
      }
      ApiError::Invalid(violations) => {
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        tracing::warn!(?fields, "rejected invalid person");
        (
          StatusCode::BAD_REQUEST,
          Json(json!({ "error": "validation failed", "violations": violations })),
        )
          .into_response()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
    }
  }
}
