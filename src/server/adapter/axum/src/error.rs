/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use veneer_server::VeneerError;

/// Newtype wrapper to implement `IntoResponse` for `VeneerError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for VeneerError`
/// when both types are foreign to this crate.
pub(crate) struct AxumError(pub VeneerError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    if err.status() >= 500 {
      tracing::error!(code = err.code(), message = err.message(), "request failed");
    }
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "success": false,
      "error": err.message(),
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<VeneerError> for AxumError {
  fn from(err: VeneerError) -> Self {
    Self(err)
  }
}
