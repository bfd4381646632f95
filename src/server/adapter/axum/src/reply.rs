/* src/server/adapter/axum/src/reply.rs */

use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use veneer_server::Reply;

use crate::error::AxumError;

/// Newtype wrapper to implement `IntoResponse` for the core's `Reply`.
pub(crate) struct AxumReply(pub Reply);

impl IntoResponse for AxumReply {
  fn into_response(self) -> Response {
    match self.0 {
      Reply::Html(html) => Html(html).into_response(),
      Reply::Json(payload) => axum::Json(payload).into_response(),
      Reply::Redirect(target) => Redirect::temporary(&target).into_response(),
      Reply::File(file) => ([(header::CONTENT_TYPE, file.mime_type)], file.content).into_response(),
      Reply::Error(err) => AxumError(err).into_response(),
    }
  }
}
