/* src/server/adapter/axum/src/handler/client.rs */

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use veneer_server::{JAVASCRIPT_MIME, Site, VeneerError};

use super::AppState;
use crate::error::AxumError;

const CLIENT_SOURCE: &str = include_str!("../../assets/veneer-client.js");

/// Run the embedded client through the site's script transform once.
pub(super) fn prepare(site: &Site) -> Result<String, VeneerError> {
  let client = (site.transform())(CLIENT_SOURCE, Path::new("veneer-client.js"));
  if let Err(err) = &client {
    tracing::error!(%err, "client engine transform failed");
  }
  client
}

pub(super) async fn handle_client(
  State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AxumError> {
  let source = state.client.clone()?;
  Ok(([(header::CONTENT_TYPE, JAVASCRIPT_MIME)], source))
}
