/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{MatchedPath, State};
use axum::http::{HeaderMap, Uri};
use veneer_engine::NavigationRequest;
use veneer_server::{RequestCtx, RequestMethod, respond_document, respond_navigation};

use super::AppState;
use crate::error::AxumError;
use crate::reply::AxumReply;

fn request_ctx(method: RequestMethod, uri: &Uri, headers: &HeaderMap) -> RequestCtx {
  let url = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
  let mut req = RequestCtx::new(method, url);
  for (name, value) in headers {
    if let Ok(value) = value.to_str() {
      req = req.with_header(name.as_str(), value);
    }
  }
  req
}

pub(super) async fn handle_document(
  State(state): State<Arc<AppState>>,
  matched: MatchedPath,
  uri: Uri,
  headers: HeaderMap,
) -> Result<AxumReply, AxumError> {
  let page = state.page(matched.as_str())?;
  let req = Arc::new(request_ctx(RequestMethod::Get, &uri, &headers));
  let reply = respond_document(&state.site, page, req).await?;
  Ok(AxumReply(reply))
}

pub(super) async fn handle_navigation(
  State(state): State<Arc<AppState>>,
  matched: MatchedPath,
  uri: Uri,
  headers: HeaderMap,
  body: Bytes,
) -> Result<AxumReply, AxumError> {
  let page = state.page(matched.as_str())?;
  let nav = NavigationRequest::from_body(&body);
  let mut req = request_ctx(RequestMethod::Post, &uri, &headers);
  if let Ok(json) = serde_json::from_slice(&body) {
    req = req.with_body(json);
  }
  let reply = respond_navigation(&state.site, page, Arc::new(req), &nav).await?;
  Ok(AxumReply(reply))
}
