/* src/server/adapter/axum/src/handler/mod.rs */

mod client;
mod page;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::routing::get;
use veneer_engine::CLIENT_PATH;
use veneer_server::{Page, Site, VeneerError, route_unmatched};

use crate::reply::AxumReply;

pub(crate) struct AppState {
  pub site: Arc<Site>,
  /// Route pattern -> page, looked up through `MatchedPath`.
  pub pages: HashMap<String, Arc<Page>>,
  /// Client engine after the script transform.
  pub client: Result<String, VeneerError>,
}

impl AppState {
  fn page(&self, route: &str) -> Result<&Arc<Page>, VeneerError> {
    self.pages.get(route).ok_or_else(|| VeneerError::not_found("Page not found"))
  }
}

pub(crate) fn build_router(site: Arc<Site>) -> Router {
  let mut page_map = HashMap::new();
  let mut router = Router::new().route(CLIENT_PATH, get(client::handle_client));

  for page in site.pages() {
    page_map.insert(page.url.clone(), page.clone());
    router =
      router.route(&page.url, get(page::handle_document).post(page::handle_navigation));
  }

  let client = client::prepare(&site);
  let state = Arc::new(AppState { site, pages: page_map, client });

  router.fallback(handle_unmatched).with_state(state)
}

async fn handle_unmatched(
  State(state): State<Arc<AppState>>,
  method: Method,
  uri: Uri,
) -> AxumReply {
  AxumReply(route_unmatched(&state.site, method.as_str(), uri.path()).await)
}
