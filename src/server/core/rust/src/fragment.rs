/* src/server/core/rust/src/fragment.rs */

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::VeneerError;
use crate::request::RequestCtx;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type RenderFn =
  Arc<dyn Fn(Arc<RequestCtx>) -> BoxFuture<Result<String, VeneerError>> + Send + Sync>;

/// Head or body content of a template or page: fixed markup, or markup
/// produced per request. Composition only ever sees the resolved string.
#[derive(Clone)]
pub enum Fragment {
  Static(String),
  Dynamic(RenderFn),
}

impl Fragment {
  pub fn markup(markup: impl Into<String>) -> Self {
    Self::Static(markup.into())
  }

  /// Markup computed by an async function of the request.
  pub fn dynamic<F, Fut>(render: F) -> Self
  where
    F: Fn(Arc<RequestCtx>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, VeneerError>> + Send + 'static,
  {
    Self::Dynamic(Arc::new(move |req: Arc<RequestCtx>| -> BoxFuture<Result<String, VeneerError>> {
      Box::pin(render(req))
    }))
  }

  /// Markup computed synchronously from the request.
  pub fn from_fn<F>(render: F) -> Self
  where
    F: Fn(&RequestCtx) -> String + Send + Sync + 'static,
  {
    let render = Arc::new(render);
    Self::Dynamic(Arc::new(move |req: Arc<RequestCtx>| -> BoxFuture<Result<String, VeneerError>> {
      let render = render.clone();
      Box::pin(async move { Ok(render(req.as_ref())) })
    }))
  }

  pub async fn resolve(&self, req: &Arc<RequestCtx>) -> Result<String, VeneerError> {
    match self {
      Fragment::Static(markup) => Ok(markup.clone()),
      Fragment::Dynamic(render) => render(req.clone()).await,
    }
  }

  /// The markup when it does not depend on the request.
  pub fn as_static(&self) -> Option<&str> {
    match self {
      Fragment::Static(markup) => Some(markup),
      Fragment::Dynamic(_) => None,
    }
  }
}

impl Default for Fragment {
  fn default() -> Self {
    Self::Static(String::new())
  }
}

impl From<&str> for Fragment {
  fn from(markup: &str) -> Self {
    Self::markup(markup)
  }
}

impl From<String> for Fragment {
  fn from(markup: String) -> Self {
    Self::Static(markup)
  }
}

impl fmt::Debug for Fragment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Fragment::Static(markup) => f.debug_tuple("Static").field(markup).finish(),
      Fragment::Dynamic(_) => f.write_str("Dynamic(..)"),
    }
  }
}
