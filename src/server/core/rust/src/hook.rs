/* src/server/core/rust/src/hook.rs */

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::errors::VeneerError;
use crate::fragment::BoxFuture;
use crate::request::RequestCtx;

pub type HookFn =
  Arc<dyn Fn(Arc<RequestCtx>) -> BoxFuture<Result<Option<String>, VeneerError>> + Send + Sync>;

/// Runs before any rendering. Returning a non-empty URL short-circuits the
/// request to a redirect.
#[derive(Clone)]
pub struct RequestHook(HookFn);

impl RequestHook {
  pub fn new<F, Fut>(hook: F) -> Self
  where
    F: Fn(Arc<RequestCtx>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Option<String>, VeneerError>> + Send + 'static,
  {
    Self(Arc::new(move |req: Arc<RequestCtx>| -> BoxFuture<Result<Option<String>, VeneerError>> {
      Box::pin(hook(req))
    }))
  }

  pub fn from_fn<F>(hook: F) -> Self
  where
    F: Fn(&RequestCtx) -> Option<String> + Send + Sync + 'static,
  {
    let hook = Arc::new(hook);
    Self(Arc::new(move |req: Arc<RequestCtx>| -> BoxFuture<Result<Option<String>, VeneerError>> {
      let hook = hook.clone();
      Box::pin(async move { Ok(hook(req.as_ref())) })
    }))
  }

  /// The redirect target, if the hook asked for one. Empty strings count as no redirect.
  pub async fn run(&self, req: &Arc<RequestCtx>) -> Result<Option<String>, VeneerError> {
    let target = (self.0)(req.clone()).await?;
    Ok(target.filter(|url| !url.is_empty()))
  }
}

impl fmt::Debug for RequestHook {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("RequestHook(..)")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::request::RequestMethod;

  #[tokio::test]
  async fn redirects_when_cookie_missing() {
    let hook = RequestHook::from_fn(|req| req.cookie("session").is_none().then(|| "/login".into()));
    let anonymous = Arc::new(RequestCtx::new(RequestMethod::Get, "/admin"));
    let signed_in = Arc::new(
      RequestCtx::new(RequestMethod::Get, "/admin").with_header("cookie", "session=1"),
    );
    assert_eq!(hook.run(&anonymous).await.unwrap().as_deref(), Some("/login"));
    assert_eq!(hook.run(&signed_in).await.unwrap(), None);
  }

  #[tokio::test]
  async fn empty_target_is_not_a_redirect() {
    let hook = RequestHook::from_fn(|_| Some(String::new()));
    let req = Arc::new(RequestCtx::new(RequestMethod::Get, "/"));
    assert_eq!(hook.run(&req).await.unwrap(), None);
  }

  #[tokio::test]
  async fn async_hook() {
    let hook = RequestHook::new(|req| async move {
      if req.method == RequestMethod::Post { Ok(Some("/read-only".into())) } else { Ok(None) }
    });
    let post = Arc::new(RequestCtx::new(RequestMethod::Post, "/"));
    assert_eq!(hook.run(&post).await.unwrap().as_deref(), Some("/read-only"));
  }
}
