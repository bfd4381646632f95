/* src/server/core/rust/src/respond.rs */

//! Framework-agnostic request handling. Adapters translate a [`Reply`] into
//! their own response type.

use std::sync::Arc;

use veneer_engine::{
  DocumentConfig, NavigationPayload, NavigationRequest, PageFragments, PagePayload,
  SpliceOutcome, TemplateFragments, TemplatePayload, compose, is_static_path,
};

use crate::errors::VeneerError;
use crate::files::CachedFile;
use crate::page::Page;
use crate::request::RequestCtx;
use crate::site::Site;
use crate::template::Template;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "405 Method Not Allowed.";
pub const NOT_FOUND_MESSAGE: &str = "404 Not Found.";

#[derive(Debug)]
pub enum Reply {
  /// Full document, `text/html; charset=utf-8`.
  Html(String),
  /// Partial-navigation payload, `application/json`.
  Json(NavigationPayload),
  /// Temporary redirect to the given URL.
  Redirect(String),
  File(CachedFile),
  /// `{"success": false, "error": message}` with the error's status.
  Error(VeneerError),
}

/// `GET <page.url>`: hooks, then the full document.
pub async fn respond_document(
  site: &Site,
  page: &Page,
  req: Arc<RequestCtx>,
) -> Result<Reply, VeneerError> {
  let template = site.template_for(page)?;
  if let Some(target) = run_hooks(template, page, &req).await? {
    tracing::debug!(url = %req.url, %target, "request hook redirected");
    return Ok(Reply::Redirect(target));
  }

  let template_head = template.head.resolve(&req).await?;
  let template_body = template.body.resolve(&req).await?;
  let page_head = page.head.resolve(&req).await?;
  let page_body = page.body.resolve(&req).await?;

  let config = site.config();
  let composed = compose(
    &DocumentConfig {
      lang: &config.lang,
      mount: site.mount(),
      navigation_timeout_ms: config.navigation_timeout_ms,
    },
    &TemplateFragments {
      name: &template.name,
      styles: &template.styles,
      scripts: &template.scripts,
      head: &template_head,
      body: &template_body,
    },
    &PageFragments {
      title: &page.title,
      favicon: &page.favicon,
      styles: &page.styles,
      scripts: &page.scripts,
      head: &page_head,
      body: &page_body,
    },
  );
  if composed.splice == SpliceOutcome::MissingAnchor {
    tracing::warn!(
      template = %template.name,
      page = %page.url,
      mount = site.mount().id(),
      "template body has no mount element, page body dropped"
    );
  }
  Ok(Reply::Html(composed.html))
}

/// `POST <page.url>`: hooks, then the navigation payload. The template is
/// rendered only when the client does not already have it applied.
pub async fn respond_navigation(
  site: &Site,
  page: &Page,
  req: Arc<RequestCtx>,
  nav: &NavigationRequest,
) -> Result<Reply, VeneerError> {
  let template = site.template_for(page)?;
  if let Some(target) = run_hooks(template, page, &req).await? {
    tracing::debug!(url = %req.url, %target, "request hook redirected");
    return Ok(Reply::Redirect(target));
  }

  let template_payload = if nav.needs_template(&page.template) {
    Some(TemplatePayload {
      name: template.name.clone(),
      styles: template.styles.clone(),
      scripts: template.scripts.clone(),
      head: template.head.resolve(&req).await?,
      body: template.body.resolve(&req).await?,
    })
  } else {
    None
  };

  let page_payload = PagePayload {
    styles: page.styles.clone(),
    scripts: page.scripts.clone(),
    head: page.head.resolve(&req).await?,
    body: page.body.resolve(&req).await?,
  };

  tracing::debug!(
    url = %req.url,
    with_template = template_payload.is_some(),
    "navigation payload"
  );
  Ok(Reply::Json(NavigationPayload {
    url: req.url.clone(),
    title: page.title.clone(),
    favicon: page.favicon.clone(),
    template: template_payload,
    page: page_payload,
  }))
}

/// Requests that match no page: method check, aliases, static files, then
/// the 404 redirect.
pub async fn route_unmatched(site: &Site, method: &str, path: &str) -> Reply {
  let is_post = method.eq_ignore_ascii_case("POST");
  if !is_post && !method.eq_ignore_ascii_case("GET") {
    return Reply::Error(VeneerError::method_not_allowed(METHOD_NOT_ALLOWED_MESSAGE));
  }

  if let Some(target) = site.config().alias.get(path) {
    tracing::debug!(%path, %target, "alias");
    return Reply::Redirect(target.clone());
  }

  if is_static_path(path) {
    if is_post {
      return Reply::Error(VeneerError::new("METHOD_NOT_ALLOWED", METHOD_NOT_ALLOWED_MESSAGE, 404));
    }
    return match site.files().serve(site.workspace(), path).await {
      Some(file) => Reply::File(file),
      None => Reply::Error(VeneerError::not_found(NOT_FOUND_MESSAGE)),
    };
  }

  tracing::debug!(%path, target = %site.config().redirect_404, "unknown route");
  Reply::Redirect(site.config().redirect_404.clone())
}

/// Template hook first, then page hook; the first redirect wins.
async fn run_hooks(
  template: &Template,
  page: &Page,
  req: &Arc<RequestCtx>,
) -> Result<Option<String>, VeneerError> {
  for hook in [&template.on_request, &page.on_request].into_iter().flatten() {
    if let Some(target) = hook.run(req).await? {
      return Ok(Some(target));
    }
  }
  Ok(None)
}
