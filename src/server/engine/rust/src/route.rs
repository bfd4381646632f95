/* src/server/engine/rust/src/route.rs */

use std::sync::OnceLock;

use regex::Regex;

/// URL prefixes served from workspace directories. Page URLs may not start with these.
pub const STATIC_PREFIXES: [&str; 3] = ["/styles", "/scripts", "/assets"];

#[allow(clippy::unwrap_used)]
fn url_pattern() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^(/|(?:/[^/]+)+)$").unwrap())
}

/// `/` or one or more non-empty `/segment`s, without a trailing slash.
pub fn is_valid_url(url: &str) -> bool {
  url_pattern().is_match(url)
}

pub fn is_static_path(path: &str) -> bool {
  STATIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}
