/* src/client/rust/src/path.rs */

use url::Url;

/// Path used for navigation requests and history entries: pathname, search and hash.
pub fn normalize(url: &Url) -> String {
  let mut path = url.path().to_string();
  if let Some(query) = url.query() {
    path.push('?');
    path.push_str(query);
  }
  if let Some(fragment) = url.fragment() {
    path.push('#');
    path.push_str(fragment);
  }
  path
}

/// Resolve a link `href` against the current location. Only same-origin
/// http(s) targets qualify for partial navigation.
pub fn resolve_same_origin(location: &Url, href: &str) -> Option<Url> {
  let url = location.join(href).ok()?;
  let web = matches!(url.scheme(), "http" | "https");
  (web && url.origin() == location.origin()).then_some(url)
}

/// Element id named by the fragment of `path`, if any.
pub fn fragment_id(path: &str) -> Option<&str> {
  path.split_once('#').map(|(_, id)| id).filter(|id| !id.is_empty())
}

/// Script URL with a cache-busting parameter so re-inserted modules execute again.
pub fn cache_bust(src: &str, now_millis: u64) -> String {
  let separator = if src.contains('?') { '&' } else { '?' };
  format!("{src}{separator}cacheBust={now_millis}")
}
