/* src/server/engine/rust/src/splice.rs */

//! Mount-anchor splicing: inject a rendered page body into the single
//! element of a template body that carries the mount id.

use regex::{Captures, Regex};

/// Mount id used when none is configured.
pub const DEFAULT_MOUNT_ID: &str = "app";

/// Compiled matcher for one mount id.
///
/// The pattern captures the opening tag whose attributes contain
/// `id="<mount>"` (either quote style, optional whitespace around `=`) and the
/// first closing tag after it. Everything in between is replaced. A mount
/// element holding nested elements therefore loses only up to the first
/// closing tag; templates are expected to leave the mount element empty.
#[derive(Debug, Clone)]
pub struct MountAnchor {
  id: String,
  pattern: Regex,
}

/// Result of a splice: the merged markup, and whether an anchor was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
  pub html: String,
  pub outcome: SpliceOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
  Injected,
  /// No mount element in the template body; the page body was dropped.
  MissingAnchor,
}

impl MountAnchor {
  pub fn new(id: &str) -> Self {
    let pattern = format!(
      r#"(?s)(<[^>]*id\s*=\s*['"]{}['"][^>]*>).*?(</[^>]*>)"#,
      regex::escape(id)
    );
    // The id is escaped, so the pattern is always valid.
    #[allow(clippy::unwrap_used)]
    let pattern = Regex::new(&pattern).unwrap();
    Self { id: id.to_string(), pattern }
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  /// Whether `template_body` contains a mount element for this id.
  pub fn is_present(&self, template_body: &str) -> bool {
    self.pattern.is_match(template_body)
  }

  /// Replace the content of the first mount element with `page_body`.
  /// Only the first match is touched; `$` sequences in the page body are kept verbatim.
  pub fn splice(&self, template_body: &str, page_body: &str) -> Spliced {
    if !self.pattern.is_match(template_body) {
      return Spliced { html: template_body.to_string(), outcome: SpliceOutcome::MissingAnchor };
    }
    let html = self
      .pattern
      .replacen(template_body, 1, |caps: &Captures<'_>| format!("{}{page_body}{}", &caps[1], &caps[2]))
      .into_owned();
    Spliced { html, outcome: SpliceOutcome::Injected }
  }
}

impl Default for MountAnchor {
  fn default() -> Self {
    Self::new(DEFAULT_MOUNT_ID)
  }
}
