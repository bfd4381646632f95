/* src/client/rust/src/error.rs */

use std::fmt;

use thiserror::Error;

use crate::host::Anchor;

/// Suspension point of a navigation that a deadline applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  Fetch,
  TemplateStyles,
  TemplateScripts,
  PageStyles,
  PageScripts,
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Stage::Fetch => "navigation fetch",
      Stage::TemplateStyles => "template styles",
      Stage::TemplateScripts => "template scripts",
      Stage::PageStyles => "page styles",
      Stage::PageScripts => "page scripts",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
  #[error("navigation request failed: {0}")]
  Fetch(String),
  #[error("malformed navigation payload: {0}")]
  Payload(String),
  #[error("{stage} did not finish within {timeout_ms} ms")]
  Timeout { stage: Stage, timeout_ms: u64 },
  #[error("document has no {0} anchor")]
  MissingAnchor(Anchor),
  #[error("no element with id \"{0}\" to mount the page into")]
  MissingMount(String),
}
