/* src/server/engine/rust/src/lib.rs */

pub mod assets;
pub mod document;
pub mod escape;
pub mod payload;
pub mod route;
pub mod splice;

// Public API re-exports
pub use assets::{ORIGIN_ATTR, Origin, script_tag, script_tags, style_tag, style_tags};
pub use document::{
  CLIENT_PATH, CLIENT_SPECIFIER, Composed, DocumentConfig, PageFragments, TemplateFragments,
  compose,
};
pub use escape::{escape_attr, escape_script_json};
pub use payload::{NavigationPayload, NavigationRequest, PagePayload, TemplatePayload};
pub use route::{STATIC_PREFIXES, is_static_path, is_valid_url};
pub use splice::{DEFAULT_MOUNT_ID, MountAnchor, SpliceOutcome, Spliced};
