/* src/server/core/rust/src/lib.rs */

pub mod config;
pub mod errors;
pub mod files;
pub mod fragment;
pub mod hook;
pub mod page;
pub mod request;
pub mod respond;
pub mod server;
pub mod site;
pub mod template;
pub mod workspace;

// Re-exports for ergonomic use
pub use config::{Config, DEFAULT_LANG, DEFAULT_NAVIGATION_TIMEOUT_MS, DEFAULT_PORT, default_alias};
pub use errors::VeneerError;
pub use files::{CachedFile, FileCache, JAVASCRIPT_MIME, ScriptTransform, identity_transform};
pub use fragment::{BoxFuture, Fragment, RenderFn};
pub use hook::{HookFn, RequestHook};
pub use page::{DEFAULT_FAVICON, Page};
pub use request::{RequestCtx, RequestMethod};
pub use respond::{
  METHOD_NOT_ALLOWED_MESSAGE, NOT_FOUND_MESSAGE, Reply, respond_document, respond_navigation,
  route_unmatched,
};
pub use server::VeneerServer;
pub use site::Site;
pub use template::Template;
pub use veneer_engine::{NavigationPayload, NavigationRequest};
pub use workspace::{Definitions, REQUIRED_DIRECTORIES, check_workspace, load_definitions};
