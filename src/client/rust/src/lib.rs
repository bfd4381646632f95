/* src/client/rust/src/lib.rs */

//! Client side of Veneer partial navigation.
//!
//! [`Navigator`] drives one browser document through navigations: it posts
//! the current template name to the target page, then patches the document
//! through a [`DomHost`] with the returned payload. The host owns the real
//! DOM, history, timers and network; the navigator owns the ordering.

pub mod cookies;
pub mod error;
pub mod host;
pub mod navigator;
pub mod path;
pub mod session;

pub use error::{NavigationError, Stage};
pub use host::{Anchor, AssetKind, DomHost, FetchResponse, Position, Scope};
pub use navigator::{Navigator, Options, Outcome, Phase};
pub use session::TemplateSlot;
pub use veneer_engine::Origin;
