/* src/cli/core/src/config/mod.rs */

mod loader;
mod settings;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{CONFIG_FILE, find_veneer_config, load_veneer_config};
pub use settings::{Overrides, Settings, resolve_settings};
pub use types::VeneerToml;
