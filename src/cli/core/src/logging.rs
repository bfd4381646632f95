/* src/cli/core/src/logging.rs */

use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn,veneer=info";

/// Install the global subscriber. `json` switches to one JSON object per line.
pub fn init(json: bool) {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
  let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
  let installed = if json { builder.json().try_init() } else { builder.try_init() };
  if let Err(err) = installed {
    eprintln!("failed to install log subscriber: {err}");
  }
}
