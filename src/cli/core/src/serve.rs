/* src/cli/core/src/serve.rs */

use anyhow::{Result, anyhow};
use veneer_server_axum::IntoAxumRouter;

use crate::config::Settings;
use crate::site::build_site;
use crate::ui;

/// Run `veneer serve`: validate the workspace, then serve it until interrupted.
pub async fn run_serve(settings: &Settings) -> Result<()> {
  let site = build_site(settings)?;
  let port = site.config().port;

  ui::ok(&format!("{} pages across {} templates", site.pages().len(), site.template_count()));
  ui::arrow(&format!("http://localhost:{port}"));
  println!();

  site.serve(&format!("0.0.0.0:{port}")).await.map_err(|e| anyhow!("server error: {e}"))
}
