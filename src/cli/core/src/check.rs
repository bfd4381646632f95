/* src/cli/core/src/check.rs */

// `veneer check` command: load the workspace and report what was found
// without binding a port.

use anyhow::Result;

use crate::config::{CONFIG_FILE, Settings};
use crate::site::build_site;
use crate::ui;

pub fn run_check(settings: &Settings) -> Result<()> {
  match &settings.source {
    Some(source) => ui::arrow(&format!("using {}", source.display())),
    None => ui::detail(&format!("no {CONFIG_FILE} found, using defaults")),
  }
  ui::arrow(&format!("checking {}", settings.workspace.display()));

  let site = match build_site(settings) {
    Ok(site) => site,
    Err(err) => {
      ui::fail(&format!("{err:#}"));
      return Err(err);
    }
  };

  ui::ok(&format!("{} templates", site.template_count()));
  ui::ok(&format!("{} pages", site.pages().len()));
  ui::ok(&format!("{} scripts cached", site.files().len()));
  for page in site.pages() {
    ui::detail(&format!("{} -> {}", page.url, page.template));
  }
  Ok(())
}
