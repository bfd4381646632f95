/* src/cli/core/src/main.rs */

mod check;
mod config;
mod logging;
mod serve;
mod site;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::{Overrides, resolve_settings};

#[derive(Parser)]
#[command(name = "veneer", about = "Veneer page server CLI", version)]
struct Cli {
  /// Emit logs as JSON lines
  #[arg(long, global = true)]
  log_json: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve a workspace over HTTP
  Serve {
    #[command(flatten)]
    site: SiteArgs,
  },
  /// Validate a workspace without serving it
  Check {
    #[command(flatten)]
    site: SiteArgs,
  },
}

#[derive(Args)]
struct SiteArgs {
  /// Path to veneer.toml (auto-detected if omitted)
  #[arg(short, long)]
  config: Option<PathBuf>,
  /// Workspace directory (overrides [site].workspace)
  #[arg(short, long)]
  workspace: Option<PathBuf>,
  #[arg(short, long)]
  port: Option<u16>,
  #[arg(long)]
  lang: Option<String>,
  /// Redirect target for unknown paths
  #[arg(long)]
  redirect_404: Option<String>,
}

impl SiteArgs {
  fn overrides(&self) -> Overrides {
    Overrides {
      workspace: self.workspace.clone(),
      port: self.port,
      lang: self.lang.clone(),
      redirect_404: self.redirect_404.clone(),
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init(cli.log_json);

  let cwd = std::env::current_dir().context("failed to read current directory")?;
  match cli.command {
    Command::Serve { site } => {
      ui::banner("serve");
      let settings = resolve_settings(site.config.as_deref(), &cwd, &site.overrides())?;
      serve::run_serve(&settings).await
    }
    Command::Check { site } => {
      ui::banner("check");
      let settings = resolve_settings(site.config.as_deref(), &cwd, &site.overrides())?;
      check::run_check(&settings)
    }
  }
}
