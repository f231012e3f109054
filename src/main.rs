mod app;
mod config;
mod dispatch;
mod event;
mod focus;
mod keys;
mod ui;

use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tvnav")]
#[command(about = "A terminal simulator for TV remote-control navigation")]
#[command(version)]
struct Args {
  /// Path to config file (default: $XDG_CONFIG_HOME/tvnav/config.yaml)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Override the number of grid rows
  #[arg(long)]
  rows: Option<usize>,

  /// Override the number of grid columns
  #[arg(long)]
  cols: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
  color_eyre::install()?;

  let args = Args::parse();

  let _log_guard = init_tracing()?;

  // Load configuration
  let mut config = config::Config::load(args.config.as_deref())?;

  // Override grid dimensions if specified on command line
  if let Some(rows) = args.rows {
    config.grid.rows = rows;
  }
  if let Some(cols) = args.cols {
    config.grid.cols = cols;
  }

  // Initialize and run the app
  let mut app = app::App::new(config)?;
  app.run().await?;

  Ok(())
}

/// Set up file logging; the terminal itself belongs to the TUI.
///
/// Filtered via TVNAV_LOG (default: info), written to
/// $XDG_STATE_HOME/tvnav/tvnav.log.<date>. The returned guard must stay
/// alive for the process lifetime or buffered lines are lost.
fn init_tracing() -> Result<tracing_appender::non_blocking::WorkerGuard> {
  let dir = dirs::state_dir()
    .or_else(dirs::cache_dir)
    .unwrap_or_else(|| PathBuf::from("."))
    .join("tvnav");
  std::fs::create_dir_all(&dir)?;

  let appender = tracing_appender::rolling::daily(dir, "tvnav.log");
  let (writer, guard) = tracing_appender::non_blocking(appender);

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_env("TVNAV_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(writer)
    .with_ansi(false)
    .init();

  Ok(guard)
}
