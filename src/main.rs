use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use filedock::app::settings::config_dirs;
use filedock::runner;

/// Terminal file manager with a pinned/disk-aware directory sidebar.
#[derive(Parser, Debug)]
#[command(name = "filedock", version, about)]
struct Args {
    /// Directory to show in the main pane at startup.
    directory: Option<PathBuf>,

    /// Override the config directory (settings and pinned list).
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Log to a file in the cache dir; stdout belongs to the TUI. The guard
    // must outlive the event loop or buffered lines are lost.
    let cache_dir = config_dirs::user_cache_dir();
    std::fs::create_dir_all(&cache_dir)?;
    let appender = tracing_appender::rolling::never(&cache_dir, "filedock.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let config_dir = args
        .config_dir
        .unwrap_or_else(config_dirs::project_config_dir);
    runner::run_app(config_dir, args.directory)
}
