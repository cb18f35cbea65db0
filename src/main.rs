use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kpatch_watch::config::{self, Config};
use kpatch_watch::report::{check_feeds, filter_feeds, write_usage};
use kpatch_watch::version::fetchers::HttpFetcher;

#[derive(Parser, Debug)]
#[command(name = "kpatch-watch")]
#[command(version, about = "Check the latest kernel patch set versions for a kernel series")]
struct Cli {
    /// Linux kernel series, e.g. 3.10
    kseries: Option<String>,

    /// JSON configuration file (fetch settings and feed catalog)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only check the named feed (repeatable)
    #[arg(short, long = "feed")]
    feeds: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to the data directory instead of stderr
    #[arg(long)]
    log_file: bool,
}

/// Initialize the tracing subscriber.
///
/// `--verbose` sets the level to DEBUG; otherwise `RUST_LOG` is honoured,
/// defaulting to WARN so stdout carries only the report. The returned guard
/// must be held until exit to flush the log file.
fn init_tracing(
    verbose: bool,
    log_file: bool,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = if verbose {
        EnvFilter::new("kpatch_watch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kpatch_watch=warn"))
    };

    if log_file {
        let dir = config::data_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let appender = tracing_appender::rolling::never(&dir, "kpatch-watch.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .with(filter)
            .init();
        tracing::debug!("Logging to {}", config::log_path().display());
        return Ok(Some(guard));
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(None)
}

async fn run(cli: Cli, kseries: String) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let feeds = filter_feeds(config.catalog()?, &cli.feeds);
    let fetcher = HttpFetcher::new(&config.fetch)?;

    let mut stdout = std::io::stdout().lock();
    check_feeds(&feeds, &kseries, &fetcher, &mut stdout).await?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose, cli.log_file)?;

    tracing::debug!("kpatch-watch starting with args: {:?}", cli);

    let Some(kseries) = cli.kseries.clone() else {
        write_usage("kpatch-watch", &mut std::io::stdout().lock())?;
        return Ok(());
    };

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli, kseries))
}
