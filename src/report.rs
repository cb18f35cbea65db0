//! Checks a catalog of feeds and writes one line per feed

use std::io::Write;

use anyhow::Context;
use tracing::debug;

use crate::feed::types::Feed;
use crate::version::fetcher::ContentFetcher;
use crate::version::resolver::{LayeredResolver, Resolution};

/// Resolve every feed in order, writing `checking <name>...<outcome>` lines
///
/// Unsupported feeds are reported and the run continues; a fetch fault or an
/// invalid pattern aborts it.
pub async fn check_feeds<W: Write>(
    feeds: &[Feed],
    kseries: &str,
    fetcher: &dyn ContentFetcher,
    out: &mut W,
) -> anyhow::Result<Vec<(String, Resolution)>> {
    let resolver = LayeredResolver::new(fetcher);
    let mut outcomes = Vec::with_capacity(feeds.len());

    for feed in feeds {
        write!(out, "checking {}...", feed.name())?;
        out.flush()?;

        let resolution = resolver
            .resolve(feed, kseries)
            .await
            .with_context(|| format!("Failed to check feed '{}'", feed.name()))?;

        writeln!(out, "{}", resolution)?;
        outcomes.push((feed.name().to_string(), resolution));
    }

    debug!("Checked {} feed(s) for {}", outcomes.len(), kseries);
    Ok(outcomes)
}

/// Write the usage shown when no kernel series is given
pub fn write_usage<W: Write>(program: &str, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Usage: {} [LINUX KERNEL SERIES]", program)?;
    writeln!(out, "Example: {} 3.10", program)
}

/// Keep only the feeds whose names are listed; all feeds when `names` is empty
pub fn filter_feeds(feeds: Vec<Feed>, names: &[String]) -> Vec<Feed> {
    if names.is_empty() {
        return feeds;
    }
    feeds
        .into_iter()
        .filter(|feed| names.iter().any(|name| name == feed.name()))
        .collect()
}
