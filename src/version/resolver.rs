//! Layered feed resolution
//!
//! A feed's levels are walked from the deepest down to level 0. Each level
//! fetches a page, extracts candidates with its pattern and selects the
//! latest one, which is registered as `eval-<prefix>pattern` so that the
//! templates of shallower levels can refer to it.

use std::fmt;

use fancy_regex::Regex;
use tracing::{debug, info};

use crate::feed::types::{Feed, KeyRole, Level, key_name};
use crate::version::error::ResolveError;
use crate::version::fetcher::ContentFetcher;
use crate::version::selector::select_best;
use crate::version::template::Placeholders;

/// Placeholder holding the kernel series being checked
pub const KSERIES: &str = "kseries";

/// Why a feed could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// A page in the lookup chain does not exist
    NotFound,
    /// A page exists but nothing in it matches the level's pattern
    NoMatch,
}

/// Outcome of resolving one feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    Unsupported(UnsupportedReason),
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Resolved(version) => f.write_str(version),
            Resolution::Unsupported(UnsupportedReason::NotFound) => {
                f.write_str("unsupported (404)")
            }
            Resolution::Unsupported(UnsupportedReason::NoMatch) => {
                f.write_str("unsupported (no matched item)")
            }
        }
    }
}

/// Name of the placeholder a level's selected version is registered under
///
/// Level 0 yields `eval-pattern`, which no template refers to.
pub fn eval_placeholder(level: usize) -> String {
    format!("eval-{}", key_name(level, KeyRole::Pattern))
}

/// Collect every non-overlapping match of `regex` in `content`
///
/// With capture groups, the first group's text is taken (an unmatched group
/// yields an empty string); otherwise the whole match. Lookaround is
/// supported, so `(?<=AUFS_VERSION=).*` yields only the value.
pub fn extract_matches(regex: &Regex, content: &str) -> Result<Vec<String>, fancy_regex::Error> {
    if regex.captures_len() > 1 {
        regex
            .captures_iter(content)
            .map(|caps| {
                caps.map(|caps| {
                    caps.get(1)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default()
                })
            })
            .collect()
    } else {
        regex
            .find_iter(content)
            .map(|m| m.map(|m| m.as_str().to_string()))
            .collect()
    }
}

/// Resolves feeds through a [`ContentFetcher`]
pub struct LayeredResolver<'a> {
    fetcher: &'a dyn ContentFetcher,
}

impl<'a> LayeredResolver<'a> {
    pub fn new(fetcher: &'a dyn ContentFetcher) -> Self {
        Self { fetcher }
    }

    /// Resolve `feed` for the kernel series `kseries`
    pub async fn resolve(&self, feed: &Feed, kseries: &str) -> Result<Resolution, ResolveError> {
        let mut table = Placeholders::new();
        table.register(KSERIES, kseries);
        self.resolve_with(feed, &mut table).await
    }

    /// Resolve `feed` with a caller-provided placeholder table
    ///
    /// Selected versions are registered into `table` as each level
    /// completes. The feed itself is never modified.
    pub async fn resolve_with(
        &self,
        feed: &Feed,
        table: &mut Placeholders,
    ) -> Result<Resolution, ResolveError> {
        let mut scratch: Vec<Level> = feed.levels().to_vec();
        let mut level = feed.max_level();

        debug!(
            "Resolving feed '{}' from level {}",
            feed.name(),
            feed.max_level()
        );

        loop {
            for remaining in scratch.iter_mut().take(level + 1) {
                remaining.url = table.apply(&remaining.url);
                remaining.pattern = table.apply(&remaining.pattern);
            }
            let Level { url, pattern } = &scratch[level];

            debug!("Feed '{}' level {}: fetching {}", feed.name(), level, url);
            let content = match self.fetcher.fetch(url).await? {
                // an empty page carries no more information than a missing one
                Some(content) if !content.is_empty() => content,
                _ => {
                    info!("Feed '{}' level {}: not found: {}", feed.name(), level, url);
                    return Ok(Resolution::Unsupported(UnsupportedReason::NotFound));
                }
            };

            let regex = Regex::new(pattern).map_err(|source| ResolveError::InvalidPattern {
                feed: feed.name().to_string(),
                level,
                pattern: pattern.clone(),
                source,
            })?;

            let matches: Vec<String> = extract_matches(&regex, &content)
                .map_err(|source| ResolveError::MatchFailed {
                    feed: feed.name().to_string(),
                    level,
                    source,
                })?
                .into_iter()
                .filter(|m| m.chars().any(|c| c.is_ascii_digit()))
                .collect();
            if matches.is_empty() {
                info!(
                    "Feed '{}' level {}: no match for {}",
                    feed.name(),
                    level,
                    pattern
                );
                return Ok(Resolution::Unsupported(UnsupportedReason::NoMatch));
            }

            let best = select_best(&matches)?;
            debug!(
                "Feed '{}' level {}: selected {} out of {} match(es)",
                feed.name(),
                level,
                best,
                matches.len()
            );
            table.register(eval_placeholder(level), best.clone());

            if level == 0 {
                info!("Feed '{}' resolved to {}", feed.name(), best);
                return Ok(Resolution::Resolved(best));
            }
            level -= 1;
            debug!(
                "Feed '{}': descending to level {} ({})",
                feed.name(),
                level,
                key_name(level, KeyRole::Url)
            );
        }
    }
}
