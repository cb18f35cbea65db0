//! Feed descriptions and their lookup levels

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::feed::error::CatalogError;

const META_PREFIX: &str = "meta-";
const URL_KEY: &str = "url";
const PATTERN_KEY: &str = "pattern";

/// Role of a feed key within its level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Url,
    Pattern,
}

impl KeyRole {
    fn base(&self) -> &'static str {
        match self {
            KeyRole::Url => URL_KEY,
            KeyRole::Pattern => PATTERN_KEY,
        }
    }
}

/// Parse a key name of the form `("meta-")*N ("url" | "pattern")`
///
/// Returns the level `N` and the role, or `None` for any other name.
pub fn parse_key(key: &str) -> Option<(usize, KeyRole)> {
    let mut rest = key;
    let mut level = 0;
    while let Some(stripped) = rest.strip_prefix(META_PREFIX) {
        rest = stripped;
        level += 1;
    }

    match rest {
        URL_KEY => Some((level, KeyRole::Url)),
        PATTERN_KEY => Some((level, KeyRole::Pattern)),
        _ => None,
    }
}

/// Build the key name for `level` and `role` (`meta-meta-url` for level 2)
pub fn key_name(level: usize, role: KeyRole) -> String {
    format!("{}{}", level_prefix(level), role.base())
}

/// `"meta-"` repeated `level` times
pub fn level_prefix(level: usize) -> String {
    META_PREFIX.repeat(level)
}

/// One step of indirection: the page to fetch and what to extract from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub url: String,
    pub pattern: String,
}

/// A validated feed description
///
/// `levels[0]` is the final content page; higher indices are pages consulted
/// only to discover parameters for shallower levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    name: String,
    levels: Vec<Level>,
}

impl Feed {
    /// Validate raw keys into an explicit list of levels
    pub fn from_keys(
        name: impl Into<String>,
        keys: &IndexMap<String, String>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();

        let mut parsed = Vec::with_capacity(keys.len());
        for (key, value) in keys {
            let (level, role) = parse_key(key).ok_or_else(|| CatalogError::UnknownKey {
                feed: name.clone(),
                key: key.clone(),
            })?;
            parsed.push((level, role, value));
        }

        let max_level = parsed.iter().map(|(level, _, _)| *level).max().unwrap_or(0);

        let mut urls: Vec<Option<String>> = vec![None; max_level + 1];
        let mut patterns: Vec<Option<String>> = vec![None; max_level + 1];
        for (level, role, value) in parsed {
            let slot = match role {
                KeyRole::Url => &mut urls[level],
                KeyRole::Pattern => &mut patterns[level],
            };
            *slot = Some(value.clone());
        }

        let missing = |level: usize, role: KeyRole| CatalogError::MissingKey {
            feed: name.clone(),
            key: key_name(level, role),
        };

        let levels = urls
            .into_iter()
            .zip(patterns)
            .enumerate()
            .map(|(level, (url, pattern))| {
                Ok(Level {
                    url: url.ok_or_else(|| missing(level, KeyRole::Url))?,
                    pattern: pattern.ok_or_else(|| missing(level, KeyRole::Pattern))?,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self { name, levels })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Levels indexed by depth, level 0 first
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The deepest declared level; 0 when only `url`/`pattern` exist
    pub fn max_level(&self) -> usize {
        self.levels.len() - 1
    }
}

/// Feed description as written in a catalog: `name` plus flat template keys
#[derive(Debug, Deserialize)]
struct RawFeed {
    name: String,
    #[serde(flatten)]
    keys: IndexMap<String, String>,
}

impl<'de> Deserialize<'de> for Feed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawFeed::deserialize(deserializer)?;
        Feed::from_keys(raw.name, &raw.keys).map_err(serde::de::Error::custom)
    }
}
