//! Loosely structured version strings
//!
//! Feed sources publish versions with arbitrary decoration in front of the
//! number (`patch-3.1.2`, `patch-experimental-4.0.1`, `genpatches-3.10-7`).
//! Everything before the first digit is ignored for ordering but kept for
//! display, so the user sees the string exactly as the feed published it.

use std::cmp::Ordering;
use std::fmt;

/// One run of a comparable suffix.
///
/// Variant order matters: a letter run sorts below a digit run at the same
/// position (`1.0rc1 < 1.0.1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Component {
    Alpha(String),
    Numeric(Numeric),
}

/// Arbitrary length decimal number, stored without leading zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Numeric(String);

impl Numeric {
    fn new(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Self(trimmed.to_string())
    }
}

impl Ord for Numeric {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A version string with a loose, numeric-segment-aware ordering
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    /// `None` when `raw` contains no digit at all
    components: Option<Vec<Component>>,
}

impl Version {
    /// Wrap a raw matched string. Never fails; see [`Version::is_comparable`].
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let components = comparable_suffix(&raw).map(split_components);
        Self { raw, components }
    }

    /// The original text, unchanged
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the raw string contains a digit to order by.
    ///
    /// Versions without one all compare equal to each other and below every
    /// comparable version.
    pub fn is_comparable(&self) -> bool {
        self.components.is_some()
    }
}

/// The part of `raw` used for ordering, from the first digit on
fn comparable_suffix(raw: &str) -> Option<&str> {
    raw.find(|c: char| c.is_ascii_digit())
        .map(|start| &raw[start..])
}

/// Split into alternating digit and letter runs, dropping every other character.
fn split_components(suffix: &str) -> Vec<Component> {
    let mut components = Vec::new();
    let mut chars = suffix.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_ascii_digit() {
            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }
            components.push(Component::Numeric(Numeric::new(&suffix[start..end])));
        } else if c.is_alphabetic() {
            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !next.is_alphabetic() {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }
            components.push(Component::Alpha(suffix[start..end].to_string()));
        }
    }

    components
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Option orders None below Some, and Vec compares lexicographically
        // with a strict prefix ordering first.
        self.components.cmp(&other.components)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
