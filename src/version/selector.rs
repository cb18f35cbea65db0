//! Picks the latest version out of the candidates a pattern extracted

use std::collections::BTreeSet;

use tracing::warn;

use crate::version::error::SelectError;
use crate::version::loose::Version;

/// Return the raw text of the maximum version among `raw_versions`
///
/// Duplicates and input order have no effect on the result. Candidates
/// without any digit cannot be ordered and are discarded. When two distinct
/// strings share the same comparable suffix, the lexically greatest raw
/// string wins.
pub fn select_best<S: AsRef<str>>(raw_versions: &[S]) -> Result<String, SelectError> {
    // BTreeSet both deduplicates and fixes the iteration order
    let unique: BTreeSet<&str> = raw_versions.iter().map(AsRef::as_ref).collect();

    if unique.is_empty() {
        return Err(SelectError::EmptyInput);
    }

    let (comparable, malformed): (Vec<Version>, Vec<Version>) = unique
        .into_iter()
        .map(Version::new)
        .partition(Version::is_comparable);

    if !malformed.is_empty() {
        warn!(
            "Discarding {} candidate(s) without a version number: {:?}",
            malformed.len(),
            malformed.iter().map(Version::as_str).collect::<Vec<_>>()
        );
    }

    comparable
        .into_iter()
        .max_by(|a, b| a.cmp(b).then_with(|| a.as_str().cmp(b.as_str())))
        .map(|best| best.to_string())
        .ok_or_else(|| {
            SelectError::Malformed(malformed.iter().map(ToString::to_string).collect())
        })
}
