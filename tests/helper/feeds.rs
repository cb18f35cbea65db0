//! Feed construction helpers

use indexmap::IndexMap;

use kpatch_watch::feed::Feed;

/// Build a feed from `(key, template)` pairs
pub fn feed(name: &str, entries: &[(&str, &str)]) -> Feed {
    let keys: IndexMap<String, String> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Feed::from_keys(name, &keys).unwrap()
}
