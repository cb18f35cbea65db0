//! Placeholder table for `${name}` templates

use std::collections::HashMap;

const OPEN: &str = "${";
const CLOSE: char = '}';

/// Mutable mapping from placeholder name to replacement text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: HashMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` under `name`, replacing any previous value
    pub fn register(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Substitute every registered `${name}` in `text`
    ///
    /// The text is scanned once, left to right. Inserted values are never
    /// scanned again, so a value that itself looks like a placeholder stays
    /// as is. Unknown placeholders are copied verbatim, and a known one is
    /// still replaced when it follows a stray `${`.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let value = after_open
                .find(CLOSE)
                .and_then(|end| self.values.get(&after_open[..end]).map(|v| (end, v)));

            match value {
                Some((end, value)) => {
                    out.push_str(value);
                    rest = &after_open[end + 1..];
                }
                None => {
                    // not a known placeholder: keep the `$` and rescan what follows
                    out.push('$');
                    rest = &rest[start + 1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}
