//! Tag values scanned from one document before allow-list filtering.

use std::collections::HashMap;

/// Leaf element text grouped by local tag name.
///
/// Values of a repeated tag keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTagValues {
    values: HashMap<String, Vec<String>>,
}

impl RawTagValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.values.entry(tag.into()).or_default().push(value.into());
    }

    /// All values of a tag; empty when the tag never appeared.
    pub fn get(&self, tag: &str) -> &[String] {
        self.values.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.values.contains_key(tag)
    }

    /// Number of distinct tags.
    pub fn tag_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Into<String>, V: Into<String>> FromIterator<(T, V)> for RawTagValues {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        let mut raw = RawTagValues::new();
        for (tag, value) in iter {
            raw.push(tag, value);
        }
        raw
    }
}
