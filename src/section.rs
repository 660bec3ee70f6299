use indexmap::IndexMap;

/// Key/value pairs of one section, in insertion order.
///
/// Only `Document` inserts into a section, after validating the pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pairs: IndexMap<String, String>,
}

impl Section {
    pub fn new() -> Self {
        Self {
            pairs: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Last write wins; an overwritten key keeps its position.
    pub(crate) fn insert(&mut self, key: &str, value: &str) {
        self.pairs.insert(key.to_string(), value.to_string());
    }
}
