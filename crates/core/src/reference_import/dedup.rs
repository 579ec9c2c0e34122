//! Case-insensitive set of natural keys already present or accepted.

use std::collections::HashSet;

/// Seeded once from the persisted table, then grown as rows are accepted.
/// Keys are never removed during an import call.
#[derive(Debug, Default, Clone)]
pub struct KeySet {
    keys: HashSet<String>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from the full list of persisted keys.
    pub fn seed<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keys: keys.into_iter().map(|k| normalize(k.as_ref())).collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(&normalize(key))
    }

    /// Register a key. Returns `false` if it was already present.
    pub fn insert(&mut self, key: &str) -> bool {
        self.keys.insert(normalize(key))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}
