use serde::{Deserialize, Serialize};

/// A single `key: value` pair from the title page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleEntry {
    pub key: String,
    pub value: String,
}

/// Key/value block found at the top of a screenplay.
///
/// Entries keep the order in which each key first appeared. Inserting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitlePage {
    entries: Vec<TitleEntry>,
}

impl TitlePage {
    pub const AUTHOR_KEY: &'static str = "author";
    pub const AUTHORS_KEY: &'static str = "authors";

    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value under a normalized key; last write wins.
    ///
    /// `author` (any case) is stored as `authors`, every other key verbatim.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let key = Self::normalize_key(key);
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = value,
            None => self.entries.push(TitleEntry {
                key: key.to_string(),
                value,
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn normalize_key(key: &str) -> &str {
        if key.eq_ignore_ascii_case(Self::AUTHOR_KEY) {
            Self::AUTHORS_KEY
        } else {
            key
        }
    }
}
