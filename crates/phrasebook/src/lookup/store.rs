//! Per-language phrase storage.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{PhraseNode, Phrases, collect_leaf_keys};

/// Phrase trees indexed by language code.
///
/// Each language is rooted at a [`Phrases`] branch. Languages are created on
/// first merge and never removed.
///
/// When deserialized, a language whose root is not a map gets an empty tree,
/// so its keys all fall back to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TranslationStore {
    languages: HashMap<String, Phrases>,
}

impl TranslationStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the phrase tree for a language.
    pub fn get(&self, language: &str) -> Option<&Phrases> {
        self.languages.get(language)
    }

    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// All language codes with translations, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Merge top-level entries into a language, creating it if absent.
    ///
    /// An incoming entry replaces the existing entry with the same name
    /// outright, including nested branches. Entries not named are kept.
    /// Returns the number of entries merged.
    pub fn merge<K: Into<String>>(
        &mut self,
        language: &str,
        phrases: impl IntoIterator<Item = (K, PhraseNode)>,
    ) -> usize {
        let root = self.languages.entry(language.to_string()).or_default();
        let mut merged = 0;
        for (key, node) in phrases {
            root.insert(key.into(), node);
            merged += 1;
        }
        merged
    }

    /// Dotted paths of every phrase in a language, sorted.
    ///
    /// Returns an empty list for unknown languages.
    pub fn leaf_keys(&self, language: &str) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(phrases) = self.languages.get(language) {
            collect_leaf_keys(phrases, "", &mut keys);
        }
        keys.sort();
        keys
    }
}

impl<'de> Deserialize<'de> for TranslationStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let roots = HashMap::<String, PhraseNode>::deserialize(deserializer)?;
        Ok(roots
            .into_iter()
            .map(|(language, root)| match root {
                PhraseNode::Branch(phrases) => (language, phrases),
                PhraseNode::Leaf(_) => (language, Phrases::new()),
            })
            .collect())
    }
}

impl From<HashMap<String, Phrases>> for TranslationStore {
    fn from(languages: HashMap<String, Phrases>) -> Self {
        Self { languages }
    }
}

impl<L: Into<String>> FromIterator<(L, Phrases)> for TranslationStore {
    fn from_iter<I: IntoIterator<Item = (L, Phrases)>>(iter: I) -> Self {
        Self {
            languages: iter
                .into_iter()
                .map(|(language, phrases)| (language.into(), phrases))
                .collect(),
        }
    }
}

impl<L: Into<String>, const N: usize> From<[(L, Phrases); N]> for TranslationStore {
    fn from(languages: [(L, Phrases); N]) -> Self {
        languages.into_iter().collect()
    }
}
