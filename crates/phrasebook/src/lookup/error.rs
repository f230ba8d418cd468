//! Error and warning types for strict phrase lookup.

use thiserror::Error;

/// An error from a strict lookup.
///
/// The `translate*` family never produces these; it falls back to returning
/// the key. Use [`Translator::lookup`](crate::Translator::lookup) or
/// [`Translator::try_translate`](crate::Translator::try_translate) to observe
/// why a key did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No translations exist for the language.
    #[error("no translations for language '{language}'")]
    LanguageNotFound { language: String },

    /// The key does not resolve to a phrase in the language.
    #[error("phrase '{key}' not found in language '{language}'{}", format_suggestions(.suggestions))]
    KeyNotFound {
        key: String,
        language: String,
        suggestions: Vec<String>,
    },
}

/// A mismatch between two languages' phrase trees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationWarning {
    /// The source language defines a phrase the target lacks.
    #[error("phrase '{key}' is missing from language '{language}'")]
    MissingKey { key: String, language: String },

    /// The target language defines a phrase the source does not.
    #[error("phrase '{key}' in language '{language}' has no source phrase")]
    UnknownKey { key: String, language: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Find up to three keys in `available` within a small edit distance of `key`.
///
/// Keys of three characters or fewer allow a distance of 1, longer keys a
/// distance of 2. Results are ordered closest first, ties alphabetically.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .filter(|candidate| candidate.as_str() != key)
        .map(|candidate| (strsim::levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
