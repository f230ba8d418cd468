//! Normalization of positional translate arguments.

use crate::types::Context;

/// A positional argument whose role is given by its kind.
///
/// Strings convert to [`TranslateArg::Language`] and context maps to
/// [`TranslateArg::Context`], so call sites read the same as the flexible
/// `translate(key, context_or_language, language_or_context)` form.
#[derive(Debug, Clone)]
pub enum TranslateArg {
    /// A language code.
    Language(String),

    /// Placeholder values.
    Context(Context),
}

/// The canonical arguments for one translation.
#[derive(Debug, Clone)]
pub struct NormalizedArgs {
    /// Values to substitute; empty when no context argument was given.
    pub context: Context,
    /// Language to resolve in; the default language unless one was given.
    pub language: String,
}

/// Resolve up to two positional arguments against the default language.
///
/// Starts from `default_language` and an empty context, then applies `second`
/// and `third` in order: a language argument sets the language and a context
/// argument sets the context, so a later argument overrides an earlier one of
/// the same kind.
///
/// # Example
///
/// ```
/// use phrasebook::{context, normalize_args};
///
/// let args = normalize_args("en", Some(context! { "x" => "1" }.into()), Some("es".into()));
/// assert_eq!(args.language, "es");
/// assert_eq!(args.context.len(), 1);
/// ```
pub fn normalize_args(
    default_language: &str,
    second: Option<TranslateArg>,
    third: Option<TranslateArg>,
) -> NormalizedArgs {
    let mut normalized = NormalizedArgs {
        context: Context::new(),
        language: default_language.to_string(),
    };
    for arg in [second, third].into_iter().flatten() {
        match arg {
            TranslateArg::Language(language) => normalized.language = language,
            TranslateArg::Context(context) => normalized.context = context,
        }
    }
    normalized
}

impl From<&str> for TranslateArg {
    fn from(language: &str) -> Self {
        TranslateArg::Language(language.to_string())
    }
}

impl From<String> for TranslateArg {
    fn from(language: String) -> Self {
        TranslateArg::Language(language)
    }
}

impl From<&String> for TranslateArg {
    fn from(language: &String) -> Self {
        TranslateArg::Language(language.clone())
    }
}

impl From<Context> for TranslateArg {
    fn from(context: Context) -> Self {
        TranslateArg::Context(context)
    }
}

impl From<&Context> for TranslateArg {
    fn from(context: &Context) -> Self {
        TranslateArg::Context(context.clone())
    }
}
