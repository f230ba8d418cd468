//! The user-facing translator.
//!
//! A `Translator` owns the phrase trees for every language together with the
//! default language and the placeholder delimiters. Lookups never fail: a key
//! that cannot be resolved is returned as written, so a missing string shows
//! up as its key instead of breaking the caller.

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::lookup::{
    LookupError, TranslateArg, TranslationStore, TranslationWarning, compute_suggestions,
    interpolate, normalize_args, resolve,
};
use crate::types::{Context, ContextWrapper, PhraseNode};

/// Translates dotted keys into phrases with placeholders filled in.
///
/// # Example
///
/// ```
/// use phrasebook::{ContextWrapper, Translator, context, phrases};
///
/// let translator = Translator::builder()
///     .translations([
///         ("en", phrases! { "today_is" => "Today is {day}" }),
///         ("es", phrases! { "today_is" => "Hoy es {day}" }),
///     ])
///     .context_wrapper(ContextWrapper::pair("{", "}"))
///     .build();
///
/// let ctx = context! { "day" => "monday" };
/// assert_eq!(translator.translate_with_in("today_is", &ctx, "es"), "Hoy es monday");
/// assert_eq!(translator.translate("missing.key"), "missing.key");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Phrase trees by language.
    #[builder(default, into)]
    translations: TranslationStore,

    /// Language used when a call does not name one.
    #[builder(default = "en".to_string())]
    default_language: String,

    /// Delimiters around placeholder names.
    #[builder(default, into)]
    context_wrapper: ContextWrapper,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

/// Serializable translator settings.
///
/// Every field is optional and defaults the same way as [`Translator::builder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub default_language: String,
    pub context_wrapper: ContextWrapper,
    pub translations: TranslationStore,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            context_wrapper: ContextWrapper::default(),
            translations: TranslationStore::default(),
        }
    }
}

/// Named arguments for [`Translator::translate_with_options`].
#[derive(Debug, Clone, Default, Builder)]
pub struct TranslateOptions {
    /// Language to translate into instead of the default.
    #[builder(into)]
    pub language: Option<String>,

    /// Placeholder values.
    #[builder(default)]
    pub context: Context,
}

impl Translator {
    /// Create a translator with the default language `"en"` and wrapper `"%"`.
    pub fn new(translations: impl Into<TranslationStore>) -> Self {
        Translator::builder().translations(translations).build()
    }

    /// Create a translator from deserialized settings.
    pub fn from_config(config: TranslatorConfig) -> Self {
        Translator::builder()
            .translations(config.translations)
            .default_language(config.default_language)
            .context_wrapper(config.context_wrapper)
            .build()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the default language code.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Change the default language.
    ///
    /// The language does not need to have translations; lookups in it simply
    /// return their keys.
    pub fn set_default_language(&mut self, language: impl Into<String>) {
        let language = language.into();
        debug!(from = %self.default_language, to = %language, "default language changed");
        self.default_language = language;
    }

    pub fn context_wrapper(&self) -> &ContextWrapper {
        &self.context_wrapper
    }

    /// Get the phrase trees (read-only).
    pub fn translations(&self) -> &TranslationStore {
        &self.translations
    }

    /// Merge phrases into a language.
    ///
    /// Each top-level entry replaces the entry of the same name, nested
    /// branches included; entries not mentioned are kept. The language is
    /// created if it has no translations yet.
    ///
    /// # Example
    ///
    /// ```
    /// use phrasebook::{Translator, phrases};
    ///
    /// let mut translator = Translator::default();
    /// translator.add_translations("en", phrases! { "a" => "1", "b" => "2" });
    /// translator.add_translations("en", phrases! { "b" => "3", "c" => "4" });
    ///
    /// assert_eq!(translator.translate("a"), "1");
    /// assert_eq!(translator.translate("b"), "3");
    /// assert_eq!(translator.translate("c"), "4");
    /// ```
    pub fn add_translations<K: Into<String>>(
        &mut self,
        language: &str,
        translations: impl IntoIterator<Item = (K, PhraseNode)>,
    ) {
        let keys = self.translations.merge(language, translations);
        trace!(language, keys, "merged translations");
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate a key in the default language with no context.
    pub fn translate(&self, text: &str) -> String {
        self.render(text, &Context::new(), &self.default_language)
    }

    /// Translate a key in `language` with no context.
    pub fn translate_in(&self, text: &str, language: &str) -> String {
        self.render(text, &Context::new(), language)
    }

    /// Translate a key in the default language, filling placeholders from
    /// `context`.
    pub fn translate_with(&self, text: &str, context: &Context) -> String {
        self.render(text, context, &self.default_language)
    }

    /// Translate a key in `language`, filling placeholders from `context`.
    pub fn translate_with_in(&self, text: &str, context: &Context, language: &str) -> String {
        self.render(text, context, language)
    }

    /// Translate with positional arguments whose roles follow their kinds.
    ///
    /// Either argument may be a language or a context; see
    /// [`normalize_args`](crate::normalize_args) for how they combine.
    ///
    /// # Example
    ///
    /// ```
    /// use phrasebook::{Translator, context, phrases};
    ///
    /// let translator = Translator::new([("es", phrases! { "hi" => "Hola %name%" })]);
    /// let ctx = context! { "name" => "Ana" };
    ///
    /// assert_eq!(translator.translate_args("hi", Some("es".into()), Some(ctx.into())), "Hola Ana");
    /// ```
    pub fn translate_args(
        &self,
        text: &str,
        second: Option<TranslateArg>,
        third: Option<TranslateArg>,
    ) -> String {
        let args = normalize_args(&self.default_language, second, third);
        self.render(text, &args.context, &args.language)
    }

    /// Translate with named options.
    pub fn translate_with_options(&self, text: &str, options: &TranslateOptions) -> String {
        let language = options
            .language
            .as_deref()
            .unwrap_or(&self.default_language);
        self.render(text, &options.context, language)
    }

    fn render(&self, text: &str, context: &Context, language: &str) -> String {
        let message = resolve(self.translations.get(language), text).unwrap_or_else(|| {
            debug!(key = text, language, "translation not found, using key");
            text
        });
        interpolate(message, context, &self.context_wrapper)
    }

    // =========================================================================
    // Strict lookup
    // =========================================================================

    /// Look up the raw phrase for a key without substituting placeholders.
    ///
    /// Uses the default language when `language` is `None`.
    pub fn lookup(&self, key: &str, language: Option<&str>) -> Result<&str, LookupError> {
        let language = language.unwrap_or(&self.default_language);
        let phrases =
            self.translations
                .get(language)
                .ok_or_else(|| LookupError::LanguageNotFound {
                    language: language.to_string(),
                })?;
        resolve(Some(phrases), key).ok_or_else(|| LookupError::KeyNotFound {
            key: key.to_string(),
            language: language.to_string(),
            suggestions: compute_suggestions(key, &self.translations.leaf_keys(language)),
        })
    }

    /// Translate a key, reporting why it failed instead of returning the key.
    pub fn try_translate(
        &self,
        text: &str,
        context: &Context,
        language: Option<&str>,
    ) -> Result<String, LookupError> {
        let message = self.lookup(text, language)?;
        Ok(interpolate(message, context, &self.context_wrapper))
    }

    /// Whether `key` resolves to a phrase.
    pub fn has_translation(&self, key: &str, language: Option<&str>) -> bool {
        let language = language.unwrap_or(&self.default_language);
        resolve(self.translations.get(language), key).is_some()
    }

    /// Compare the phrases of a target language against a source language.
    ///
    /// Reports source phrases missing from the target and target phrases with
    /// no source counterpart, ordered by key. Returns an empty vector if
    /// either language has no translations.
    ///
    /// # Example
    ///
    /// ```
    /// use phrasebook::{Translator, TranslationWarning, phrases};
    ///
    /// let mut translator = Translator::default();
    /// translator.add_translations("en", phrases! { "hello" => "Hello!", "bye" => "Bye!" });
    /// translator.add_translations("ru", phrases! { "hello" => "Привет!", "extra" => "Лишнее" });
    ///
    /// let warnings = translator.validate_translations("en", "ru");
    /// assert_eq!(warnings.len(), 2);
    /// assert!(matches!(warnings[0], TranslationWarning::MissingKey { .. }));
    /// ```
    pub fn validate_translations(
        &self,
        source_language: &str,
        target_language: &str,
    ) -> Vec<TranslationWarning> {
        if !self.translations.contains_language(source_language)
            || !self.translations.contains_language(target_language)
        {
            return Vec::new();
        }

        let source_keys = self.translations.leaf_keys(source_language);
        let target_keys = self.translations.leaf_keys(target_language);

        let missing = source_keys
            .iter()
            .filter(|key| target_keys.binary_search(key).is_err())
            .map(|key| TranslationWarning::MissingKey {
                key: key.clone(),
                language: target_language.to_string(),
            });
        let unknown = target_keys
            .iter()
            .filter(|key| source_keys.binary_search(key).is_err())
            .map(|key| TranslationWarning::UnknownKey {
                key: key.clone(),
                language: target_language.to_string(),
            });

        let mut warnings: Vec<TranslationWarning> = missing.chain(unknown).collect();
        warnings.sort_by(|a, b| warning_key(a).cmp(warning_key(b)));
        warnings
    }
}

fn warning_key(warning: &TranslationWarning) -> &str {
    match warning {
        TranslationWarning::MissingKey { key, .. } | TranslationWarning::UnknownKey { key, .. } => {
            key
        }
    }
}
