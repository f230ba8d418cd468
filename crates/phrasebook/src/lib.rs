pub mod lookup;
pub mod translator;
pub mod types;

pub use lookup::{
    LookupError, NormalizedArgs, TranslateArg, TranslationStore, TranslationWarning,
    compute_suggestions, interpolate, normalize_args, resolve,
};
pub use translator::{TranslateOptions, Translator, TranslatorConfig};
pub use types::{Context, ContextWrapper, PhraseNode, Phrases, Stringable, Value};

/// Creates a [`Context`] from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans or strings directly.
///
/// # Example
///
/// ```
/// use phrasebook::context;
///
/// let ctx = context! { "count" => 3, "name" => "Alice" };
/// assert_eq!(ctx.len(), 2);
/// assert_eq!(ctx["count"].as_number(), Some(3));
/// assert_eq!(ctx["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! context {
    {} => {
        $crate::Context::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Context::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

/// Creates a [`Phrases`] branch from key-node pairs.
///
/// Values are converted via `Into<PhraseNode>`: strings become leaves and
/// nested `phrases!` become branches.
///
/// # Example
///
/// ```
/// use phrasebook::{phrases, PhraseNode};
///
/// let tree = phrases! {
///     "title" => "Inbox",
///     "actions" => phrases! { "archive" => "Archive" },
/// };
/// assert_eq!(tree["title"], PhraseNode::leaf("Inbox"));
/// assert!(!tree["actions"].is_leaf());
/// ```
#[macro_export]
macro_rules! phrases {
    {} => {
        $crate::Phrases::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Phrases::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::PhraseNode>::into($value));
            )+
            map
        }
    };
}
