use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::lookup::KEY_SEPARATOR;

/// A namespace of phrases addressed by path segment.
///
/// Every language in a [`TranslationStore`](crate::TranslationStore) is rooted
/// at one of these.
pub type Phrases = BTreeMap<String, PhraseNode>;

/// A node in a language's phrase tree.
///
/// A node is either a translatable phrase (`Leaf`) or a nested namespace
/// (`Branch`) that dotted lookup keys descend through.
///
/// Deserialization accepts a string or a map. Any other value (a number, a
/// boolean, `null`, a list) becomes an empty branch, which no key resolves to,
/// so one malformed entry never discards the rest of a tree.
///
/// # Example
///
/// ```
/// use phrasebook::{PhraseNode, phrases};
///
/// let node = PhraseNode::from(phrases! {
///     "title" => "Settings",
///     "audio" => phrases! { "volume" => "Volume" },
/// });
///
/// let audio = node.as_branch().unwrap()["audio"].as_branch().unwrap();
/// assert_eq!(audio["volume"].as_leaf(), Some("Volume"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PhraseNode {
    /// A terminal phrase.
    Leaf(String),

    /// A nested namespace.
    Branch(Phrases),
}

impl PhraseNode {
    /// Creates a leaf node.
    pub fn leaf(text: impl Into<String>) -> Self {
        PhraseNode::Leaf(text.into())
    }

    /// Creates a branch node from `(segment, node)` pairs.
    pub fn branch<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<PhraseNode>,
    {
        PhraseNode::Branch(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Get the phrase text, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            PhraseNode::Leaf(text) => Some(text),
            PhraseNode::Branch(_) => None,
        }
    }

    /// Get the nested phrases, if this is a branch.
    pub fn as_branch(&self) -> Option<&Phrases> {
        match self {
            PhraseNode::Leaf(_) => None,
            PhraseNode::Branch(phrases) => Some(phrases),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, PhraseNode::Leaf(_))
    }
}

impl<'de> Deserialize<'de> for PhraseNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NodeRepr {
            Leaf(String),
            Branch(Phrases),
            Other(IgnoredAny),
        }

        Ok(match NodeRepr::deserialize(deserializer)? {
            NodeRepr::Leaf(text) => PhraseNode::Leaf(text),
            NodeRepr::Branch(phrases) => PhraseNode::Branch(phrases),
            NodeRepr::Other(IgnoredAny) => PhraseNode::Branch(Phrases::new()),
        })
    }
}

impl From<&str> for PhraseNode {
    fn from(text: &str) -> Self {
        PhraseNode::Leaf(text.to_string())
    }
}

impl From<String> for PhraseNode {
    fn from(text: String) -> Self {
        PhraseNode::Leaf(text)
    }
}

impl From<Phrases> for PhraseNode {
    fn from(phrases: Phrases) -> Self {
        PhraseNode::Branch(phrases)
    }
}

/// Collects the dotted path of every leaf under `phrases` into `out`.
///
/// Segments containing the key separator are skipped along with everything
/// below them: no dotted key can address them.
pub(crate) fn collect_leaf_keys(phrases: &Phrases, prefix: &str, out: &mut Vec<String>) {
    for (segment, node) in phrases {
        if segment.contains(KEY_SEPARATOR) {
            continue;
        }
        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{prefix}.{segment}")
        };
        match node {
            PhraseNode::Leaf(_) => out.push(path),
            PhraseNode::Branch(nested) => collect_leaf_keys(nested, &path, out),
        }
    }
}
