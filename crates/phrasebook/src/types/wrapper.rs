use serde::{Deserialize, Serialize};

/// Delimiters that mark a placeholder name inside a phrase.
///
/// # Example
///
/// ```
/// use phrasebook::ContextWrapper;
///
/// assert_eq!(ContextWrapper::default().token("name"), "%name%");
/// assert_eq!(ContextWrapper::pair("{", "}").token("name"), "{name}");
///
/// // Missing parts are treated as empty delimiters.
/// assert_eq!(ContextWrapper::from_parts(&["<"]).token("name"), "<name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WrapperRepr", into = "WrapperRepr")]
pub enum ContextWrapper {
    /// The same delimiter before and after the name.
    Symmetric(String),

    /// Distinct opening and closing delimiters.
    Asymmetric { open: String, close: String },
}

impl ContextWrapper {
    pub fn symmetric(delimiter: impl Into<String>) -> Self {
        ContextWrapper::Symmetric(delimiter.into())
    }

    pub fn pair(open: impl Into<String>, close: impl Into<String>) -> Self {
        ContextWrapper::Asymmetric {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Builds an asymmetric wrapper from up to two parts.
    ///
    /// The first part opens and the second closes; a missing part is an empty
    /// string and any further parts are ignored.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Self {
        let part = |i: usize| parts.get(i).map(|p| p.as_ref().to_string()).unwrap_or_default();
        ContextWrapper::Asymmetric {
            open: part(0),
            close: part(1),
        }
    }

    /// The opening delimiter.
    pub fn open(&self) -> &str {
        match self {
            ContextWrapper::Symmetric(delimiter) => delimiter,
            ContextWrapper::Asymmetric { open, .. } => open,
        }
    }

    /// The closing delimiter.
    pub fn close(&self) -> &str {
        match self {
            ContextWrapper::Symmetric(delimiter) => delimiter,
            ContextWrapper::Asymmetric { close, .. } => close,
        }
    }

    /// Builds the placeholder token for a context key.
    pub fn token(&self, key: &str) -> String {
        format!("{}{key}{}", self.open(), self.close())
    }
}

impl Default for ContextWrapper {
    fn default() -> Self {
        ContextWrapper::Symmetric("%".to_string())
    }
}

impl From<&str> for ContextWrapper {
    fn from(delimiter: &str) -> Self {
        ContextWrapper::symmetric(delimiter)
    }
}

impl From<String> for ContextWrapper {
    fn from(delimiter: String) -> Self {
        ContextWrapper::Symmetric(delimiter)
    }
}

impl From<(&str, &str)> for ContextWrapper {
    fn from((open, close): (&str, &str)) -> Self {
        ContextWrapper::pair(open, close)
    }
}

impl From<[&str; 2]> for ContextWrapper {
    fn from([open, close]: [&str; 2]) -> Self {
        ContextWrapper::pair(open, close)
    }
}

impl From<Vec<String>> for ContextWrapper {
    fn from(parts: Vec<String>) -> Self {
        ContextWrapper::from_parts(&parts)
    }
}

/// Serialized form: a single delimiter string or a list of parts.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WrapperRepr {
    Symmetric(String),
    Parts(Vec<String>),
}

impl From<WrapperRepr> for ContextWrapper {
    fn from(repr: WrapperRepr) -> Self {
        match repr {
            WrapperRepr::Symmetric(delimiter) => ContextWrapper::Symmetric(delimiter),
            WrapperRepr::Parts(parts) => ContextWrapper::from_parts(&parts),
        }
    }
}

impl From<ContextWrapper> for WrapperRepr {
    fn from(wrapper: ContextWrapper) -> Self {
        match wrapper {
            ContextWrapper::Symmetric(delimiter) => WrapperRepr::Symmetric(delimiter),
            ContextWrapper::Asymmetric { open, close } => WrapperRepr::Parts(vec![open, close]),
        }
    }
}
