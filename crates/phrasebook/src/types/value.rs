use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use serde_json::Value as JsonValue;

/// Context values keyed by placeholder name.
pub type Context = HashMap<String, Value>;

/// A host object that knows how to render itself into a phrase.
///
/// Implement this for domain types that should be substitutable into
/// placeholders. Types that already implement [`Display`] can be wrapped with
/// [`Value::display`] instead.
///
/// # Example
///
/// ```
/// use phrasebook::{Stringable, Value};
///
/// #[derive(Debug)]
/// struct Money { cents: i64 }
///
/// impl Stringable for Money {
///     fn to_phrase_string(&self) -> String {
///         format!("${}.{:02}", self.cents / 100, self.cents % 100)
///     }
/// }
///
/// let value = Value::object(Money { cents: 1250 });
/// assert_eq!(value.render().as_deref(), Some("$12.50"));
/// ```
pub trait Stringable: Debug + Send + Sync {
    fn to_phrase_string(&self) -> String;
}

/// Adapts a [`Display`] type to [`Stringable`].
#[derive(Debug)]
struct Displayed<T>(T);

impl<T> Stringable for Displayed<T>
where
    T: Display + Debug + Send + Sync,
{
    fn to_phrase_string(&self) -> String {
        self.0.to_string()
    }
}

/// A runtime value that can be passed in a translation context.
///
/// Scalars and [`Stringable`] objects are rendered into their placeholders.
/// Collections, `Null` and opaque objects are carried but never rendered, so
/// their placeholders stay in the output as written.
///
/// # Example
///
/// ```
/// use phrasebook::Value;
///
/// let day: Value = "monday".into();
/// let count: Value = 3.into();
/// let tags: Value = vec![Value::from("a"), Value::from("b")].into();
///
/// assert_eq!(day.render().as_deref(), Some("monday"));
/// assert_eq!(count.render().as_deref(), Some("3"));
/// assert!(tags.render().is_none());
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence of a value.
    Null,

    Bool(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A list of values.
    List(Vec<Value>),

    /// A nested mapping of values.
    Map(BTreeMap<String, Value>),

    /// A host object with a string conversion.
    Object(Arc<dyn Stringable>),

    /// A host object with no string conversion.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wraps a host object implementing [`Stringable`].
    pub fn object(object: impl Stringable + 'static) -> Self {
        Value::Object(Arc::new(object))
    }

    /// Wraps any [`Display`] type as a renderable object.
    pub fn display<T>(object: T) -> Self
    where
        T: Display + Debug + Send + Sync + 'static,
    {
        Value::Object(Arc::new(Displayed(object)))
    }

    /// Wraps a host object that cannot be rendered.
    pub fn opaque(object: impl Any + Send + Sync) -> Self {
        Value::Opaque(Arc::new(object))
    }

    /// Whether this value can be substituted into a placeholder.
    pub fn is_renderable(&self) -> bool {
        match self {
            Value::Bool(_)
            | Value::Number(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Object(_) => true,
            Value::Null | Value::List(_) | Value::Map(_) | Value::Opaque(_) => false,
        }
    }

    /// Render this value for substitution, or `None` if it is not renderable.
    pub fn render(&self) -> Option<String> {
        match self {
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Object(object) => Some(object.to_phrase_string()),
            Value::Null | Value::List(_) | Value::Map(_) | Value::Opaque(_) => None,
        }
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    /// Renderable values display as they would be substituted; everything
    /// else displays as an empty string.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.render() {
            Some(text) => write!(f, "{text}"),
            None => Ok(()),
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Number(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
