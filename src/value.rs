//! Attribute values and allowed-value sets.
//!
//! Matchers compare identity attributes and request environment entries
//! against an [`AllowedValues`] set. A set can be built from a single scalar
//! or from a sequence; both forms normalize to the same ordered list.

use std::fmt;

/// A comparable attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Text
    Str(String),
    /// Collection of values (e.g. group or role names)
    List(Vec<Value>),
}

impl Value {
    /// Returns the text if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if `needle` is an element of this value.
    ///
    /// A `List` is searched element-wise. Any other value acts as a
    /// one-element collection, so the test is plain equality.
    pub fn contains(&self, needle: &Value) -> bool {
        match self {
            Value::List(items) => items.iter().any(|item| item == needle),
            scalar => scalar == needle,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// The set of values a matcher accepts.
///
/// Scalars are wrapped into a one-element set; sequences are taken as-is.
///
/// # Examples
///
/// ```
/// use auth_predicates::AllowedValues;
///
/// assert_eq!(AllowedValues::from("a"), AllowedValues::from(vec!["a"]));
/// assert_eq!(AllowedValues::from(["a", "b"]).len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedValues(Vec<Value>);

impl AllowedValues {
    /// Creates an empty set that matches nothing.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Returns true if `candidate` is one of the allowed values.
    pub fn matches(&self, candidate: &Value) -> bool {
        self.0.iter().any(|v| v == candidate)
    }

    /// Returns true if the environment text is one of the allowed values.
    pub fn matches_str(&self, candidate: &str) -> bool {
        self.0.iter().any(|v| v.as_str() == Some(candidate))
    }

    /// Number of allowed values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no value is allowed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the allowed values in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }
}

impl From<Value> for AllowedValues {
    fn from(value: Value) -> Self {
        match value {
            Value::List(items) => Self(items),
            scalar => Self(vec![scalar]),
        }
    }
}

impl From<&str> for AllowedValues {
    fn from(s: &str) -> Self {
        Self(vec![Value::from(s)])
    }
}

impl From<String> for AllowedValues {
    fn from(s: String) -> Self {
        Self(vec![Value::Str(s)])
    }
}

impl From<i64> for AllowedValues {
    fn from(i: i64) -> Self {
        Self(vec![Value::Int(i)])
    }
}

impl From<bool> for AllowedValues {
    fn from(b: bool) -> Self {
        Self(vec![Value::Bool(b)])
    }
}

impl<T: Into<Value>> From<Vec<T>> for AllowedValues {
    fn from(items: Vec<T>) -> Self {
        Self(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for AllowedValues {
    fn from(items: [T; N]) -> Self {
        Self(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for AllowedValues {
    fn from(items: &[T]) -> Self {
        Self(items.iter().cloned().map(Into::into).collect())
    }
}

impl<V: Into<Value>> FromIterator<V> for AllowedValues {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
