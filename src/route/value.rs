//! Route values and the ordered maps that hold them.

use std::fmt;

use serde_json::Value;

/// A default value for a route parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteValue {
    /// A concrete value.
    Value(Value),
    /// The parameter may be absent from the matched URL.
    Optional,
}

impl RouteValue {
    /// Whether this is the optional-parameter marker.
    pub fn is_optional(&self) -> bool {
        matches!(self, RouteValue::Optional)
    }

    /// The concrete value, if this is not the optional marker.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            RouteValue::Value(value) => Some(value),
            RouteValue::Optional => None,
        }
    }

    /// The value as a string slice, if it holds a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }
}

impl fmt::Display for RouteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteValue::Value(Value::String(s)) => write!(f, "{s}"),
            RouteValue::Value(value) => write!(f, "{value}"),
            RouteValue::Optional => write!(f, "<optional>"),
        }
    }
}

macro_rules! impl_from_for_route_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for RouteValue {
                fn from(value: $t) -> Self {
                    RouteValue::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_for_route_value!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, &str,
);

impl From<Value> for RouteValue {
    fn from(value: Value) -> Self {
        RouteValue::Value(value)
    }
}

/// An insertion-ordered map from parameter name to `V`.
///
/// Keys are case-sensitive. Inserting an existing key replaces its value in
/// place, so iteration order reflects first insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteValueMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for RouteValueMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> RouteValueMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value under `key`.
    ///
    /// # Returns
    ///
    /// The previous value, if the key was present
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Get the value under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find_map(|(k, v)| if k == key { Some(v) } else { None })
    }

    /// Check if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove and return the value under `key`.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for RouteValueMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Default values keyed by parameter name.
pub type RouteDefaults = RouteValueMap<RouteValue>;
