//! Enumerating named properties of a value object.

use std::sync::Arc;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::route::constraint::RouteConstraint;
use crate::route::error::Error;

/// The runtime value of one property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A string value.
    Str(String),
    /// A constraint object.
    Constraint(Arc<dyn RouteConstraint>),
    /// Any other kind of value.
    Other,
}

/// A value object whose named properties can be enumerated.
///
/// # Examples
///
/// ```
/// use fluentroute_rs::{PropertyBag, PropertyValue};
///
/// struct ProductConstraints {
///     id: &'static str,
///     page_size: u32,
/// }
///
/// impl PropertyBag for ProductConstraints {
///     fn properties(&self) -> Vec<(String, PropertyValue)> {
///         vec![
///             ("id".to_string(), PropertyValue::Str(self.id.to_string())),
///             ("page_size".to_string(), PropertyValue::Other),
///         ]
///     }
/// }
///
/// let bag = ProductConstraints { id: r"\d+", page_size: 20 };
/// assert_eq!(bag.properties().len(), 2);
/// ```
pub trait PropertyBag {
    /// The object's properties as `(name, value)` pairs.
    fn properties(&self) -> Vec<(String, PropertyValue)>;
}

/// Properties of any serde-serializable struct.
///
/// String fields become [`PropertyValue::Str`]; every other field kind is
/// reported as [`PropertyValue::Other`].
#[derive(Debug, Clone)]
pub struct SerializedProperties {
    fields: serde_json::Map<String, Value>,
}

impl SerializedProperties {
    /// Serialize `value` and capture its top-level fields.
    ///
    /// Values that do not serialize to an object have no properties.
    pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        let fields = match serde_json::to_value(value)? {
            Value::Object(fields) => fields,
            other => {
                debug!("Serialized value is not an object, no properties: {other}");
                serde_json::Map::new()
            }
        };
        Ok(Self { fields })
    }
}

impl PropertyBag for SerializedProperties {
    fn properties(&self) -> Vec<(String, PropertyValue)> {
        self.fields
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::String(s) => PropertyValue::Str(s.clone()),
                    _ => PropertyValue::Other,
                };
                (name.clone(), value)
            })
            .collect()
    }
}
