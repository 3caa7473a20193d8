//! Configuration source port
//!
//! Keys are dotted paths (`vault.url`). The engine never interprets them;
//! they exist for the assemblies it drives.

use cfm_domain::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Opaque configuration lookup handed to every assembly
pub trait ConfigSource: Send + Sync {
    /// Look up the value at a dotted key
    fn value(&self, key: &str) -> Option<Value>;

    /// True if the key is present
    fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }
}

/// Typed accessors over any [`ConfigSource`]
pub trait ConfigSourceExt {
    /// String value; numbers and booleans are rendered as text
    fn get_string(&self, key: &str) -> Option<String>;

    /// Boolean value; accepts `true`/`false` strings as well
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Integer value; accepts numeric strings as well
    fn get_i64(&self, key: &str) -> Option<i64>;

    /// Deserialize the value at `key`, `Ok(None)` if absent
    fn extract<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;
}

impl<C: ConfigSource + ?Sized> ConfigSourceExt for C {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.value(key)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.value(key)? {
            Value::Bool(b) => Some(b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        match self.value(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    fn extract<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.value(key)
            .map(|value| {
                serde_json::from_value(value).map_err(|e| {
                    Error::config_with_source(format!("Invalid value for '{key}'"), e)
                })
            })
            .transpose()
    }
}

/// In-memory configuration backed by a JSON object
///
/// ```
/// use cfm_application::ports::{ConfigSourceExt, StaticConfigSource};
///
/// let config = StaticConfigSource::new()
///     .with("vault.url", "http://localhost:8200")
///     .with("vault.retries", 3);
///
/// assert_eq!(config.get_string("vault.url").as_deref(), Some("http://localhost:8200"));
/// assert_eq!(config.get_i64("vault.retries"), Some(3));
/// assert!(config.get_string("vault.token").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    root: Map<String, Value>,
}

impl StaticConfigSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from a JSON value; non-objects yield an empty source
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            _ => Self::default(),
        }
    }

    /// Set the value at a dotted key, creating intermediate objects
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set the value at a dotted key, replacing non-object intermediates
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut current = &mut self.root;
        for segment in segments {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            let Value::Object(next) = entry else {
                return;
            };
            current = next;
        }
        current.insert(last.to_string(), value.into());
    }
}

impl ConfigSource for StaticConfigSource {
    fn value(&self, key: &str) -> Option<Value> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current.clone())
    }
}
