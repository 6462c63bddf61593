#[cfg(test)]
#[path = "dictionary_test.rs"]
mod dictionary_test;

use serde_json::Value;

/// Separator between path segments in a lookup key.
pub const KEY_SEPARATOR: char = '.';

/// Error returned when a dictionary cannot be obtained.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("dictionary request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("dictionary request returned status {status}")]
    Status { status: u16 },
    /// The payload is not valid JSON.
    #[error("malformed dictionary payload: {0}")]
    Parse(#[from] serde_json::Error),
    /// The payload is JSON but its root is not an object.
    #[error("dictionary root must be an object, found {0}")]
    NotAnObject(&'static str),
}

/// Nested string mapping for one language.
///
/// Immutable once built. A language change replaces the whole value.
#[derive(Clone, Debug, PartialEq)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    /// Parse a dictionary from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] for invalid JSON and
    /// [`LoadError::NotAnObject`] when the root is not a JSON object.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let root: Value = serde_json::from_str(text)?;
        Self::from_value(root)
    }

    /// Wrap an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotAnObject`] when `root` is not an object.
    pub fn from_value(root: Value) -> Result<Self, LoadError> {
        if root.is_object() { Ok(Self { root }) } else { Err(LoadError::NotAnObject(kind(&root))) }
    }

    /// Resolve a dot-separated path.
    ///
    /// Returns `None` when any segment is missing or the path lands on an
    /// object, array or `null`. An empty string is a value and is returned
    /// as such. Numeric and boolean leaves come back as their JSON text.
    pub fn lookup(&self, path: &str) -> Option<String> {
        let mut current = &self.root;
        for segment in path.split(KEY_SEPARATOR) {
            current = current.as_object()?.get(segment)?;
        }
        match current {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
