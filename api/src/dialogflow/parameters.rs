//! Boundary normalisation of intent and context parameters.
//!
//! Agent revisions disagree on parameter naming (`ram-model`, `Ram-model`,
//! `ram_model`) and shape (scalar or list). Everything is folded into one
//! canonical form here so handlers only ever see trimmed, non-empty strings.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Canonical parameter name: lowercase, `_` folded into `-`.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Scalar text of a parameter value, `None` when the value counts as absent.
pub fn normalize_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string),
        Value::Array(items) => items.iter().find_map(normalize_value),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) => None,
    }
}

/// Normalised, present-only parameters of one turn or context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    values: HashMap<String, String>,
}

impl Parameters {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let values = map
            .iter()
            .filter_map(|(name, value)| normalize_value(value).map(|v| (normalize_name(name), v)))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&normalize_name(name)).map(String::as_str)
    }

    /// First present value among `names`, in order.
    pub fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get(name))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<&Map<String, Value>> for Parameters {
    fn from(map: &Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}
