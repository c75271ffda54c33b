//! State payloads: named variables holding dynamic values.

use super::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The variables carried by a state.
///
/// Variables are kept ordered by name, so describing a state always yields
/// the same sequence.
///
/// # Example
///
/// ```rust
/// use tabular_fsm::core::{Payload, Value};
///
/// let payload = Payload::new().with("count", 0).with("label", "idle");
/// assert_eq!(payload.get("count"), Some(&Value::Integer(0)));
/// assert_eq!(payload.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload {
    variables: BTreeMap<String, Value>,
}

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable, returning the payload.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a variable, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.variables.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Owned `(variable, value)` pairs in name order.
    pub fn to_pairs(&self) -> Vec<(String, Value)> {
        self.variables
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_is_name_ordered() {
        let payload = Payload::new().with("zeta", 1).with("alpha", true);
        let names: Vec<&str> = payload.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn insert_replaces_existing_variable() {
        let mut payload = Payload::new().with("count", 1);
        let previous = payload.insert("count", 2);
        assert_eq!(previous, Some(Value::Integer(1)));
        assert_eq!(payload.get("count"), Some(&Value::Integer(2)));
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn collects_from_pairs() {
        let payload: Payload = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(
            payload.to_pairs(),
            vec![
                ("a".to_string(), Value::Integer(1)),
                ("b".to_string(), Value::Integer(2)),
            ]
        );
    }

    #[test]
    fn serializes_as_plain_object() {
        let payload = Payload::new().with("count", 3);
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"count":3}"#);
    }
}
