//! Caller-supplied permission maps.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// A permission value as supplied by the caller.
///
/// Permissions arrive from loosely typed sources (YAML, JSON), so the value is
/// kept as a tagged variant and interpreted through [`PermissionValue::is_truthy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<PermissionValue>),
    Map(BTreeMap<String, PermissionValue>),
}

impl PermissionValue {
    /// `false`, zero, empty text, empty lists, empty maps and null are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PermissionValue::Null => false,
            PermissionValue::Bool(b) => *b,
            PermissionValue::Int(i) => *i != 0,
            PermissionValue::Float(f) => *f != 0.0,
            PermissionValue::Text(s) => !s.is_empty(),
            PermissionValue::List(items) => !items.is_empty(),
            PermissionValue::Map(entries) => !entries.is_empty(),
        }
    }
}

impl From<bool> for PermissionValue {
    fn from(v: bool) -> Self {
        PermissionValue::Bool(v)
    }
}

impl From<i64> for PermissionValue {
    fn from(v: i64) -> Self {
        PermissionValue::Int(v)
    }
}

impl From<f64> for PermissionValue {
    fn from(v: f64) -> Self {
        PermissionValue::Float(v)
    }
}

impl From<&str> for PermissionValue {
    fn from(v: &str) -> Self {
        PermissionValue::Text(v.to_string())
    }
}

impl From<String> for PermissionValue {
    fn from(v: String) -> Self {
        PermissionValue::Text(v)
    }
}

/// Permission name -> value. Owned by the caller; never stored by privkit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    entries: BTreeMap<String, PermissionValue>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`PermissionSet::grant`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PermissionValue>) -> Self {
        self.grant(name, value);
        self
    }

    /// Set `name`, replacing any earlier value.
    pub fn grant(&mut self, name: impl Into<String>, value: impl Into<PermissionValue>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&PermissionValue> {
        self.entries.get(name)
    }

    /// True when `name` is present with a truthy value. Absent means false.
    pub fn is_granted(&self, name: &str) -> bool {
        self.get(name).is_some_and(PermissionValue::is_truthy)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PermissionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<HashMap<String, bool>> for PermissionSet {
    fn from(map: HashMap<String, bool>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for PermissionSet
where
    K: Into<String>,
    V: Into<PermissionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
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
    fn truthiness_per_variant() {
        assert!(!PermissionValue::Null.is_truthy());
        assert!(PermissionValue::Bool(true).is_truthy());
        assert!(!PermissionValue::Bool(false).is_truthy());
        assert!(PermissionValue::Int(-1).is_truthy());
        assert!(!PermissionValue::Int(0).is_truthy());
        assert!(PermissionValue::Float(0.5).is_truthy());
        assert!(!PermissionValue::Float(0.0).is_truthy());
        assert!(PermissionValue::from("yes").is_truthy());
        assert!(!PermissionValue::from("").is_truthy());
        assert!(PermissionValue::List(vec![PermissionValue::Null]).is_truthy());
        assert!(!PermissionValue::List(Vec::new()).is_truthy());

        let scoped: BTreeMap<String, PermissionValue> =
            [("scope".to_string(), PermissionValue::from("all"))].into_iter().collect();
        assert!(PermissionValue::Map(scoped).is_truthy());
        assert!(!PermissionValue::Map(BTreeMap::new()).is_truthy());
    }

    #[test]
    fn grant_replaces_previous_value() {
        let mut perms = PermissionSet::new().with("internal_access", true);
        perms.grant("internal_access", false);
        assert_eq!(perms.len(), 1);
        assert!(!perms.is_granted("internal_access"));
    }

    #[test]
    fn absent_is_not_granted() {
        let perms = PermissionSet::new().with("read", true);
        assert!(!perms.is_granted("internal_access"));
    }

    #[test]
    fn nested_mapping_value_parses() {
        let perms: PermissionSet =
            serde_json::from_str(r#"{"internal_access": {"scope": "all"}}"#).unwrap();
        let mut expected = BTreeMap::new();
        expected.insert("scope".to_string(), PermissionValue::from("all"));
        assert_eq!(perms.get("internal_access"), Some(&PermissionValue::Map(expected)));
        assert!(perms.is_granted("internal_access"));
    }

    #[test]
    fn from_bool_map() {
        let mut raw = HashMap::new();
        raw.insert("internal_access".to_string(), true);
        raw.insert("write".to_string(), false);

        let perms = PermissionSet::from(raw);
        assert!(perms.is_granted("internal_access"));
        assert!(!perms.is_granted("write"));
        assert_eq!(perms.get("write"), Some(&PermissionValue::Bool(false)));
    }
}
