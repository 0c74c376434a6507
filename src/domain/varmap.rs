//! Ordered variable mapping
//!
//! [`VarMap`] keeps name/value pairs in first-seen order. Overwriting an
//! existing name replaces its value without moving it; new names are appended.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Ordered name → value mapping with override-preserves-position semantics
///
/// # Examples
///
/// ```
/// use setup_vars::domain::VarMap;
///
/// let mut vars = VarMap::new();
/// vars.insert("A", "1");
/// vars.insert("B", "2");
/// vars.insert("A", "3");
///
/// let names: Vec<&str> = vars.names().collect();
/// assert_eq!(names, ["A", "B"]);
/// assert_eq!(vars.get("A"), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl VarMap {
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `name`
    ///
    /// Returns the previous value when the name was already present. The
    /// entry keeps its original position in that case.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();

        match self.index.get(&name) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Overlays every entry of `other` onto this mapping, in `other`'s order
    pub fn overlay(&mut self, other: &VarMap) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }

    /// Looks up the value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Returns true if `name` is present
    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Iterates over names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for VarMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = VarMap::new();
        vars.extend(iter);
        vars
    }
}

impl<K, V> Extend<(K, V)> for VarMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl Serialize for VarMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct VarMapVisitor;

impl<'de> Visitor<'de> for VarMapVisitor {
    type Value = VarMap;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a mapping of string names to string values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut vars = VarMap::new();
        while let Some((name, value)) = access.next_entry::<String, String>()? {
            vars.insert(name, value);
        }
        Ok(vars)
    }
}

impl<'de> Deserialize<'de> for VarMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(VarMapVisitor)
    }
}
