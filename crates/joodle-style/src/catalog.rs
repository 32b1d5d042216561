//! Style names, definitions and the catalog that maps one to the other.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The name of a top-level style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleKey(String);

impl StyleKey {
    /// Creates a style key.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StyleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StyleKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleKey {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for StyleKey {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The definition of one style: property names mapped to JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleDefinition(Map<String, Value>);

impl StyleDefinition {
    /// Creates an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a property.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.0.get(property)
    }

    /// Returns a property as a string, if it is one.
    pub fn get_str(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(Value::as_str)
    }

    /// Returns true if the property is set.
    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Sets a property, returning the previous value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(property.into(), value.into())
    }

    /// Iterates over the properties.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no property is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the definition, returning the underlying JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for StyleDefinition {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Every style read from one resource, in document order.
#[derive(Debug, Clone, Default)]
pub struct StyleCatalog {
    styles: Vec<(StyleKey, StyleDefinition)>,
    index: HashMap<StyleKey, usize>,
    /// Source file path, when read from disk.
    source_path: Option<PathBuf>,
}

impl StyleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from entries whose names are already known unique.
    pub(crate) fn from_unique_entries(entries: Vec<(String, StyleDefinition)>) -> Self {
        let mut catalog = Self {
            styles: Vec::with_capacity(entries.len()),
            index: HashMap::with_capacity(entries.len()),
            source_path: None,
        };
        for (name, definition) in entries {
            catalog.insert(name, definition);
        }
        catalog
    }

    pub(crate) fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Adds or replaces a style. A replaced style keeps its position.
    pub fn insert(&mut self, name: impl Into<StyleKey>, definition: StyleDefinition) -> Option<StyleDefinition> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => Some(std::mem::replace(&mut self.styles[slot].1, definition)),
            None => {
                self.index.insert(name.clone(), self.styles.len());
                self.styles.push((name, definition));
                None
            }
        }
    }

    /// Returns the definition of a style.
    pub fn get(&self, name: &str) -> Option<&StyleDefinition> {
        self.index.get(name).map(|&slot| &self.styles[slot].1)
    }

    /// Returns one property of one style.
    pub fn property(&self, name: &str, property: &str) -> Option<&Value> {
        self.get(name).and_then(|definition| definition.get(property))
    }

    /// Returns true if the style exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over the style names in document order.
    pub fn keys(&self) -> impl Iterator<Item = &StyleKey> {
        self.styles.iter().map(|(key, _)| key)
    }

    /// The style names as a set.
    pub fn key_set(&self) -> BTreeSet<&str> {
        self.keys().map(StyleKey::as_str).collect()
    }

    /// Iterates over styles in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &StyleDefinition)> {
        self.styles.iter().map(|(key, definition)| (key, definition))
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if the catalog has no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// The file the catalog was read from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Consumes the catalog, returning a name-to-definition map.
    pub fn into_map(self) -> HashMap<StyleKey, StyleDefinition> {
        self.styles.into_iter().collect()
    }
}
