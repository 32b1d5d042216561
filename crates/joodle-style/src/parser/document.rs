//! Serde plumbing for the top-level style object.

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, DeserializeSeed, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Walks the top-level object, collecting `(name, definition)` pairs.
///
/// The first repeated name is written to `duplicate` before the walk is
/// aborted, so the caller can tell it apart from a plain shape error.
pub(super) struct CatalogSeed<'a, V> {
    duplicate: &'a mut Option<String>,
    marker: PhantomData<fn() -> V>,
}

impl<'a, V> CatalogSeed<'a, V> {
    pub(super) fn new(duplicate: &'a mut Option<String>) -> Self {
        Self {
            duplicate,
            marker: PhantomData,
        }
    }
}

impl<'de, V: DeserializeOwned> DeserializeSeed<'de> for CatalogSeed<'_, V> {
    type Value = Vec<(String, V)>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de, V: DeserializeOwned> Visitor<'de> for CatalogSeed<'_, V> {
    type Value = Vec<(String, V)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping style names to style definitions")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some(name) = map.next_key::<String>()? {
            if seen.contains(&name) {
                let error = <A::Error as de::Error>::custom(format_args!("duplicate style `{name}`"));
                *self.duplicate = Some(name);
                return Err(error);
            }
            let definition = map.next_value::<V>()?;
            seen.insert(name.clone());
            entries.push((name, definition));
        }

        Ok(entries)
    }
}

/// A style definition checked for shape and otherwise discarded.
pub(super) struct ObjectShape;

impl<'de> Deserialize<'de> for ObjectShape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ObjectShapeVisitor)
    }
}

struct ObjectShapeVisitor;

impl<'de> Visitor<'de> for ObjectShapeVisitor {
    type Value = ObjectShape;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a style definition object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(ObjectShape)
    }
}
