//! Parsing style documents.
//!
//! A style document is a JSON object. Each member is one style: the member
//! name is the style name, the member value is its definition and must be
//! an object too.
//!
//! ```json
//! {
//!   "string": { "color": "#c41a16" },
//!   "number": { "color": "#1c00cf", "font-weight": "bold" }
//! }
//! ```
//!
//! Parsing drives `serde_json` directly so the top-level object can be
//! walked member by member: duplicate names are caught (a `serde_json::Map`
//! would keep the last one silently), and in keys-only mode definitions are
//! checked for shape and skipped without building values.

mod document;

use serde::de::{DeserializeOwned, DeserializeSeed};
use serde_json::error::Category;

use crate::catalog::{StyleCatalog, StyleDefinition, StyleKey};
use crate::{Error, Result};

use document::{CatalogSeed, ObjectShape};

/// Parses a document and returns its style names in document order.
pub fn parse_keys_from_slice(bytes: &[u8]) -> Result<Vec<StyleKey>> {
    let entries = parse_entries::<ObjectShape>(bytes)?;
    Ok(entries.into_iter().map(|(name, _)| StyleKey::from(name)).collect())
}

/// Parses a document into a style catalog.
pub fn parse_styles_from_slice(bytes: &[u8]) -> Result<StyleCatalog> {
    let entries = parse_entries::<StyleDefinition>(bytes)?;
    Ok(StyleCatalog::from_unique_entries(entries))
}

fn parse_entries<V: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<(String, V)>> {
    let mut duplicate = None;
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let parsed = CatalogSeed::<V>::new(&mut duplicate).deserialize(&mut deserializer);
    let entries = parsed
        .and_then(|entries| deserializer.end().map(|()| entries))
        .map_err(|err| classify(err, duplicate))?;

    tracing::trace!(styles = entries.len(), "parsed style document");
    Ok(entries)
}

/// Turns a `serde_json` failure into a classified style error.
fn classify(err: serde_json::Error, duplicate: Option<String>) -> Error {
    let (line, column) = (err.line(), err.column());
    if let Some(name) = duplicate {
        return Error::duplicate_style(name, line, column);
    }

    let message = without_position(&err);
    match err.classify() {
        Category::Data => Error::structure(message, line, column),
        Category::Syntax | Category::Eof | Category::Io => Error::syntax(message, line, column),
    }
}

/// `serde_json` appends "at line L column C"; the position is kept in
/// separate fields instead.
fn without_position(err: &serde_json::Error) -> String {
    let text = err.to_string();
    match text.rfind(" at line ") {
        Some(cut) => text[..cut].to_owned(),
        None => text,
    }
}
