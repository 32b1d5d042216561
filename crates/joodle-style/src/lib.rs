//! Style catalogs for Joodle.
//!
//! A style resource is a JSON document naming the styles an editor uses to
//! present JSON values. This crate reads such a resource in one of two ways:
//!
//! - **Keys only**: [`read_keys`] validates the whole document and returns
//!   the style names, without building the definitions. Useful for
//!   completion lists and quick checks.
//! - **Full catalog**: [`read_styles`] returns a [`StyleCatalog`] mapping
//!   every style name to its [`StyleDefinition`].
//!
//! For a resource that reads successfully, both return the same set of names.
//!
//! # Example
//!
//! ```ignore
//! use joodle_style::{read_keys, read_styles, ErrorKind};
//!
//! let names = read_keys("styles/default.json")?;
//! let catalog = read_styles("file:///etc/joodle/styles.json")?;
//! let color = catalog.property("string", "color");
//!
//! match read_styles("styles/broken.json") {
//!     Err(err) if err.kind() == ErrorKind::Semantic => eprintln!("{err}"),
//!     _ => {}
//! }
//! ```

pub mod catalog;
pub mod location;
pub mod parser;
pub mod reader;

mod error;

pub use catalog::{StyleCatalog, StyleDefinition, StyleKey};
pub use error::{Error, ErrorKind, Result};
pub use location::StyleLocation;
pub use reader::{parse_keys, parse_styles, read_keys, read_styles, ReaderOptions, StylesReader};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::catalog::{StyleCatalog, StyleDefinition, StyleKey};
    pub use crate::location::StyleLocation;
    pub use crate::reader::{ReaderOptions, StylesReader};
    pub use crate::{Error, ErrorKind, Result};
}
