//! Core services for the Joodle JSON editor.
//!
//! This crate ties together the pieces the editor's front end consumes:
//!
//! - [`style`]: reading style catalogs that decide how JSON values look
//! - [`codec`]: deflate, zlib and gzip compression of document buffers
//! - [`outline`]: context-menu and delete hooks for the document outline
//!
//! Nothing here draws or dispatches events; the platform layer does that and
//! calls into these services.
//!
//! # Logging
//!
//! All crates log through `tracing`. Install a subscriber in the
//! application to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("joodle=debug,joodle_style=debug,joodle_codec=debug")
//!     .init();
//! ```
//!
//! # Example
//!
//! ```ignore
//! use joodle::prelude::*;
//!
//! let catalog = read_styles("styles/default.json")?;
//! let packed = compress_gzip(document.as_bytes())?;
//!
//! let mut outline = MenuOutline::new();
//! outline.set_delegate(OutlineHooks::new().on_delete(|row| remove_row(row)));
//! ```

pub mod outline;

pub use joodle_codec as codec;
pub use joodle_style as style;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::codec::{
        compress_deflate, compress_gzip, compress_zlib, decompress_auto, decompress_deflate,
        decompress_gzip, decompress_zlib, Codec, CodecError, CodecErrorKind, CompressionLevel,
        Format,
    };
    pub use crate::outline::{
        ContextMenu, MenuItem, MenuOutline, MenuOutlineDelegate, OutlineColumn, OutlineHooks,
    };
    pub use crate::style::{
        read_keys, read_styles, ErrorKind as StyleErrorKind, StyleCatalog, StyleDefinition,
        StyleKey, StyleLocation, StylesReader,
    };
}
