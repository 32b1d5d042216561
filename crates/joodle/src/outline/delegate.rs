//! The outline delegate contract.
//!
//! An outline view asks its delegate for two things: a context menu for the
//! row (and column) under the pointer, and the deletion of the object shown
//! in a row. Both are optional. A delegate overrides only what it supports;
//! the defaults mean "no context menu" and "deletion not handled".
//!
//! # Implementing a delegate
//!
//! ```ignore
//! use joodle::outline::{ContextMenu, MenuOutlineDelegate, OutlineColumn};
//!
//! struct DocumentDelegate { rows: Vec<String> }
//!
//! impl MenuOutlineDelegate for DocumentDelegate {
//!     fn delete_object_in_row(&mut self, row: usize) -> bool {
//!         if row < self.rows.len() {
//!             self.rows.remove(row);
//!         }
//!         true
//!     }
//! }
//! ```
//!
//! # Closure hooks
//!
//! ```ignore
//! let hooks = OutlineHooks::new()
//!     .on_menu(|row, _column| Some(ContextMenu::new().with_action("Delete", "delete")))
//!     .on_delete(move |row| println!("delete row {row}"));
//! ```

use std::fmt;

use super::menu::ContextMenu;

/// A column of the outline, as seen by the delegate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutlineColumn {
    index: usize,
    identifier: String,
}

impl OutlineColumn {
    /// Creates a column reference.
    pub fn new(index: usize, identifier: impl Into<String>) -> Self {
        Self {
            index,
            identifier: identifier.into(),
        }
    }

    /// Position of the column, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Identifier of the column, e.g. `"key"` or `"value"`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Optional behaviors an outline view delegates to its owner.
pub trait MenuOutlineDelegate {
    /// Returns the context menu for a row. `column` is `None` when the
    /// pointer is not over a column.
    fn menu_for_row(&self, _row: usize, _column: Option<&OutlineColumn>) -> Option<ContextMenu> {
        None
    }

    /// Deletes the object shown in `row`.
    ///
    /// Returns true if the delegate handled the request.
    fn delete_object_in_row(&mut self, _row: usize) -> bool {
        false
    }
}

type MenuHook = Box<dyn Fn(usize, Option<&OutlineColumn>) -> Option<ContextMenu>>;
type DeleteHook = Box<dyn FnMut(usize)>;

/// A delegate assembled from optional closures.
///
/// A hook that is not set behaves like the trait default.
#[derive(Default)]
pub struct OutlineHooks {
    menu: Option<MenuHook>,
    delete: Option<DeleteHook>,
}

impl OutlineHooks {
    /// Creates hooks with no capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the context menu hook.
    pub fn on_menu<F>(mut self, hook: F) -> Self
    where
        F: Fn(usize, Option<&OutlineColumn>) -> Option<ContextMenu> + 'static,
    {
        self.menu = Some(Box::new(hook));
        self
    }

    /// Sets the delete hook.
    pub fn on_delete<F>(mut self, hook: F) -> Self
    where
        F: FnMut(usize) + 'static,
    {
        self.delete = Some(Box::new(hook));
        self
    }
}

impl MenuOutlineDelegate for OutlineHooks {
    fn menu_for_row(&self, row: usize, column: Option<&OutlineColumn>) -> Option<ContextMenu> {
        self.menu.as_ref().and_then(|hook| hook(row, column))
    }

    fn delete_object_in_row(&mut self, row: usize) -> bool {
        match self.delete.as_mut() {
            Some(hook) => {
                hook(row);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for OutlineHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineHooks")
            .field("menu", &self.menu.is_some())
            .field("delete", &self.delete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Silent;
    impl MenuOutlineDelegate for Silent {}

    #[test]
    fn test_defaults() {
        let mut delegate = Silent;
        assert!(delegate.menu_for_row(0, None).is_none());
        assert!(!delegate.delete_object_in_row(0));
    }

    #[test]
    fn test_unset_hooks_fall_back_to_defaults() {
        let mut hooks = OutlineHooks::new();
        assert!(hooks.menu_for_row(0, None).is_none());
        assert!(!hooks.delete_object_in_row(0));

        let mut hooks = OutlineHooks::new().on_delete(|_| {});
        assert!(hooks.menu_for_row(0, None).is_none());
        assert!(hooks.delete_object_in_row(0));
    }

    #[test]
    fn test_hooks_receive_arguments() {
        let deleted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&deleted);

        let mut hooks = OutlineHooks::new()
            .on_menu(|row, column| {
                let label = format!("row {row} in {}", column.map_or("-", OutlineColumn::identifier));
                Some(ContextMenu::new().with_action(label, "noop"))
            })
            .on_delete(move |row| sink.borrow_mut().push(row));

        let column = OutlineColumn::new(1, "value");
        let menu = hooks.menu_for_row(3, Some(&column)).unwrap();
        assert_eq!(menu.items()[0].title(), Some("row 3 in value"));

        assert!(hooks.delete_object_in_row(5));
        assert!(hooks.delete_object_in_row(2));
        assert_eq!(*deleted.borrow(), [5, 2]);
    }
}
