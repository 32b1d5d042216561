//! Outline view hooks.
//!
//! The editor shows a JSON document in an outline: one row per value, with
//! key and value columns. The platform view owns drawing and event handling;
//! this module owns what happens when the user asks for a context menu or
//! deletes a row, by resolving the request against an optional
//! [`MenuOutlineDelegate`].
//!
//! | Request          | No delegate / hook not overridden | Delegate            |
//! |------------------|-----------------------------------|---------------------|
//! | context menu     | no menu                           | delegate's menu     |
//! | delete row       | nothing happens                   | delegate deletes it |
//!
//! Requests for "no row" (the pointer is over empty space) never reach the
//! delegate.

mod delegate;
mod menu;

pub use delegate::{MenuOutlineDelegate, OutlineColumn, OutlineHooks};
pub use menu::{ContextMenu, MenuItem};

/// Resolves outline requests against an optional delegate.
///
/// # Example
///
/// ```ignore
/// use joodle::outline::{ContextMenu, MenuOutline, OutlineHooks};
///
/// let mut outline = MenuOutline::new();
/// outline.set_delegate(OutlineHooks::new().on_menu(|_, _| {
///     Some(ContextMenu::new().with_action("Delete", "delete"))
/// }));
///
/// let menu = outline.menu_for_row(Some(2), None);
/// ```
#[derive(Default)]
pub struct MenuOutline {
    delegate: Option<Box<dyn MenuOutlineDelegate>>,
}

impl MenuOutline {
    /// Creates an outline without a delegate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an outline with a delegate.
    pub fn with_delegate(delegate: impl MenuOutlineDelegate + 'static) -> Self {
        Self {
            delegate: Some(Box::new(delegate)),
        }
    }

    /// Installs a delegate, replacing any previous one.
    pub fn set_delegate(&mut self, delegate: impl MenuOutlineDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    /// Removes the delegate, returning it.
    pub fn take_delegate(&mut self) -> Option<Box<dyn MenuOutlineDelegate>> {
        self.delegate.take()
    }

    /// Returns true if a delegate is installed.
    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Returns the context menu for `row`, if any.
    ///
    /// Menus without a single action are dropped so the platform layer never
    /// shows an empty popup.
    pub fn menu_for_row(&self, row: Option<usize>, column: Option<&OutlineColumn>) -> Option<ContextMenu> {
        let row = row?;
        let delegate = self.delegate.as_deref()?;
        let menu = delegate
            .menu_for_row(row, column)
            .filter(|menu| !menu.has_no_actions());

        tracing::trace!(
            row,
            column = column.map(OutlineColumn::identifier),
            has_menu = menu.is_some(),
            "resolved outline context menu"
        );
        menu
    }

    /// Asks the delegate to delete the object in `row`.
    ///
    /// Returns true if a delegate handled the request.
    pub fn delete_row(&mut self, row: Option<usize>) -> bool {
        let Some(row) = row else {
            return false;
        };
        let handled = self
            .delegate
            .as_deref_mut()
            .is_some_and(|delegate| delegate.delete_object_in_row(row));

        if handled {
            tracing::debug!(row, "deleted outline row");
        } else {
            tracing::trace!(row, "outline row deletion ignored");
        }
        handled
    }
}

impl std::fmt::Debug for MenuOutline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuOutline")
            .field("has_delegate", &self.has_delegate())
            .finish()
    }
}
