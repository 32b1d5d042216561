//! Context menu descriptions.
//!
//! These are plain data: a delegate describes what the menu should offer,
//! and the platform layer builds and shows the native menu from it.

/// An item in a context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// A clickable entry.
    Action {
        /// The text shown to the user.
        title: String,
        /// Identifier reported back when the entry is chosen.
        action: String,
        /// Whether the entry can be chosen.
        enabled: bool,
    },
    /// A visual separator line.
    Separator,
    /// A nested menu.
    Submenu {
        /// The title of the submenu.
        title: String,
        /// The submenu itself.
        menu: ContextMenu,
    },
}

impl MenuItem {
    /// Create an enabled action item.
    pub fn action(title: impl Into<String>, action: impl Into<String>) -> Self {
        MenuItem::Action {
            title: title.into(),
            action: action.into(),
            enabled: true,
        }
    }

    /// Create a disabled action item.
    pub fn disabled(title: impl Into<String>, action: impl Into<String>) -> Self {
        MenuItem::Action {
            title: title.into(),
            action: action.into(),
            enabled: false,
        }
    }

    /// Create a separator item.
    pub fn separator() -> Self {
        MenuItem::Separator
    }

    /// Create a submenu item.
    pub fn submenu(title: impl Into<String>, menu: ContextMenu) -> Self {
        MenuItem::Submenu {
            title: title.into(),
            menu,
        }
    }

    /// Check if this item is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, MenuItem::Separator)
    }

    /// The title, for actions and submenus.
    pub fn title(&self) -> Option<&str> {
        match self {
            MenuItem::Action { title, .. } | MenuItem::Submenu { title, .. } => Some(title),
            MenuItem::Separator => None,
        }
    }
}

/// A context menu: an ordered list of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    items: Vec<MenuItem>,
}

impl ContextMenu {
    /// Create an empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an enabled action.
    pub fn with_action(mut self, title: impl Into<String>, action: impl Into<String>) -> Self {
        self.items.push(MenuItem::action(title, action));
        self
    }

    /// Add a separator.
    pub fn with_separator(mut self) -> Self {
        self.items.push(MenuItem::Separator);
        self
    }

    /// Add a nested menu.
    pub fn with_submenu(mut self, title: impl Into<String>, menu: ContextMenu) -> Self {
        self.items.push(MenuItem::submenu(title, menu));
        self
    }

    /// Add any item.
    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// The items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Returns true if the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if nothing in the menu can be chosen.
    pub fn has_no_actions(&self) -> bool {
        self.items.iter().all(|item| match item {
            MenuItem::Action { .. } => false,
            MenuItem::Separator => true,
            MenuItem::Submenu { menu, .. } => menu.has_no_actions(),
        })
    }

    /// Finds an action by identifier, searching submenus too.
    pub fn find_action(&self, action: &str) -> Option<&MenuItem> {
        self.items.iter().find_map(|item| match item {
            MenuItem::Action { action: id, .. } if id == action => Some(item),
            MenuItem::Submenu { menu, .. } => menu.find_action(action),
            _ => None,
        })
    }
}
