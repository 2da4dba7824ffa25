//! Per-widget menu state.
//!
//! Tracks the expanded submenus across path changes, user toggles and
//! collapse. Open keys are recomputed only when the pathname actually
//! changes, so a user's manual expansion survives re-renders.

use std::sync::Arc;

use serde::Serialize;

use crate::navigation::resolver::NavigationResolver;

/// Props handed to the menu widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuProps {
    /// `None` while collapsed: no submenu may be expanded.
    pub open_keys: Option<Vec<String>>,
    pub selected_keys: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MenuState {
    resolver: Arc<NavigationResolver>,
    pathname: String,
    open_keys: Vec<String>,
    collapsed: bool,
}

impl MenuState {
    pub fn new(resolver: Arc<NavigationResolver>, pathname: impl Into<String>) -> Self {
        let pathname = pathname.into();
        let open_keys = resolver.open_keys(&pathname);
        Self {
            resolver,
            pathname,
            open_keys,
            collapsed: false,
        }
    }

    /// React to navigation. Returns true if the pathname changed.
    pub fn on_path_change(&mut self, pathname: &str) -> bool {
        if pathname == self.pathname {
            return false;
        }
        self.pathname = pathname.to_string();
        self.open_keys = self.resolver.open_keys(pathname);
        true
    }

    /// The user expanded or collapsed submenus.
    pub fn set_open_keys(&mut self, open_keys: Vec<String>) {
        self.open_keys = open_keys;
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Open keys, retained even while collapsed.
    pub fn open_keys(&self) -> &[String] {
        &self.open_keys
    }

    pub fn selected_keys(&self) -> Vec<String> {
        self.resolver.selected_keys(&self.pathname, &self.open_keys)
    }

    pub fn props(&self) -> MenuProps {
        MenuProps {
            open_keys: (!self.collapsed).then(|| self.open_keys.clone()),
            selected_keys: self.selected_keys(),
        }
    }
}
