//! Visible navigation tree.
//!
//! Derives what a menu widget should draw from the raw menu tree: unnamed
//! and `hide_in_menu` entries are dropped, groups with no surviving children
//! are dropped, and every entry is passed through an [`AuthorityCheck`].

use std::collections::HashSet;

use crate::menu::item::{Icon, MenuItem};
use crate::routing::{is_external, normalize_link};

/// Decides whether an entry with the given authority may be shown.
pub trait AuthorityCheck: Send + Sync {
    fn permits(&self, authority: Option<&[String]>) -> bool;
}

/// Shows everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AuthorityCheck for AllowAll {
    fn permits(&self, _authority: Option<&[String]>) -> bool {
        true
    }
}

/// Grants access when the current user holds any of the required roles.
///
/// Entries without an authority are public.
#[derive(Debug, Clone, Default)]
pub struct RoleSet {
    roles: HashSet<String>,
}

impl RoleSet {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

impl AuthorityCheck for RoleSet {
    fn permits(&self, authority: Option<&[String]>) -> bool {
        match authority {
            None => true,
            Some(required) => required.iter().any(|role| self.roles.contains(role)),
        }
    }
}

/// Where a menu entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLink {
    /// Absolute `http(s)://` URL, opened outside the router.
    External(String),
    /// Normalized in-app path.
    Internal(String),
}

/// A drawable menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NavNode {
    /// Menu key (the item's path).
    pub key: String,
    /// Display-name token.
    pub label: String,
    pub icon: Option<Icon>,
    pub kind: NavKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavKind {
    Submenu {
        children: Vec<NavNode>,
    },
    Item {
        link: MenuLink,
        target: Option<String>,
    },
}

/// Build the visible navigation tree for `menus`.
pub fn visible_items(menus: &[MenuItem], check: &dyn AuthorityCheck) -> Vec<NavNode> {
    menus
        .iter()
        .filter(|item| item.name.is_some() && !item.is_hidden_in_menu())
        .filter_map(|item| {
            let node = to_node(item, check)?;
            check.permits(item.authority.as_deref()).then_some(node)
        })
        .collect()
}

fn to_node(item: &MenuItem, check: &dyn AuthorityCheck) -> Option<NavNode> {
    let label = item.name.clone().unwrap_or_default();

    let kind = if item.is_group() {
        let children = visible_items(item.children.as_deref().unwrap_or_default(), check);
        if children.is_empty() {
            return None;
        }
        NavKind::Submenu { children }
    } else {
        let path = normalize_link(item.path.as_deref());
        let link = if is_external(&path) {
            MenuLink::External(path)
        } else {
            MenuLink::Internal(path)
        };
        NavKind::Item {
            link,
            target: item.target.clone(),
        }
    };

    Some(NavNode {
        key: item.key().to_string(),
        label,
        icon: item.icon.clone(),
        kind,
    })
}
