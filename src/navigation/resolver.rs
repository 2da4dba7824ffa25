//! Navigation state resolution.
//!
//! # Responsibilities
//! - Match flattened menu keys (which may be templates) against paths
//! - Derive open submenu keys from the breadcrumb prefixes of a pathname
//! - Derive selected keys from the full pathname, with a parent fallback
//!
//! # Design Decisions
//! - Output order: candidate path order first, then menu key order
//! - Duplicate keys are emitted as often as they match
//! - No selection match falls back to the deepest open key; with no open
//!   keys either, nothing is selected

use serde::Serialize;

use crate::menu::{flatten_to_key_list, MenuItem};
use crate::observability::metrics;
use crate::routing::{url_to_list, PathPattern, PatternError};

/// Open and selected keys for one pathname.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NavigationState {
    pub open_keys: Vec<String>,
    /// Empty when nothing could be selected.
    pub selected_keys: Vec<String>,
}

/// Match `flat_keys` against `candidate_paths`.
///
/// For each candidate in order, every key whose pattern accepts it is
/// emitted in key order.
pub fn match_keys<S: AsRef<str>>(
    flat_keys: &[String],
    candidate_paths: &[S],
) -> Result<Vec<String>, PatternError> {
    Ok(NavigationResolver::new(flat_keys.to_vec())?.match_paths(candidate_paths))
}

/// Precompiled menu keys for repeated resolution.
#[derive(Debug, Clone)]
pub struct NavigationResolver {
    keys: Vec<(String, PathPattern)>,
}

impl NavigationResolver {
    pub fn new(flat_keys: Vec<String>) -> Result<Self, PatternError> {
        let keys = flat_keys
            .into_iter()
            .map(|key| {
                let pattern = PathPattern::compile(&key)?;
                Ok((key, pattern))
            })
            .collect::<Result<_, PatternError>>()?;
        Ok(Self { keys })
    }

    /// Compile the key list of a menu tree.
    pub fn from_menu(menus: &[MenuItem]) -> Result<Self, PatternError> {
        Self::new(flatten_to_key_list(menus))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|(key, _)| key.as_str())
    }

    pub fn match_paths<S: AsRef<str>>(&self, candidate_paths: &[S]) -> Vec<String> {
        candidate_paths
            .iter()
            .flat_map(|path| {
                self.keys
                    .iter()
                    .filter(move |(_, pattern)| pattern.test(path.as_ref()))
                    .map(|(key, _)| key.clone())
            })
            .collect()
    }

    /// Keys of the submenus to expand for `pathname`.
    pub fn open_keys(&self, pathname: &str) -> Vec<String> {
        self.match_paths(&url_to_list(pathname))
    }

    /// Keys to highlight for `pathname`, given the current open keys.
    pub fn selected_keys(&self, pathname: &str, open_keys: &[String]) -> Vec<String> {
        let selected = self.match_paths(&[pathname]);
        if !selected.is_empty() {
            return selected;
        }
        open_keys.last().cloned().into_iter().collect()
    }

    /// Compute the full navigation state for `pathname`.
    pub fn resolve(&self, pathname: &str) -> NavigationState {
        let open_keys = self.open_keys(pathname);
        let selected_keys = self.selected_keys(pathname, &open_keys);
        tracing::debug!(
            pathname,
            open = open_keys.len(),
            selected = ?selected_keys,
            "Navigation state resolved"
        );
        metrics::record_navigation_resolution(selected_keys.is_empty());
        NavigationState {
            open_keys,
            selected_keys,
        }
    }
}
