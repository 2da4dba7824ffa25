//! Route directory subsystem.
//!
//! # Data Flow
//! ```text
//! RouteTable (template → view, dependencies, overrides)
//!     + menu tree (flattened by menu::flatten)
//!     → builder.rs (first matching menu entry per template, merge metadata)
//!     → RouteDirectory (template → merged entry, immutable)
//!     → injected into every resolved view
//! ```
//!
//! # Design Decisions
//! - Built once per `NavigationContext`, shared through `Arc`
//! - Entries keep the route table's declaration order
//! - Pathname lookup prefers an exact template, then the first pattern match

pub mod builder;
pub mod entry;

use indexmap::IndexMap;
use thiserror::Error;

use crate::routing::{url_to_list, PatternError};

pub use builder::build_directory;
pub use entry::{DirectoryEntry, RouteEntry, RouteTable};

/// Errors raised while building or configuring the directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// A route template does not compile.
    #[error("route `{template}` has an invalid template: {source}")]
    InvalidTemplate {
        template: String,
        source: PatternError,
    },

    /// A configured route names a component the view catalog does not know.
    #[error("route `{template}` references unknown component `{component}`")]
    UnknownComponent { template: String, component: String },
}

/// One breadcrumb for a pathname prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Concrete path prefix (e.g., "/projects/detail/7").
    pub path: String,
    /// Directory template the prefix resolved to.
    pub template: String,
    /// Display-name token.
    pub name: String,
}

/// Path-indexed, merged view of the route table.
pub struct RouteDirectory<V> {
    entries: IndexMap<String, DirectoryEntry<V>>,
}

impl<V> RouteDirectory<V> {
    pub(crate) fn from_entries(entries: IndexMap<String, DirectoryEntry<V>>) -> Self {
        Self { entries }
    }

    pub fn get(&self, template: &str) -> Option<&DirectoryEntry<V>> {
        self.entries.get(template)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectoryEntry<V>)> {
        self.entries
            .iter()
            .map(|(template, entry)| (template.as_str(), entry))
    }

    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry serving a concrete pathname.
    pub fn lookup(&self, pathname: &str) -> Option<(&str, &DirectoryEntry<V>)> {
        if let Some((template, entry)) = self.entries.get_key_value(pathname) {
            return Some((template.as_str(), entry));
        }
        self.iter().find(|(_, entry)| entry.pattern.test(pathname))
    }

    /// Breadcrumb trail for `pathname`, shortest prefix first.
    ///
    /// Prefixes with no entry, no name, or `hide_in_breadcrumb` are skipped.
    pub fn breadcrumbs(&self, pathname: &str) -> Vec<Breadcrumb> {
        url_to_list(pathname)
            .into_iter()
            .filter_map(|path| {
                let (template, entry) = self.lookup(&path)?;
                if entry.is_hidden_in_breadcrumb() {
                    return None;
                }
                let name = entry.name.clone()?;
                Some(Breadcrumb {
                    template: template.to_string(),
                    path,
                    name,
                })
            })
            .collect()
    }
}

impl<V> std::fmt::Debug for RouteDirectory<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;
    use crate::resolver::ViewLoader;

    fn directory() -> RouteDirectory<()> {
        let menu = vec![MenuItem::new("/projects")
            .with_name("projects")
            .with_children(vec![
                MenuItem::new("/projects/list").with_name("list"),
                MenuItem::new("/projects/detail/:id").with_name("detail"),
                MenuItem::new("/projects/hidden")
                    .with_name("hidden")
                    .with_hide_in_breadcrumb(true),
            ])];
        let routes: RouteTable<()> = [
            "/projects",
            "/projects/list",
            "/projects/detail/:id",
            "/projects/hidden",
        ]
        .into_iter()
        .map(|template| (template, RouteEntry::new(ViewLoader::eager(|| ()))))
        .collect();
        build_directory(&routes, &menu).unwrap()
    }

    #[test]
    fn test_lookup_prefers_exact_template() {
        let directory = directory();
        let (template, _) = directory.lookup("/projects/detail/:id").unwrap();
        assert_eq!(template, "/projects/detail/:id");

        let (template, entry) = directory.lookup("/projects/detail/7").unwrap();
        assert_eq!(template, "/projects/detail/:id");
        assert_eq!(entry.name.as_deref(), Some("detail"));

        assert!(directory.lookup("/wallet").is_none());
    }

    #[test]
    fn test_breadcrumbs() {
        let directory = directory();
        let crumbs = directory.breadcrumbs("/projects/detail/7");
        let names: Vec<_> = crumbs.iter().map(|c| c.name.as_str()).collect();
        // "/projects/detail" has no route of its own.
        assert_eq!(names, vec!["projects", "detail"]);
        assert_eq!(crumbs[1].path, "/projects/detail/7");
        assert_eq!(crumbs[1].template, "/projects/detail/:id");
    }

    #[test]
    fn test_hidden_breadcrumb_is_skipped() {
        let directory = directory();
        let names: Vec<_> = directory
            .breadcrumbs("/projects/hidden")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["projects"]);
    }
}
