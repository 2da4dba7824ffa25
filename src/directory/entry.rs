//! Route table rows and merged directory entries.

use std::fmt;

use crate::config::schema::RouteConfig;
use crate::directory::DirectoryError;
use crate::resolver::view::{ViewCatalog, ViewLoader};
use indexmap::IndexMap;

use crate::routing::PathPattern;

/// One row of the declarative route table.
pub struct RouteEntry<V> {
    pub view: ViewLoader<V>,
    /// Dependency names registered before the view first renders.
    pub dependencies: Vec<String>,
    pub authority: Option<Vec<String>>,
    pub name: Option<String>,
    pub hide_in_breadcrumb: Option<bool>,
}

impl<V> RouteEntry<V> {
    pub fn new(view: ViewLoader<V>) -> Self {
        Self {
            view,
            dependencies: Vec::new(),
            authority: None,
            name: None,
            hide_in_breadcrumb: None,
        }
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_authority<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authority = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_hide_in_breadcrumb(mut self, hide: bool) -> Self {
        self.hide_in_breadcrumb = Some(hide);
        self
    }
}

impl<V> Clone for RouteEntry<V> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            dependencies: self.dependencies.clone(),
            authority: self.authority.clone(),
            name: self.name.clone(),
            hide_in_breadcrumb: self.hide_in_breadcrumb,
        }
    }
}

impl<V> fmt::Debug for RouteEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("view", &self.view)
            .field("dependencies", &self.dependencies)
            .field("authority", &self.authority)
            .field("name", &self.name)
            .field("hide_in_breadcrumb", &self.hide_in_breadcrumb)
            .finish()
    }
}

/// Route table keyed by path template, in declaration order.
pub struct RouteTable<V> {
    routes: IndexMap<String, RouteEntry<V>>,
}

impl<V> RouteTable<V> {
    pub fn new() -> Self {
        Self {
            routes: IndexMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with_route(mut self, template: impl Into<String>, entry: RouteEntry<V>) -> Self {
        self.insert(template, entry);
        self
    }

    /// Insert a route; an existing template is replaced in place.
    pub fn insert(
        &mut self,
        template: impl Into<String>,
        entry: RouteEntry<V>,
    ) -> Option<RouteEntry<V>> {
        self.routes.insert(template.into(), entry)
    }

    pub fn get(&self, template: &str) -> Option<&RouteEntry<V>> {
        self.routes.get(template)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry<V>)> {
        self.routes.iter().map(|(template, entry)| (template.as_str(), entry))
    }

    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Bind configured routes to loaders from `catalog`.
    pub fn from_config(
        routes: &[RouteConfig],
        catalog: &impl ViewCatalog<V>,
    ) -> Result<Self, DirectoryError> {
        let mut table = Self::new();
        for route in routes {
            let view = catalog
                .loader(&route.component, route.strategy)
                .ok_or_else(|| DirectoryError::UnknownComponent {
                    template: route.path.clone(),
                    component: route.component.clone(),
                })?;

            table.insert(
                route.path.clone(),
                RouteEntry {
                    view,
                    dependencies: route.models.clone(),
                    authority: route.authority.clone(),
                    name: route.name.clone(),
                    hide_in_breadcrumb: route.hide_in_breadcrumb,
                },
            );
        }
        Ok(table)
    }
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for RouteTable<V> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<V> fmt::Debug for RouteTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.routes.iter()).finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, RouteEntry<V>)> for RouteTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, RouteEntry<V>)>>(iter: I) -> Self {
        Self {
            routes: iter
                .into_iter()
                .map(|(template, entry)| (template.into(), entry))
                .collect(),
        }
    }
}

/// A route table row merged with the metadata of its menu entry.
pub struct DirectoryEntry<V> {
    pub view: ViewLoader<V>,
    pub dependencies: Vec<String>,
    pub name: Option<String>,
    pub authority: Option<Vec<String>>,
    pub hide_in_breadcrumb: Option<bool>,
    /// Compiled template, kept for pathname lookups.
    pub pattern: PathPattern,
}

impl<V> DirectoryEntry<V> {
    pub fn is_hidden_in_breadcrumb(&self) -> bool {
        self.hide_in_breadcrumb.unwrap_or(false)
    }
}

impl<V> Clone for DirectoryEntry<V> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            dependencies: self.dependencies.clone(),
            name: self.name.clone(),
            authority: self.authority.clone(),
            hide_in_breadcrumb: self.hide_in_breadcrumb,
            pattern: self.pattern.clone(),
        }
    }
}

impl<V> fmt::Debug for DirectoryEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryEntry")
            .field("view", &self.view)
            .field("dependencies", &self.dependencies)
            .field("name", &self.name)
            .field("authority", &self.authority)
            .field("hide_in_breadcrumb", &self.hide_in_breadcrumb)
            .field("template", &self.pattern.template())
            .finish()
    }
}
