//! Configuration schema definitions.
//!
//! This module defines the complete navigation configuration: the menu tree,
//! the route table, the dependency module catalog and presentation settings.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::menu::MenuItem;
use crate::resolver::{DependencyModule, LoadStrategy, LoadingIndicator};

/// Root navigation configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NavigationConfig {
    /// Menu tree, in display order.
    pub menu: Vec<MenuItem>,

    /// Route table, in declaration order.
    pub routes: Vec<RouteConfig>,

    /// Dependency modules available for registration.
    pub models: Vec<DependencyModule>,

    /// Indicator shown while a deferred view loads.
    pub loading: LoadingIndicator,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// One route template and the view bound to it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path template (e.g., "/projects/detail/:id").
    pub path: String,

    /// Component name resolved through the view catalog.
    pub component: String,

    #[serde(default)]
    pub strategy: LoadStrategy,

    /// Dependency modules registered before the view loads.
    #[serde(default)]
    pub models: Vec<String>,

    /// Overrides the authority of the matching menu item.
    #[serde(default)]
    pub authority: Option<Vec<String>>,

    /// Overrides the display name of the matching menu item.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub hide_in_breadcrumb: Option<bool>,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            component: component.into(),
            strategy: LoadStrategy::default(),
            models: Vec::new(),
            authority: None,
            name: None,
            hide_in_breadcrumb: None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when `RUST_LOG` is unset (e.g., "info", "route_directory=debug").
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::SpinSize;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: NavigationConfig = toml::from_str("").unwrap();
        assert!(config.menu.is_empty());
        assert!(config.routes.is_empty());
        assert_eq!(config.loading.size, SpinSize::Large);
        assert_eq!(config.loading.class_name, "global-spin");
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.log_format, LogFormat::Full);
    }

    #[test]
    fn test_route_defaults() {
        let config: NavigationConfig = toml::from_str(
            r#"
            [[routes]]
            path = "/user/login"
            component = "Login"
            "#,
        )
        .unwrap();
        let route = &config.routes[0];
        assert_eq!(route.strategy, LoadStrategy::Deferred);
        assert!(route.models.is_empty());
        assert_eq!(route.hide_in_breadcrumb, None);
    }

    #[test]
    fn test_full_config() {
        let config: NavigationConfig = toml::from_str(
            r#"
            [[menu]]
            path = "/projects"
            name = "projects"
            icon = "fa-folder"

            [[menu.children]]
            path = "/projects/detail/:id"
            name = "detail"
            hide_in_menu = true

            [[routes]]
            path = "/projects/detail/:id"
            component = "ProjectDetail"
            strategy = "eager"
            models = ["project"]
            hide_in_breadcrumb = false

            [[models]]
            namespace = "project"

            [loading]
            size = "small"
            class_name = "page-spin"

            [observability]
            log_level = "debug"
            log_format = "compact"
            "#,
        )
        .unwrap();

        assert_eq!(config.menu[0].key(), "/projects");
        let children = config.menu[0].children.as_ref().unwrap();
        assert!(children[0].is_hidden_in_menu());

        let route = &config.routes[0];
        assert_eq!(route.strategy, LoadStrategy::Eager);
        assert_eq!(route.models, vec!["project"]);
        assert_eq!(route.hide_in_breadcrumb, Some(false));

        assert_eq!(config.models[0].namespace, "project");
        assert_eq!(config.loading.size, SpinSize::Small);
        assert_eq!(config.observability.log_format, LogFormat::Compact);
    }
}
