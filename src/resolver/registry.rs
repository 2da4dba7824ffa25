//! Dependency gate: one-time registration of named data dependencies.
//!
//! # Responsibilities
//! - Map dependency names (`user`, `models/user`) to registry namespaces
//! - Load missing modules from a `ModuleSource` and register them once
//! - Fail the route when a dependency has no module
//!
//! # Design Decisions
//! - The namespace is the final path segment of the dependency name
//! - Registering an already-registered namespace is a no-op, not an error
//! - Entries are never removed

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::metrics;

/// A data dependency (model) that views read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyModule {
    /// Registry key.
    pub namespace: String,
    /// Initial state handed to the model runtime.
    #[serde(default)]
    pub state: serde_json::Value,
}

impl DependencyModule {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            state: serde_json::Value::Null,
        }
    }
}

/// Errors raised while registering dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No module could be loaded for the dependency.
    #[error("dependency `{name}` has no module to load")]
    MissingModule { name: String },
}

/// Process-wide registry of data dependencies.
pub trait DependencyRegistry: Send + Sync {
    fn is_registered(&self, namespace: &str) -> bool;
    fn register(&self, module: DependencyModule);
}

/// Loads a dependency module by name.
pub trait ModuleSource: Send + Sync {
    fn load(&self, name: &str) -> Option<DependencyModule>;
}

/// Registry key for a dependency name: everything after the last `/`.
pub fn namespace_of(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// In-memory registry backed by a concurrent map.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: DashMap<String, DependencyModule>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, namespace: &str) -> Option<DependencyModule> {
        self.models.get(namespace).map(|r| r.value().clone())
    }

    /// Registered namespaces, sorted.
    pub fn namespaces(&self) -> Vec<String> {
        let mut namespaces: Vec<String> = self.models.iter().map(|r| r.key().clone()).collect();
        namespaces.sort();
        namespaces
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl DependencyRegistry for ModelRegistry {
    fn is_registered(&self, namespace: &str) -> bool {
        self.models.contains_key(namespace)
    }

    fn register(&self, module: DependencyModule) {
        self.models.entry(module.namespace.clone()).or_insert(module);
    }
}

/// Modules available for loading, keyed by namespace.
#[derive(Debug, Clone, Default)]
pub struct ModuleCatalog {
    modules: HashMap<String, DependencyModule>,
}

impl ModuleCatalog {
    pub fn new(modules: impl IntoIterator<Item = DependencyModule>) -> Self {
        Self {
            modules: modules
                .into_iter()
                .map(|module| (module.namespace.clone(), module))
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name) || self.modules.contains_key(namespace_of(name))
    }
}

impl ModuleSource for ModuleCatalog {
    fn load(&self, name: &str) -> Option<DependencyModule> {
        self.modules
            .get(name)
            .or_else(|| self.modules.get(namespace_of(name)))
            .cloned()
    }
}

/// Registers each named dependency at most once.
#[derive(Clone)]
pub struct DependencyGate {
    registry: Arc<dyn DependencyRegistry>,
    modules: Arc<dyn ModuleSource>,
}

impl DependencyGate {
    pub fn new(registry: Arc<dyn DependencyRegistry>, modules: Arc<dyn ModuleSource>) -> Self {
        Self { registry, modules }
    }

    /// Register every dependency in `names` that is not registered yet.
    ///
    /// Returns how many modules were newly registered. Stops at the first
    /// dependency without a module; earlier registrations stay in place.
    pub fn ensure(&self, names: &[String]) -> Result<usize, RegistryError> {
        let mut registered = 0;
        for name in names {
            let namespace = namespace_of(name);
            if self.registry.is_registered(namespace) {
                continue;
            }

            let module = self.modules.load(name).ok_or_else(|| {
                tracing::error!(dependency = %name, "No module found for dependency");
                RegistryError::MissingModule { name: name.clone() }
            })?;

            tracing::debug!(
                dependency = %name,
                namespace = %module.namespace,
                "Registering dependency"
            );
            metrics::record_dependency_registration(&module.namespace);
            self.registry.register(module);
            registered += 1;
        }
        Ok(registered)
    }
}
