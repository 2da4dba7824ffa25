//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every route template and menu key compiles
//! - Check referential integrity (routes reference known models)
//! - Detect duplicate route templates
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: NavigationConfig → Result<(), Vec<ValidationError>>
//! - Duplicate menu keys are legal (last declaration wins) and only warned about

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::NavigationConfig;
use crate::menu::{duplicate_keys, flatten_to_key_list};
use crate::resolver::{namespace_of, ModuleCatalog};
use crate::routing::{PathPattern, PatternError};

/// A semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route template is invalid: {0}")]
    InvalidRouteTemplate(PatternError),

    #[error("menu key is invalid: {0}")]
    InvalidMenuKey(PatternError),

    #[error("route `{0}` is declared more than once")]
    DuplicateRoute(String),

    #[error("route `{route}` depends on unknown model `{model}`")]
    UnknownModel { route: String, model: String },

    #[error("route `{0}` has no component")]
    MissingComponent(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &NavigationConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let catalog = ModuleCatalog::new(config.models.iter().cloned());
    let mut seen = HashSet::new();

    for route in &config.routes {
        if let Err(e) = PathPattern::compile(&route.path) {
            errors.push(ValidationError::InvalidRouteTemplate(e));
        }
        if !seen.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicateRoute(route.path.clone()));
        }
        if route.component.trim().is_empty() {
            errors.push(ValidationError::MissingComponent(route.path.clone()));
        }
        for model in &route.models {
            if !catalog.contains(model) {
                errors.push(ValidationError::UnknownModel {
                    route: route.path.clone(),
                    model: namespace_of(model).to_string(),
                });
            }
        }
    }

    let mut checked = HashSet::new();
    for key in flatten_to_key_list(&config.menu) {
        if !checked.insert(key.clone()) {
            continue;
        }
        if let Err(e) = PathPattern::compile(&key) {
            errors.push(ValidationError::InvalidMenuKey(e));
        }
    }
    for key in duplicate_keys(&config.menu) {
        tracing::warn!(key = %key, "Duplicate menu key, last declaration wins");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
