//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → NavigationConfig (validated, immutable)
//!     → menu tree + RouteTable::from_config + ModuleCatalog
//!     → NavigationContext
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route directory is built from it once
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LogFormat, NavigationConfig, ObservabilityConfig, RouteConfig};
pub use validation::{validate_config, ValidationError};
