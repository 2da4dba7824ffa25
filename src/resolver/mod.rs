//! Lazy resolution subsystem.
//!
//! # Data Flow
//! ```text
//! WrappedRoute::resolve()
//!     → registry.rs (register each missing dependency once)
//!     → context.rs (build route directory once, or reuse it)
//!     → view.rs
//!         Eager    → ViewState::Ready(view + directory)
//!         Deferred → ViewState::Loading(indicator) → fetch → Ready
//! ```
//!
//! # Design Decisions
//! - Callers see one shape for both loading strategies
//! - Directory build and dependency registration are write-once
//! - Any failure here is fatal for the route being resolved

pub mod context;
pub mod registry;
pub mod view;

use thiserror::Error;

use crate::directory::DirectoryError;

pub use context::{NavigationContext, WrappedRoute};
pub use registry::{
    namespace_of, DependencyGate, DependencyModule, DependencyRegistry, ModelRegistry,
    ModuleCatalog, ModuleSource, RegistryError,
};
pub use view::{
    LoadStrategy, LoadingIndicator, PendingView, ResolvedView, SpinSize, ViewCatalog, ViewFuture,
    ViewLoadError, ViewLoader, ViewState,
};

/// Errors that stop a route from rendering.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A dependency could not be registered.
    #[error(transparent)]
    Dependency(#[from] RegistryError),

    /// The route directory could not be built.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// A deferred view failed to load.
    #[error(transparent)]
    ViewLoad(#[from] ViewLoadError),
}
