//! View loading strategies and resolution states.
//!
//! # Responsibilities
//! - Represent a route's view as an eager factory or a deferred fetch
//! - Present both through one state type (`Ready` / `Loading`)
//! - Carry the loading indicator shown while a deferred fetch is pending

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directory::RouteDirectory;
use crate::resolver::ResolveError;

/// Boxed fetch of a deferred view.
pub type ViewFuture<V> = BoxFuture<'static, Result<V, ViewLoadError>>;

/// A deferred view could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("view failed to load: {0}")]
pub struct ViewLoadError(pub String);

impl ViewLoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// How a view is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStrategy {
    /// Available immediately.
    Eager,
    /// Fetched asynchronously on first resolution.
    #[default]
    Deferred,
}

impl LoadStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStrategy::Eager => "eager",
            LoadStrategy::Deferred => "deferred",
        }
    }
}

/// Reference to a loadable view.
pub enum ViewLoader<V> {
    Eager(Arc<dyn Fn() -> V + Send + Sync>),
    Deferred(Arc<dyn Fn() -> ViewFuture<V> + Send + Sync>),
}

impl<V> ViewLoader<V> {
    /// Wrap a synchronous view factory.
    pub fn eager<F>(factory: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        ViewLoader::Eager(Arc::new(factory))
    }

    /// Wrap an asynchronous view fetch.
    pub fn deferred<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, ViewLoadError>> + Send + 'static,
    {
        ViewLoader::Deferred(Arc::new(move || fetch().boxed()))
    }

    pub fn strategy(&self) -> LoadStrategy {
        match self {
            ViewLoader::Eager(_) => LoadStrategy::Eager,
            ViewLoader::Deferred(_) => LoadStrategy::Deferred,
        }
    }
}

impl<V> Clone for ViewLoader<V> {
    fn clone(&self) -> Self {
        match self {
            ViewLoader::Eager(factory) => ViewLoader::Eager(Arc::clone(factory)),
            ViewLoader::Deferred(fetch) => ViewLoader::Deferred(Arc::clone(fetch)),
        }
    }
}

impl<V> fmt::Debug for ViewLoader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewLoader::{:?}", self.strategy())
    }
}

/// Maps component names from configuration to loaders.
pub trait ViewCatalog<V> {
    fn loader(&self, component: &str, strategy: LoadStrategy) -> Option<ViewLoader<V>>;
}

/// Spinner size for the loading indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinSize {
    Small,
    Default,
    #[default]
    Large,
}

/// Placeholder rendered while a deferred view is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingIndicator {
    pub size: SpinSize,
    pub class_name: String,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self {
            size: SpinSize::Large,
            class_name: "global-spin".to_string(),
        }
    }
}

/// A render-ready view with the route directory injected.
pub struct ResolvedView<V> {
    pub view: V,
    pub directory: Arc<RouteDirectory<V>>,
}

impl<V: fmt::Debug> fmt::Debug for ResolvedView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedView")
            .field("view", &self.view)
            .field("directory_entries", &self.directory.len())
            .finish()
    }
}

/// A deferred view that has not settled yet.
///
/// Awaiting it drives the fetch to completion. There is no timeout.
pub struct PendingView<V> {
    indicator: LoadingIndicator,
    future: BoxFuture<'static, Result<ResolvedView<V>, ResolveError>>,
}

impl<V> PendingView<V> {
    pub(crate) fn new(
        indicator: LoadingIndicator,
        future: BoxFuture<'static, Result<ResolvedView<V>, ResolveError>>,
    ) -> Self {
        Self { indicator, future }
    }

    /// What to show until the view settles.
    pub fn indicator(&self) -> &LoadingIndicator {
        &self.indicator
    }
}

impl<V> Future for PendingView<V> {
    type Output = Result<ResolvedView<V>, ResolveError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.as_mut().poll(cx)
    }
}

impl<V> fmt::Debug for PendingView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingView")
            .field("indicator", &self.indicator)
            .finish_non_exhaustive()
    }
}

/// Result of resolving a route, identical in shape for both strategies.
#[derive(Debug)]
pub enum ViewState<V> {
    Ready(ResolvedView<V>),
    Loading(PendingView<V>),
}

impl<V> ViewState<V> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    /// The placeholder to render, if the view is still loading.
    pub fn indicator(&self) -> Option<&LoadingIndicator> {
        match self {
            ViewState::Ready(_) => None,
            ViewState::Loading(pending) => Some(pending.indicator()),
        }
    }

    /// Wait for a render-ready view, whichever strategy produced this state.
    pub async fn settle(self) -> Result<ResolvedView<V>, ResolveError> {
        match self {
            ViewState::Ready(view) => Ok(view),
            ViewState::Loading(pending) => pending.await,
        }
    }
}
