//! Process-wide navigation state and lazily resolved routes.
//!
//! # Responsibilities
//! - Own the route table, menu source and dependency gate
//! - Build the route directory at most once, on first resolution of any route
//! - Resolve wrapped routes into `ViewState`s with the directory injected
//!
//! # Design Decisions
//! - One context per process in production, one per test case in tests;
//!   nothing lives in globals
//! - The directory cell is a `tokio::sync::OnceCell`: the first caller holds
//!   the in-flight build, concurrent callers await it without parking their
//!   worker thread and then share that same build
//! - Eager routes take the cell synchronously when it is free; while another
//!   resolution holds the build they come back `Loading` until it lands
//! - The outcome of the single build is memoized, including a fatal error
//! - View fetch failures are not cached and leave the directory untouched

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use futures_util::FutureExt;
use tokio::sync::OnceCell;

use crate::directory::{build_directory, DirectoryError, RouteDirectory, RouteTable};
use crate::menu::MenuSource;
use crate::observability::metrics;
use crate::resolver::registry::{DependencyGate, DependencyRegistry, ModuleSource};
use crate::resolver::view::{
    LoadStrategy, LoadingIndicator, PendingView, ResolvedView, ViewLoader, ViewState,
};
use crate::resolver::ResolveError;

/// Shared state behind every wrapped route.
pub struct NavigationContext<V> {
    routes: RouteTable<V>,
    menu: Arc<dyn MenuSource>,
    gate: DependencyGate,
    indicator: LoadingIndicator,
    directory: OnceCell<Result<Arc<RouteDirectory<V>>, DirectoryError>>,
    builds: AtomicUsize,
}

impl<V: Send + 'static> NavigationContext<V> {
    pub fn new(
        routes: RouteTable<V>,
        menu: Arc<dyn MenuSource>,
        registry: Arc<dyn DependencyRegistry>,
        modules: Arc<dyn ModuleSource>,
    ) -> Self {
        Self {
            routes,
            menu,
            gate: DependencyGate::new(registry, modules),
            indicator: LoadingIndicator::default(),
            directory: OnceCell::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Replace the placeholder shown while deferred views load.
    pub fn with_loading_indicator(mut self, indicator: LoadingIndicator) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn routes(&self) -> &RouteTable<V> {
        &self.routes
    }

    /// The route directory, built on first call and shared afterwards.
    ///
    /// Callers arriving while the build is in flight wait for it instead of
    /// starting their own.
    pub async fn directory(&self) -> Result<Arc<RouteDirectory<V>>, DirectoryError> {
        self.directory
            .get_or_init(|| async { self.build() })
            .await
            .clone()
    }

    fn build(&self) -> Result<Arc<RouteDirectory<V>>, DirectoryError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        let started = Instant::now();
        let menu = self.menu.menu_data();
        let result = build_directory(&self.routes, &menu).map(Arc::new);

        match &result {
            Ok(directory) => tracing::info!(
                entries = directory.len(),
                elapsed_us = started.elapsed().as_micros() as u64,
                "Route directory built"
            ),
            Err(e) => tracing::error!(error = %e, "Route directory build failed"),
        }
        metrics::record_directory_build(
            result.as_ref().map(|d| d.len()).ok(),
            started.elapsed(),
        );
        result
    }

    /// The directory if it has been built successfully.
    pub fn cached_directory(&self) -> Option<Arc<RouteDirectory<V>>> {
        self.directory.get().and_then(|result| result.as_ref().ok().cloned())
    }

    /// How many times the directory has been built (never more than one).
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    /// Wrap a view with its dependencies.
    pub fn wrap(
        self: &Arc<Self>,
        dependencies: Vec<String>,
        loader: ViewLoader<V>,
    ) -> WrappedRoute<V> {
        WrappedRoute {
            context: Arc::clone(self),
            dependencies,
            loader,
            dependencies_ready: AtomicBool::new(false),
        }
    }

    /// Wrap the route declared under `template`.
    pub fn route(self: &Arc<Self>, template: &str) -> Option<WrappedRoute<V>> {
        let entry = self.routes.get(template)?;
        Some(self.wrap(entry.dependencies.clone(), entry.view.clone()))
    }
}

/// A route view wrapped with dependency registration and directory injection.
pub struct WrappedRoute<V> {
    context: Arc<NavigationContext<V>>,
    dependencies: Vec<String>,
    loader: ViewLoader<V>,
    dependencies_ready: AtomicBool,
}

impl<V: Send + 'static> WrappedRoute<V> {
    pub fn strategy(&self) -> LoadStrategy {
        self.loader.strategy()
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Resolve the view.
    ///
    /// Eager views come back `Ready`, unless another resolution is still
    /// building the directory. Deferred views come back `Loading`; the
    /// directory is built or reused when the pending view is first polled.
    pub fn resolve(&self) -> Result<ViewState<V>, ResolveError> {
        self.ensure_dependencies()?;

        match &self.loader {
            ViewLoader::Eager(factory) => match self.context.directory().now_or_never() {
                Some(directory) => {
                    let directory = directory?;
                    metrics::record_view_load(LoadStrategy::Eager, true);
                    Ok(ViewState::Ready(ResolvedView {
                        view: factory(),
                        directory,
                    }))
                }
                None => {
                    // Another resolution holds the in-flight build.
                    let context = Arc::clone(&self.context);
                    let factory = Arc::clone(factory);
                    let future = async move {
                        let directory = context.directory().await?;
                        metrics::record_view_load(LoadStrategy::Eager, true);
                        Ok::<_, ResolveError>(ResolvedView {
                            view: factory(),
                            directory,
                        })
                    }
                    .boxed();
                    Ok(ViewState::Loading(PendingView::new(
                        self.context.indicator.clone(),
                        future,
                    )))
                }
            },
            ViewLoader::Deferred(fetch) => {
                let context = Arc::clone(&self.context);
                let fetch = Arc::clone(fetch);
                let future = async move {
                    let directory = context.directory().await?;
                    match fetch().await {
                        Ok(view) => {
                            metrics::record_view_load(LoadStrategy::Deferred, true);
                            Ok(ResolvedView { view, directory })
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Deferred view failed to load");
                            metrics::record_view_load(LoadStrategy::Deferred, false);
                            Err(ResolveError::ViewLoad(e))
                        }
                    }
                }
                .boxed();
                Ok(ViewState::Loading(PendingView::new(
                    self.context.indicator.clone(),
                    future,
                )))
            }
        }
    }

    /// Resolve and wait until the view is render-ready.
    pub async fn load(&self) -> Result<ResolvedView<V>, ResolveError> {
        self.resolve()?.settle().await
    }

    fn ensure_dependencies(&self) -> Result<(), ResolveError> {
        if self.dependencies_ready.load(Ordering::Acquire) {
            return Ok(());
        }
        self.context.gate.ensure(&self.dependencies)?;
        self.dependencies_ready.store(true, Ordering::Release);
        Ok(())
    }
}
