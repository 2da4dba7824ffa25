//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use route_directory::menu::{MenuItem, MenuSource};
use route_directory::resolver::{
    DependencyModule, ModelRegistry, ModuleCatalog, NavigationContext, ViewLoader,
};
use route_directory::{RouteEntry, RouteTable};

/// Menu source that counts how often it is read, optionally slowly.
pub struct CountingMenu {
    items: Vec<MenuItem>,
    delay: Option<Duration>,
    reads: AtomicUsize,
}

impl CountingMenu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            delay: None,
            reads: AtomicUsize::new(0),
        }
    }

    /// Block each read for `delay` to widen race windows.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl MenuSource for CountingMenu {
    fn menu_data(&self) -> Vec<MenuItem> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.items.clone()
    }
}

/// `[{ /user "User" [{ /user/login "Login" }] }]`
pub fn user_menu() -> Vec<MenuItem> {
    vec![MenuItem::new("/user")
        .with_name("User")
        .with_children(vec![MenuItem::new("/user/login").with_name("Login")])]
}

/// A menu resembling a full application shell.
pub fn app_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("/projects")
            .with_name("projects")
            .with_authority(["investor", "admin"])
            .with_children(vec![
                MenuItem::new("/projects/list/:filterkey/:filtervalue").with_name("explorer"),
                MenuItem::new("/projects/detail/:id")
                    .with_name("detail")
                    .with_hide_in_menu(true),
            ]),
        MenuItem::new("/wallet").with_name("wallet"),
        MenuItem::new("/user")
            .with_name("account")
            .with_hide_in_menu(true)
            .with_children(vec![
                MenuItem::new("/user/login").with_name("login"),
                MenuItem::new("/user/register-result")
                    .with_name("register-result")
                    .with_hide_in_breadcrumb(true),
            ]),
    ]
}

/// Deferred view that yields once before producing `view`.
pub fn deferred(view: &'static str) -> ViewLoader<&'static str> {
    ViewLoader::deferred(move || async move {
        tokio::task::yield_now().await;
        Ok(view)
    })
}

pub fn eager(view: &'static str) -> ViewLoader<&'static str> {
    ViewLoader::eager(move || view)
}

/// Routes for [`app_menu`], every view deferred.
pub fn app_routes() -> RouteTable<&'static str> {
    RouteTable::new()
        .with_route("/projects", RouteEntry::new(deferred("projects")).with_dependencies(["user"]))
        .with_route(
            "/projects/list/:filterkey/:filtervalue",
            RouteEntry::new(deferred("explorer")).with_dependencies(["project"]),
        )
        .with_route(
            "/projects/detail/:id",
            RouteEntry::new(deferred("detail")).with_dependencies(["models/project", "owner"]),
        )
        .with_route("/wallet", RouteEntry::new(deferred("wallet")).with_dependencies(["wallet"]))
        .with_route("/user/login", RouteEntry::new(eager("login")).with_dependencies(["user"]))
        .with_route("/user/register-result", RouteEntry::new(eager("register-result")))
}

pub fn catalog() -> ModuleCatalog {
    ModuleCatalog::new(
        ["user", "project", "owner", "wallet"]
            .into_iter()
            .map(DependencyModule::new),
    )
}

/// A context over `routes` and `menu` with a fresh registry.
pub fn context(
    routes: RouteTable<&'static str>,
    menu: Arc<CountingMenu>,
) -> (Arc<NavigationContext<&'static str>>, Arc<ModelRegistry>) {
    let registry = Arc::new(ModelRegistry::new());
    let context = NavigationContext::new(routes, menu, registry.clone(), Arc::new(catalog()));
    (Arc::new(context), registry)
}
