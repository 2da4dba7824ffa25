//! Route directory construction over realistic menus.

use route_directory::menu::{flatten_to_key_list, flatten_to_map, MenuItem};
use route_directory::{build_directory, RouteEntry, RouteTable};

mod common;
use common::{app_menu, app_routes, eager, user_menu};

#[test]
fn test_flatten_is_idempotent() {
    let menu = app_menu();
    assert_eq!(flatten_to_map(&menu), flatten_to_map(&menu));
    assert_eq!(flatten_to_key_list(&menu), flatten_to_key_list(&menu));
}

#[test]
fn test_flatten_preserves_order() {
    let menu = vec![
        MenuItem::new("/a"),
        MenuItem::new("/b").with_children(vec![MenuItem::new("/b/c")]),
    ];
    assert_eq!(flatten_to_key_list(&menu), vec!["/a", "/b", "/b/c"]);
    assert_eq!(
        flatten_to_map(&menu).keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["/a", "/b", "/b/c"]
    );
}

#[test]
fn test_user_scenario() {
    let routes = RouteTable::new()
        .with_route("/user", RouteEntry::new(eager("user")))
        .with_route("/user/login", RouteEntry::new(eager("login")));

    let directory = build_directory(&routes, &user_menu()).unwrap();
    assert_eq!(directory.get("/user").unwrap().name.as_deref(), Some("User"));
    assert_eq!(directory.get("/user/login").unwrap().name.as_deref(), Some("Login"));
}

#[test]
fn test_authority_falls_back_to_menu() {
    let routes = RouteTable::new().with_route("/x", RouteEntry::new(eager("x")));
    let menu = vec![MenuItem::new("/x").with_authority(["admin"])];

    let directory = build_directory(&routes, &menu).unwrap();
    assert_eq!(
        directory.get("/x").unwrap().authority,
        Some(vec!["admin".to_string()])
    );
}

#[test]
fn test_explicit_false_is_not_overridden() {
    let routes = RouteTable::new().with_route(
        "/x",
        RouteEntry::new(eager("x")).with_hide_in_breadcrumb(false),
    );
    let menu = vec![MenuItem::new("/x").with_hide_in_breadcrumb(true)];

    let directory = build_directory(&routes, &menu).unwrap();
    let entry = directory.get("/x").unwrap();
    assert_eq!(entry.hide_in_breadcrumb, Some(false));
    assert!(!entry.is_hidden_in_breadcrumb());
}

#[test]
fn test_first_menu_key_wins_every_run() {
    let routes = RouteTable::new().with_route("/items/:id", RouteEntry::new(eager("item")));
    let menu = vec![
        MenuItem::new("/items/:id").with_name("first"),
        MenuItem::new("/items/new").with_name("second"),
    ];

    for _ in 0..20 {
        let directory = build_directory(&routes, &menu).unwrap();
        assert_eq!(
            directory.get("/items/:id").unwrap().name.as_deref(),
            Some("first")
        );
    }
}

#[test]
fn test_duplicate_menu_path_keeps_last_declaration() {
    let routes = RouteTable::new().with_route("/dup", RouteEntry::new(eager("dup")));
    let menu = vec![
        MenuItem::new("/dup").with_name("first"),
        MenuItem::new("/dup").with_name("second"),
    ];

    let directory = build_directory(&routes, &menu).unwrap();
    assert_eq!(directory.get("/dup").unwrap().name.as_deref(), Some("second"));
}

#[test]
fn test_app_directory() {
    let directory = build_directory(&app_routes(), &app_menu()).unwrap();

    assert_eq!(
        directory.templates().collect::<Vec<_>>(),
        vec![
            "/projects",
            "/projects/list/:filterkey/:filtervalue",
            "/projects/detail/:id",
            "/wallet",
            "/user/login",
            "/user/register-result",
        ]
    );

    let explorer = directory.get("/projects/list/:filterkey/:filtervalue").unwrap();
    assert_eq!(explorer.name.as_deref(), Some("explorer"));
    // Authority is not inherited from the parent menu item.
    assert_eq!(explorer.authority, None);
    assert_eq!(explorer.dependencies, vec!["project"]);
}

#[test]
fn test_pathname_lookup_and_breadcrumbs() {
    let directory = build_directory(&app_routes(), &app_menu()).unwrap();

    let (template, entry) = directory.lookup("/projects/detail/7").unwrap();
    assert_eq!(template, "/projects/detail/:id");
    assert_eq!(entry.name.as_deref(), Some("detail"));
    assert!(directory.lookup("/nowhere").is_none());

    let trail: Vec<_> = directory
        .breadcrumbs("/projects/detail/7")
        .into_iter()
        .map(|crumb| (crumb.path, crumb.name))
        .collect();
    assert_eq!(
        trail,
        vec![
            ("/projects".to_string(), "projects".to_string()),
            ("/projects/detail/7".to_string(), "detail".to_string()),
        ]
    );

    // Hidden entries and prefixes without a route are left out.
    assert!(directory.breadcrumbs("/user/register-result").is_empty());
}

#[test]
fn test_malformed_template_fails_whole_build() {
    let routes = app_routes().with_route("/broken/:id([)", RouteEntry::new(eager("broken")));
    assert!(build_directory(&routes, &app_menu()).is_err());
}
