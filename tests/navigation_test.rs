//! Open/selected key resolution and menu widget state.

use std::sync::Arc;

use route_directory::menu::{visible_items, MenuLink, NavKind, RoleSet};
use route_directory::navigation::match_keys;
use route_directory::{MenuState, NavigationResolver};

mod common;
use common::app_menu;

fn keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_selection_falls_back_to_deepest_open_key() {
    let resolver = NavigationResolver::new(keys(&["/list", "/list/:id"])).unwrap();

    assert_eq!(
        match_keys(&keys(&["/list", "/list/:id"]), &["/list", "/list/42"]).unwrap(),
        keys(&["/list", "/list/:id"])
    );

    let state = resolver.resolve("/list/42/extra");
    assert_eq!(state.open_keys, keys(&["/list", "/list/:id"]));
    assert_eq!(state.selected_keys, keys(&["/list/:id"]));
}

#[test]
fn test_app_menu_resolution() {
    let resolver = NavigationResolver::from_menu(&app_menu()).unwrap();

    let state = resolver.resolve("/projects/list/status/open");
    assert_eq!(
        state.open_keys,
        keys(&["/projects", "/projects/list/:filterkey/:filtervalue"])
    );
    assert_eq!(
        state.selected_keys,
        keys(&["/projects/list/:filterkey/:filtervalue"])
    );

    let state = resolver.resolve("/");
    assert!(state.open_keys.is_empty());
    assert!(state.selected_keys.is_empty());
}

#[test]
fn test_menu_state_lifecycle() {
    let resolver = Arc::new(NavigationResolver::from_menu(&app_menu()).unwrap());
    let mut menu = MenuState::new(resolver, "/projects/detail/3");
    assert_eq!(menu.open_keys(), &keys(&["/projects", "/projects/detail/:id"])[..]);

    // The user closes every submenu; a re-render on the same path keeps that.
    menu.set_open_keys(Vec::new());
    assert!(!menu.on_path_change("/projects/detail/3"));
    assert!(menu.open_keys().is_empty());

    menu.set_collapsed(true);
    assert!(menu.on_path_change("/wallet"));
    let props = menu.props();
    assert_eq!(props.open_keys, None);
    assert_eq!(props.selected_keys, keys(&["/wallet"]));

    menu.set_collapsed(false);
    assert_eq!(menu.props().open_keys, Some(keys(&["/wallet"])));
}

#[test]
fn test_visible_tree_for_role() {
    let menu = app_menu();

    let guest = visible_items(&menu, &RoleSet::new(["guest"]));
    assert_eq!(
        guest.iter().map(|node| node.key.as_str()).collect::<Vec<_>>(),
        vec!["/wallet"]
    );
    assert_eq!(
        guest[0].kind,
        NavKind::Item {
            link: MenuLink::Internal("/wallet".to_string()),
            target: None,
        }
    );

    let investor = visible_items(&menu, &RoleSet::new(["investor"]));
    let NavKind::Submenu { children } = &investor[0].kind else {
        panic!("projects should render as a submenu");
    };
    // Hidden children are dropped from the drawn tree.
    assert_eq!(
        children.iter().map(|node| node.key.as_str()).collect::<Vec<_>>(),
        vec!["/projects/list/:filterkey/:filtervalue"]
    );
}
