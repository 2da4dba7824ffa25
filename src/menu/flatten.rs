//! Menu tree flattening.
//!
//! # Responsibilities
//! - Index every node of a menu tree by its path (`flatten_to_map`)
//! - List every node's path in traversal order (`flatten_to_key_list`)
//!
//! # Design Decisions
//! - Pre-order, depth-first, left-to-right; a parent precedes its children
//! - Hidden nodes are flattened like any other; hiding is a rendering concern
//! - Duplicate paths: the map keeps the first position and the last value,
//!   the key list keeps every occurrence

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::menu::item::MenuItem;

/// Path-indexed copies of every menu node.
pub type FlatMenuMap = IndexMap<String, MenuItem>;

/// Flatten a menu tree into a path-indexed map of node copies.
pub fn flatten_to_map(menus: &[MenuItem]) -> FlatMenuMap {
    let mut map = IndexMap::new();
    collect_items(menus, &mut map);
    map
}

fn collect_items(menus: &[MenuItem], map: &mut FlatMenuMap) {
    for item in menus {
        map.insert(item.key().to_string(), item.clone());
        if let Some(children) = &item.children {
            collect_items(children, map);
        }
    }
}

/// Flatten a menu tree into its path keys, duplicates included.
pub fn flatten_to_key_list(menus: &[MenuItem]) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(menus, &mut keys);
    keys
}

fn collect_keys(menus: &[MenuItem], keys: &mut Vec<String>) {
    for item in menus {
        keys.push(item.key().to_string());
        if let Some(children) = &item.children {
            collect_keys(children, keys);
        }
    }
}

/// Paths that occur more than once in the tree, in order of second sighting.
pub fn duplicate_keys(menus: &[MenuItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for key in flatten_to_key_list(menus) {
        if !seen.insert(key.clone()) && !duplicates.contains(&key) {
            duplicates.push(key);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<MenuItem> {
        vec![
            MenuItem::new("/a").with_name("A"),
            MenuItem::new("/b")
                .with_name("B")
                .with_children(vec![MenuItem::new("/b/c").with_name("C").with_hide_in_menu(true)]),
        ]
    }

    #[test]
    fn test_key_list_order() {
        assert_eq!(flatten_to_key_list(&tree()), vec!["/a", "/b", "/b/c"]);
    }

    #[test]
    fn test_map_contains_every_node() {
        let map = flatten_to_map(&tree());
        assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), vec!["/a", "/b", "/b/c"]);
        assert_eq!(map.get("/b/c").unwrap().name.as_deref(), Some("C"));
        // Group nodes keep their children in the copy.
        assert_eq!(map.get("/b").unwrap().children.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let menus = tree();
        assert_eq!(flatten_to_map(&menus), flatten_to_map(&menus));
    }

    #[test]
    fn test_duplicates_overwrite_in_map_and_repeat_in_list() {
        let menus = vec![
            MenuItem::new("/x").with_name("First"),
            MenuItem::new("/y").with_children(vec![MenuItem::new("/x").with_name("Second")]),
        ];

        let map = flatten_to_map(&menus);
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), vec!["/x", "/y"]);
        assert_eq!(map.get("/x").unwrap().name.as_deref(), Some("Second"));

        assert_eq!(flatten_to_key_list(&menus), vec!["/x", "/y", "/x"]);
        assert_eq!(duplicate_keys(&menus), vec!["/x"]);
    }

    #[test]
    fn test_missing_path_uses_empty_key() {
        let menus = vec![MenuItem::default().with_name("Orphan")];
        assert!(flatten_to_map(&menus).contains_key(""));
        assert_eq!(flatten_to_key_list(&menus), vec![""]);
    }
}
