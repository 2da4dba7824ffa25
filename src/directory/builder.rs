//! Route directory construction.
//!
//! # Algorithm
//! ```text
//! menu tree → flatten_to_map → menu map (path → item, declaration order)
//! for (template, entry) in route table (declaration order):
//!     compile template
//!     matched = first menu key the template accepts (or nothing)
//!     name / authority / hide_in_breadcrumb = entry value, else matched value
//! ```
//!
//! # Design Decisions
//! - Only an absent value falls back; an explicit `false` is kept
//! - Ties between menu keys go to the first key in menu order
//! - One bad template fails the whole build; no partial directory exists

use indexmap::IndexMap;

use crate::directory::entry::{DirectoryEntry, RouteTable};
use crate::directory::{DirectoryError, RouteDirectory};
use crate::menu::{flatten_to_map, MenuItem};
use crate::routing::PathPattern;

/// Merge a route table with a menu tree into a route directory.
pub fn build_directory<V>(
    routes: &RouteTable<V>,
    menu: &[MenuItem],
) -> Result<RouteDirectory<V>, DirectoryError> {
    let menu_map = flatten_to_map(menu);
    let mut entries = IndexMap::new();

    for (template, entry) in routes.iter() {
        let pattern =
            PathPattern::compile(template).map_err(|source| DirectoryError::InvalidTemplate {
                template: template.to_string(),
                source,
            })?;

        let matched = menu_map.iter().find(|(key, _)| pattern.test(key));
        let (name, authority, hide_in_breadcrumb) = match matched {
            Some((key, item)) => {
                tracing::debug!(route = %template, menu_key = %key, "Route matched menu entry");
                (
                    entry.name.clone().or_else(|| item.name.clone()),
                    entry.authority.clone().or_else(|| item.authority.clone()),
                    entry.hide_in_breadcrumb.or(item.hide_in_breadcrumb),
                )
            }
            None => {
                tracing::debug!(route = %template, "Route has no menu entry");
                (
                    entry.name.clone(),
                    entry.authority.clone(),
                    entry.hide_in_breadcrumb,
                )
            }
        };

        entries.insert(
            template.to_string(),
            DirectoryEntry {
                view: entry.view.clone(),
                dependencies: entry.dependencies.clone(),
                name,
                authority,
                hide_in_breadcrumb,
                pattern,
            },
        );
    }

    Ok(RouteDirectory::from_entries(entries))
}
