//! Menu data sources.

use crate::menu::item::MenuItem;

/// Produces the root menu sequence.
///
/// Implementations must be deterministic: every call returns the same tree.
pub trait MenuSource: Send + Sync {
    fn menu_data(&self) -> Vec<MenuItem>;
}

/// A menu tree held in memory (typically loaded from configuration).
#[derive(Debug, Clone, Default)]
pub struct StaticMenu(pub Vec<MenuItem>);

impl MenuSource for StaticMenu {
    fn menu_data(&self) -> Vec<MenuItem> {
        self.0.clone()
    }
}

impl<F> MenuSource for F
where
    F: Fn() -> Vec<MenuItem> + Send + Sync,
{
    fn menu_data(&self) -> Vec<MenuItem> {
        self()
    }
}
