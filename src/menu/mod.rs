//! Menu subsystem.
//!
//! # Data Flow
//! ```text
//! MenuSource (config / host application)
//!     → item.rs (MenuItem tree, icons classified at ingestion)
//!     → flatten.rs
//!         → FlatMenuMap   (path → item)   → directory builder
//!         → key list      (paths, ordered) → navigation resolver
//!     → visible.rs (drawable tree filtered by name, visibility, authority)
//! ```
//!
//! # Design Decisions
//! - The tree is a plain value; sources must return the same tree every call
//! - Flattening never drops nodes

pub mod flatten;
pub mod item;
pub mod source;
pub mod visible;

pub use flatten::{duplicate_keys, flatten_to_key_list, flatten_to_map, FlatMenuMap};
pub use item::{GlyphSet, Icon, MenuItem};
pub use source::{MenuSource, StaticMenu};
pub use visible::{visible_items, AllowAll, AuthorityCheck, MenuLink, NavKind, NavNode, RoleSet};
