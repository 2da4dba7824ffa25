//! Navigation state subsystem.
//!
//! # Data Flow
//! ```text
//! menu tree → flatten_to_key_list → NavigationResolver (keys precompiled)
//!
//! pathname change
//!     → url_to_list(pathname) → open keys
//!     → [pathname]            → selected keys (fallback: last open key)
//!     → state.rs (MenuState) → MenuProps for the widget
//! ```
//!
//! # Design Decisions
//! - Derived purely from pathname + key list; nothing is persisted
//! - Collapse hides open keys from the widget without discarding them

pub mod resolver;
pub mod state;

pub use resolver::{match_keys, NavigationResolver, NavigationState};
pub use state::{MenuProps, MenuState};
