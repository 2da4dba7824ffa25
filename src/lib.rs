//! Route directory and navigation state for a menu-driven application shell.
//!
//! # Architecture Overview
//!
//! ```text
//!   navigation.toml ──▶ config ──┬──▶ menu tree ──▶ menu::flatten ──┐
//!                                │                                  ▼
//!                                └──▶ route table ──────▶ directory::build_directory
//!                                                                   │ (once, lazily)
//!   route render ──▶ resolver::WrappedRoute ──▶ dependency gate ────┤
//!                                                                   ▼
//!                                            view + Arc<RouteDirectory>
//!
//!   pathname ──▶ navigation::NavigationResolver ──▶ open / selected keys
//!                                   │
//!                                   └──▶ navigation::MenuState ──▶ MenuProps
//!
//!   routing (path templates, ordered maps) and observability are shared by all
//! ```

pub mod config;
pub mod directory;
pub mod menu;
pub mod navigation;
pub mod observability;
pub mod resolver;
pub mod routing;

pub use config::NavigationConfig;
pub use directory::{build_directory, RouteDirectory, RouteEntry, RouteTable};
pub use menu::{flatten_to_key_list, flatten_to_map, MenuItem};
pub use navigation::{MenuState, NavigationResolver, NavigationState};
pub use resolver::{NavigationContext, ViewLoader, ViewState, WrappedRoute};
