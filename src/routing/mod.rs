//! Routing primitives.
//!
//! # Data Flow
//! ```text
//! Path template ("/projects/detail/:id")
//!     → matcher.rs (tokenize, compile to anchored expression)
//!     → PathPattern::test(concrete path) → bool
//!
//! Current pathname ("/projects/detail/7")
//!     → breadcrumb.rs (cumulative prefixes: /projects, /projects/detail, ...)
//!     → candidates for menu key matching
//! ```
//!
//! # Design Decisions
//! - Templates are compiled once per use site, never per comparison
//! - Deterministic: iteration over path maps follows declaration order
//! - First match wins

pub mod breadcrumb;
pub mod matcher;

pub use breadcrumb::{is_external, normalize_link, url_to_list};
pub use matcher::{ParamName, PathPattern, PatternError};
