//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, directory, resolver, navigation produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges, histograms via the metrics facade)
//!
//! Consumers:
//!     → fmt subscriber on stdout (binary)
//!     → whatever recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted messages
//! - Metrics are cheap (atomic increments) and no-ops without a recorder

pub mod logging;
pub mod metrics;
