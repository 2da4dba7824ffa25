//! Metrics collection.
//!
//! # Responsibilities
//! - Define navigation metrics (directory builds, registrations, view loads)
//! - Record through the `metrics` facade; the embedding application installs
//!   a recorder (without one every call is a no-op)
//!
//! # Metrics
//! - `directory_builds_total` (counter): directory builds by outcome
//! - `directory_entries` (gauge): entries in the last successful build
//! - `directory_build_duration_seconds` (histogram): build latency
//! - `dependency_registrations_total` (counter): registrations by namespace
//! - `view_loads_total` (counter): view loads by strategy, outcome
//! - `navigation_resolutions_total` (counter): resolutions by selection outcome

use std::time::Duration;

use metrics::{counter, gauge, histogram};

use crate::resolver::LoadStrategy;

fn outcome(success: bool) -> &'static str {
    if success {
        "success"
    } else {
        "failure"
    }
}

/// Record one directory build. `entries` is `None` when the build failed.
pub fn record_directory_build(entries: Option<usize>, elapsed: Duration) {
    counter!("directory_builds_total", "outcome" => outcome(entries.is_some())).increment(1);
    histogram!("directory_build_duration_seconds").record(elapsed.as_secs_f64());
    if let Some(entries) = entries {
        gauge!("directory_entries").set(entries as f64);
    }
}

pub fn record_dependency_registration(namespace: &str) {
    counter!("dependency_registrations_total", "namespace" => namespace.to_string()).increment(1);
}

pub fn record_view_load(strategy: LoadStrategy, success: bool) {
    counter!(
        "view_loads_total",
        "strategy" => strategy.as_str(),
        "outcome" => outcome(success)
    )
    .increment(1);
}

/// Record one navigation resolution; `unselected` when no key was selected.
pub fn record_navigation_resolution(unselected: bool) {
    let selection = if unselected { "none" } else { "selected" };
    counter!("navigation_resolutions_total", "selection" => selection).increment(1);
}
