//! Error taxonomy for dataset construction.
//!
//! Construction-time validation errors surface immediately and prevent
//! the offending route (or the whole dataset build) from being used.
//! Per-tick, per-entity conditions are not errors at this level — they
//! are logged and skipped by the engine so the rest of the visualization
//! keeps animating.

use thiserror::Error;

/// A dataset record failed validation at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// A route needs at least two waypoints to define a path.
    #[error("route '{route_id}' has {count} waypoint(s); at least 2 are required")]
    TooFewWaypoints { route_id: String, count: usize },
}
