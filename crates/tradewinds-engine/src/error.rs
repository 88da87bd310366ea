//! Engine-level error taxonomy.

use thiserror::Error;

/// Failures surfaced by animated layers.
///
/// `MissingRoute` is recoverable: the offending entity is logged and
/// skipped while every other entity keeps animating. `NoWindSamples` is
/// fatal only to the single layer being initialized, never to the whole
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    /// An entity points at a route id that does not resolve.
    #[error("entity '{entity_id}' references unknown route '{route_id}'")]
    MissingRoute {
        entity_id: String,
        route_id: String,
    },

    /// The particle layer cannot initialize without wind samples.
    #[error("wind dataset is empty; particle layer cannot initialize")]
    NoWindSamples,
}
