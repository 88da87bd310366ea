//! Live overlay animation engine for tradewinds.
//!
//! Binds the injected dataset to an externally owned map viewport:
//! advances entity progress, maps it to path coordinates, repositions
//! markers, runs the wind particle field, and wraps every animated layer
//! in enable/disable lifecycle discipline. Completely host-agnostic —
//! the map, canvas, and frame scheduler are injected capabilities,
//! enabling deterministic testing against fakes.

pub mod engine;
pub mod error;
pub mod host;
pub mod layer;
pub mod markers;
pub mod particles;
pub mod progress;
pub mod scheduler;

pub use tradewinds_core as core;

pub use engine::{EngineConfig, LayerKind, OverlayEngine};
pub use error::LayerError;
