//! Core types and definitions for the tradewinds overlay engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geographic value types, the injected dataset model, path geometry
//! math, tuning constants, and the error taxonomy. It has no dependency
//! on any host map library or runtime framework.

pub mod constants;
pub mod dataset;
pub mod error;
pub mod path;
pub mod types;

pub use dataset::{CompassDirection, Dataset, EntityCategory, MovingEntity, Route, WindSample};
pub use error::DatasetError;
pub use types::LatLng;

#[cfg(test)]
mod tests;
