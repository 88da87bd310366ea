//! Per-entity progress simulation.

use std::collections::HashMap;

use tradewinds_core::dataset::MovingEntity;

/// Owns the live normalized progress of every animated entity.
///
/// Progress is seeded from the entity's dataset value on first use and
/// advanced deterministically each tick: `rate = speed / category
/// scale`, `progress = (progress + rate · elapsed) mod 1`. Advancing by
/// `dt1` then `dt2` equals one advance by `dt1 + dt2` (mod wraparound),
/// and the value never leaves `[0, 1)`.
#[derive(Debug, Default)]
pub struct EntityProgressTracker {
    progress: HashMap<String, f64>,
}

impl EntityProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current progress for an entity, seeding from its dataset value.
    pub fn progress_of(&mut self, entity: &MovingEntity) -> f64 {
        *self
            .progress
            .entry(entity.id.clone())
            .or_insert(entity.progress)
    }

    /// Advance an entity by `elapsed` frames and return the new progress.
    pub fn advance(&mut self, entity: &MovingEntity, elapsed: f64) -> f64 {
        let rate = entity.speed / entity.category.speed_scale();
        let slot = self
            .progress
            .entry(entity.id.clone())
            .or_insert(entity.progress);
        *slot = (*slot + rate * elapsed).rem_euclid(1.0);
        *slot
    }
}
