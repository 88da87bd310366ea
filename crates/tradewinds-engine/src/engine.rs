//! The overlay engine facade.
//!
//! Owns one lifecycle manager per animated layer and wires the injected
//! dataset, host, and scheduler together. Instantiable any number of
//! times with different datasets; layers never share mutable state with
//! one another, only with the host through disjoint overlay handles.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use tradewinds_core::constants::DEFAULT_PARTICLE_COUNT;
use tradewinds_core::dataset::{Dataset, EntityCategory};

use crate::error::LayerError;
use crate::host::MapHost;
use crate::layer::{AnimatedLayer, LayerLifecycleManager};
use crate::markers::MarkerLayerController;
use crate::particles::ParticleLayer;
use crate::scheduler::Scheduler;

/// The independently toggle-able animated layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Vessels,
    Flights,
    Particles,
}

/// Engine construction parameters.
pub struct EngineConfig {
    /// RNG seed for the particle field. Same seed = same field.
    pub seed: u64,
    /// Particle pool size.
    pub particle_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            particle_count: DEFAULT_PARTICLE_COUNT,
        }
    }
}

/// Top-level engine: one lifecycle manager per layer kind.
pub struct OverlayEngine {
    layers: Vec<(LayerKind, LayerLifecycleManager)>,
}

impl OverlayEngine {
    pub fn new(
        dataset: Dataset,
        host: Rc<dyn MapHost>,
        scheduler: Rc<dyn Scheduler>,
        config: EngineConfig,
    ) -> Self {
        let dataset = Rc::new(dataset);

        let vessels: Rc<RefCell<dyn AnimatedLayer>> =
            Rc::new(RefCell::new(MarkerLayerController::new(
                "vessels",
                EntityCategory::Vessel,
                Rc::clone(&host),
                Rc::clone(&dataset),
            )));
        let flights: Rc<RefCell<dyn AnimatedLayer>> =
            Rc::new(RefCell::new(MarkerLayerController::new(
                "flights",
                EntityCategory::Aircraft,
                Rc::clone(&host),
                Rc::clone(&dataset),
            )));
        let particles: Rc<RefCell<dyn AnimatedLayer>> = ParticleLayer::new(
            Rc::clone(&host),
            dataset.wind().to_vec(),
            config.particle_count,
            config.seed,
        );

        Self {
            layers: vec![
                (
                    LayerKind::Vessels,
                    LayerLifecycleManager::new(vessels, Rc::clone(&scheduler)),
                ),
                (
                    LayerKind::Flights,
                    LayerLifecycleManager::new(flights, Rc::clone(&scheduler)),
                ),
                (
                    LayerKind::Particles,
                    LayerLifecycleManager::new(particles, scheduler),
                ),
            ],
        }
    }

    fn manager_mut(&mut self, kind: LayerKind) -> &mut LayerLifecycleManager {
        self.layers
            .iter_mut()
            .find(|(k, _)| *k == kind)
            .map(|(_, m)| m)
            .expect("every LayerKind has a manager")
    }

    /// Toggle a layer. Enabling an enabled layer (or disabling a
    /// disabled one) is a no-op.
    pub fn set_layer_enabled(&mut self, kind: LayerKind, enabled: bool) -> Result<(), LayerError> {
        self.manager_mut(kind).set_enabled(enabled)
    }

    pub fn is_layer_enabled(&self, kind: LayerKind) -> bool {
        self.layers
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, m)| m.is_enabled())
            .unwrap_or(false)
    }

    /// Disable every layer (cancel-then-release each). Also runs on Drop
    /// via the managers.
    pub fn shutdown(&mut self) {
        for (_, manager) in &mut self.layers {
            manager.disable();
        }
    }
}
