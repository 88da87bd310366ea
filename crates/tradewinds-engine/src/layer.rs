//! Layer lifecycle management.
//!
//! Every animated layer goes through the same discipline:
//! allocate-then-schedule on enable, cancel-then-release on disable.
//! The ordering is what makes stale-callback races structurally
//! impossible — a callback is only ever scheduled against fully
//! allocated resources, and is cancelled synchronously before any
//! resource is torn down.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::error::LayerError;
use crate::scheduler::{Scheduler, TaskHandle};

/// A toggle-able group of animated visual resources.
pub trait AnimatedLayer {
    fn name(&self) -> &str;

    /// Create the layer's visual resources. Must be idempotent.
    fn allocate(&mut self) -> Result<(), LayerError>;

    /// Advance the layer's simulation and update its visuals.
    fn tick(&mut self, elapsed: f64);

    /// Destroy every visual resource. Must be idempotent.
    fn release(&mut self);
}

/// Wraps exactly one [`AnimatedLayer`]'s enable/disable transitions and
/// its per-frame scheduling. Holds at most one active registration.
pub struct LayerLifecycleManager {
    layer: Rc<RefCell<dyn AnimatedLayer>>,
    scheduler: Rc<dyn Scheduler>,
    task: Option<TaskHandle>,
}

impl LayerLifecycleManager {
    pub fn new(layer: Rc<RefCell<dyn AnimatedLayer>>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            layer,
            scheduler,
            task: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.task.is_some()
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), LayerError> {
        if enabled {
            self.enable()
        } else {
            self.disable();
            Ok(())
        }
    }

    /// disabled → enabled: allocate resources, then start the loop.
    /// A failed allocation leaves nothing scheduled.
    fn enable(&mut self) -> Result<(), LayerError> {
        if self.task.is_some() {
            return Ok(());
        }
        self.layer.borrow_mut().allocate()?;

        let layer = Rc::clone(&self.layer);
        let task = self
            .scheduler
            .schedule_repeating(Box::new(move |elapsed| {
                layer.borrow_mut().tick(elapsed);
            }));
        self.task = Some(task);
        debug!("layer '{}' enabled", self.layer.borrow().name());
        Ok(())
    }

    /// enabled → disabled: cancel the scheduled callback synchronously,
    /// then release resources. No-op when already disabled.
    pub fn disable(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        self.scheduler.cancel(task);
        self.layer.borrow_mut().release();
        debug!("layer '{}' disabled", self.layer.borrow().name());
    }
}

impl Drop for LayerLifecycleManager {
    fn drop(&mut self) {
        // Host teardown follows the same cancel-then-release ordering.
        self.disable();
    }
}
