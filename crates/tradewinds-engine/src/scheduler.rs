//! Frame scheduling capability.
//!
//! Abstracts the host's per-frame callback mechanism (a timer, or a
//! display-refresh primitive) behind a `schedule_repeating`/`cancel`
//! contract. The contract every implementation must honor:
//!
//! - at most one active registration per layer (the lifecycle manager's
//!   responsibility, but implementations never coalesce or duplicate);
//! - `cancel` takes effect synchronously — a cancelled callback does not
//!   fire again, not even later in a frame already in flight.
//!
//! `elapsed` is measured in frames at the nominal
//! [`TICK_RATE`](tradewinds_core::constants::TICK_RATE): an embedder
//! running at the nominal rate passes 1.0 per frame.

use std::cell::RefCell;
use std::collections::HashSet;

/// Handle to a scheduled repeating callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub u64);

/// A per-frame callback receiving the elapsed time in frames.
pub type FrameCallback = Box<dyn FnMut(f64)>;

/// The scheduling capability injected into lifecycle managers.
pub trait Scheduler {
    /// Register a repeating per-frame callback.
    fn schedule_repeating(&self, callback: FrameCallback) -> TaskHandle;

    /// Cancel a registration. Synchronous: after this returns the
    /// callback will never fire again.
    fn cancel(&self, handle: TaskHandle);
}

#[derive(Default)]
struct FrameSchedulerInner {
    next_id: u64,
    tasks: Vec<(u64, FrameCallback)>,
    cancelled: HashSet<u64>,
}

/// The provided cooperative scheduler. The embedder (or a test acting as
/// a fake clock) pumps it with [`run_frame`](FrameScheduler::run_frame).
///
/// Callbacks scheduled during a frame first fire on the next frame;
/// callbacks cancelled during a frame are suppressed for the remainder
/// of that frame.
#[derive(Default)]
pub struct FrameScheduler {
    inner: RefCell<FrameSchedulerInner>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live registrations.
    pub fn task_count(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Deliver one frame to every live callback.
    pub fn run_frame(&self, elapsed: f64) {
        // Take the task list so callbacks can re-enter the scheduler
        // (schedule or cancel) without overlapping borrows.
        let mut snapshot = std::mem::take(&mut self.inner.borrow_mut().tasks);

        for (id, callback) in snapshot.iter_mut() {
            if self.inner.borrow().cancelled.contains(id) {
                continue;
            }
            callback(elapsed);
        }

        let mut inner = self.inner.borrow_mut();
        // Anything scheduled during the frame landed in inner.tasks.
        let scheduled_during_frame = std::mem::take(&mut inner.tasks);
        snapshot.extend(scheduled_during_frame);
        snapshot.retain(|(id, _)| !inner.cancelled.contains(id));
        inner.tasks = snapshot;
        inner.cancelled.clear();
    }
}

impl Scheduler for FrameScheduler {
    fn schedule_repeating(&self, callback: FrameCallback) -> TaskHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.tasks.push((id, callback));
        TaskHandle(id)
    }

    fn cancel(&self, handle: TaskHandle) {
        let mut inner = self.inner.borrow_mut();
        inner.cancelled.insert(handle.0);
        inner.tasks.retain(|(id, _)| *id != handle.0);
    }
}
