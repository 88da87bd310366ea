//! Console host: a logging stand-in for a real map library.
//!
//! Implements the engine's host capabilities against nothing but the
//! log. Useful for demos and smoke-testing the full engine headless;
//! a real embedder would adapt these same traits onto its map widget.

use std::cell::RefCell;

use glam::DVec2;
use log::{debug, trace};

use tradewinds_core::dataset::RouteStyle;
use tradewinds_core::types::{CanvasBounds, LatLng, Rgba};
use tradewinds_engine::host::{CanvasSurface, ListenerId, MapHost, OverlayId, ViewportListener};

#[derive(Default)]
pub struct ConsoleCanvas {
    strokes_drawn: RefCell<u64>,
}

impl ConsoleCanvas {
    pub fn strokes_drawn(&self) -> u64 {
        *self.strokes_drawn.borrow()
    }
}

impl CanvasSurface for ConsoleCanvas {
    fn clear(&self) {
        trace!("canvas clear");
    }

    fn stroke_segment(&self, from: DVec2, to: DVec2, _width: f64, _color: Rgba) {
        *self.strokes_drawn.borrow_mut() += 1;
        trace!("stroke {from:?} -> {to:?}");
    }
}

pub struct ConsoleHost {
    next_id: RefCell<u64>,
    live_overlays: RefCell<u64>,
    marker_moves: RefCell<u64>,
    listeners: RefCell<Vec<(u64, ViewportListener)>>,
    bounds: CanvasBounds,
    canvas: ConsoleCanvas,
}

impl ConsoleHost {
    pub fn new(bounds: CanvasBounds) -> Self {
        Self {
            next_id: RefCell::new(0),
            live_overlays: RefCell::new(0),
            marker_moves: RefCell::new(0),
            listeners: RefCell::new(Vec::new()),
            bounds,
            canvas: ConsoleCanvas::default(),
        }
    }

    fn allocate_id(&self) -> u64 {
        let mut next = self.next_id.borrow_mut();
        let id = *next;
        *next += 1;
        *self.live_overlays.borrow_mut() += 1;
        id
    }

    pub fn live_overlays(&self) -> u64 {
        *self.live_overlays.borrow()
    }

    pub fn marker_moves(&self) -> u64 {
        *self.marker_moves.borrow()
    }

    pub fn strokes_drawn(&self) -> u64 {
        self.canvas.strokes_drawn()
    }
}

impl MapHost for ConsoleHost {
    fn add_polyline(&self, points: &[LatLng], _style: &RouteStyle, popup: &str) -> OverlayId {
        let id = self.allocate_id();
        debug!("add polyline #{id} ({} points): {popup}", points.len());
        OverlayId(id)
    }

    fn add_marker(&self, at: LatLng, icon: &str, _popup: &str) -> OverlayId {
        let id = self.allocate_id();
        debug!("add marker #{id} {icon} at ({:.2}, {:.2})", at.lat, at.lng);
        OverlayId(id)
    }

    fn move_marker(&self, id: OverlayId, to: LatLng) {
        *self.marker_moves.borrow_mut() += 1;
        trace!("move marker #{} to ({:.3}, {:.3})", id.0, to.lat, to.lng);
    }

    fn remove_overlay(&self, id: OverlayId) {
        *self.live_overlays.borrow_mut() -= 1;
        debug!("remove overlay #{}", id.0);
    }

    fn container_bounds(&self) -> CanvasBounds {
        self.bounds
    }

    fn canvas(&self) -> &dyn CanvasSurface {
        &self.canvas
    }

    fn on_viewport_change(&self, listener: ViewportListener) -> ListenerId {
        let id = *self.next_id.borrow();
        *self.next_id.borrow_mut() += 1;
        self.listeners.borrow_mut().push((id, listener));
        ListenerId(id)
    }

    fn remove_viewport_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id.0);
    }
}
