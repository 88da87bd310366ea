//! Injected host capabilities: the external map and its drawing canvas.
//!
//! The engine never sees the concrete map library. It talks to a narrow
//! trait exposing only the operations it needs, so the whole engine runs
//! unchanged against a fake host in tests. The host is an externally
//! owned mutable object; methods take `&self` and implementations use
//! interior mutability, mirroring that ownership.
//!
//! Re-entrancy contract: the host delivers viewport-change events
//! between frames, never while a layer tick is executing.

use glam::DVec2;

use tradewinds_core::dataset::RouteStyle;
use tradewinds_core::types::{CanvasBounds, LatLng, Rgba};

/// Handle to an overlay primitive (polyline or marker) owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// Handle to a viewport-change subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Callback invoked when the viewport pans, zooms, or resizes.
pub type ViewportListener = Box<dyn Fn(CanvasBounds)>;

/// The external map viewport, reduced to what the engine needs.
pub trait MapHost {
    /// Add a styled polyline overlay with popup text. Returns its handle.
    fn add_polyline(&self, points: &[LatLng], style: &RouteStyle, popup: &str) -> OverlayId;

    /// Add a marker overlay with an icon glyph and popup text.
    fn add_marker(&self, at: LatLng, icon: &str, popup: &str) -> OverlayId;

    /// Reposition an existing marker in place. Must not recreate it.
    fn move_marker(&self, id: OverlayId, to: LatLng);

    /// Remove an overlay previously returned by an add call.
    fn remove_overlay(&self, id: OverlayId);

    /// Current pixel extent of the map container.
    fn container_bounds(&self) -> CanvasBounds;

    /// The 2D drawing surface layered over the map.
    fn canvas(&self) -> &dyn CanvasSurface;

    /// Subscribe to viewport-change events (pan/zoom/resize).
    fn on_viewport_change(&self, listener: ViewportListener) -> ListenerId;

    /// Remove a viewport-change subscription.
    fn remove_viewport_listener(&self, id: ListenerId);
}

/// A 2D canvas the particle field paints onto each frame.
pub trait CanvasSurface {
    /// Clear the whole surface to transparent.
    fn clear(&self);

    /// Stroke a single line segment in canvas space.
    fn stroke_segment(&self, from: DVec2, to: DVec2, width: f64, color: Rgba);
}
