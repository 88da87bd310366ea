//! Marker layer controller: binds entities to host map overlays.
//!
//! One controller per animated entity category. Owns the keyed handle
//! maps for its markers and route polylines; the host map is shared with
//! other controllers but each touches only its own handles.

use std::collections::HashMap;
use std::rc::Rc;

use log::warn;

use tradewinds_core::constants::{ARC_CURVATURE, ARC_SEGMENTS};
use tradewinds_core::dataset::{Dataset, EntityCategory, MovingEntity, Route};
use tradewinds_core::path::{build_arc, point_at_progress};
use tradewinds_core::types::LatLng;

use crate::error::LayerError;
use crate::host::{MapHost, OverlayId};
use crate::layer::AnimatedLayer;
use crate::progress::EntityProgressTracker;

/// Marker icon glyph per category.
fn category_icon(category: EntityCategory) -> &'static str {
    match category {
        EntityCategory::Vessel => "🚢",
        EntityCategory::Aircraft => "✈️",
    }
}

/// Popup text for an entity marker.
fn entity_popup(entity: &MovingEntity, progress: f64) -> String {
    format!(
        "{icon} {label}\n{origin} → {destination}\n{detail}\nSpeed: {speed}\n{pct}% complete",
        icon = category_icon(entity.category),
        label = entity.label,
        origin = entity.origin,
        destination = entity.destination,
        detail = entity.detail,
        speed = entity.speed,
        pct = (progress * 100.0).round() as i64,
    )
}

/// Binds one category of moving entities to visual overlays on the host.
pub struct MarkerLayerController {
    name: String,
    category: EntityCategory,
    host: Rc<dyn MapHost>,
    dataset: Rc<Dataset>,
    /// Expanded render path per route id (arc-expanded for aircraft).
    paths: HashMap<String, Vec<LatLng>>,
    route_lines: HashMap<String, OverlayId>,
    markers: HashMap<String, OverlayId>,
    tracker: EntityProgressTracker,
}

impl MarkerLayerController {
    pub fn new(
        name: impl Into<String>,
        category: EntityCategory,
        host: Rc<dyn MapHost>,
        dataset: Rc<Dataset>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            host,
            dataset,
            paths: HashMap::new(),
            route_lines: HashMap::new(),
            markers: HashMap::new(),
            tracker: EntityProgressTracker::new(),
        }
    }

    /// The coordinate sequence actually rendered for a route.
    ///
    /// Vessels follow the route's waypoints verbatim; aircraft get a
    /// synthetically curved arc between the route's endpoints.
    fn render_path(&self, route: &Route) -> Vec<LatLng> {
        match self.category {
            EntityCategory::Vessel => route.waypoints().to_vec(),
            EntityCategory::Aircraft => build_arc(
                route.origin(),
                route.destination(),
                ARC_SEGMENTS,
                ARC_CURVATURE,
            ),
        }
    }

    /// Reconcile host overlays with the desired entity set.
    ///
    /// The lifecycle path passes the dataset's slice for this category;
    /// callers may pass any subset to shrink or grow the layer between
    /// enables. Idempotent: re-enabling adds what is missing, removes
    /// what is stale, and never duplicates. An entity whose route id
    /// does not resolve is logged and skipped; the rest keep animating.
    pub fn enable<'a>(&mut self, entities: impl IntoIterator<Item = &'a MovingEntity>) {
        let dataset = Rc::clone(&self.dataset);

        let mut desired_entities: HashMap<&str, &MovingEntity> = HashMap::new();
        let mut desired_routes: HashMap<&str, &Route> = HashMap::new();
        for entity in entities {
            let Some(route) = dataset.route(&entity.route_id) else {
                let skip = LayerError::MissingRoute {
                    entity_id: entity.id.clone(),
                    route_id: entity.route_id.clone(),
                };
                warn!("layer '{}': skipping entity: {skip}", self.name);
                continue;
            };
            desired_entities.insert(entity.id.as_str(), entity);
            desired_routes.insert(entity.route_id.as_str(), route);
        }

        // Drop stale handles first so a shrunk dataset leaks nothing.
        let stale_markers: Vec<String> = self
            .markers
            .keys()
            .filter(|id| !desired_entities.contains_key(id.as_str()))
            .cloned()
            .collect();
        for id in stale_markers {
            if let Some(overlay) = self.markers.remove(&id) {
                self.host.remove_overlay(overlay);
            }
        }
        let stale_routes: Vec<String> = self
            .route_lines
            .keys()
            .filter(|id| !desired_routes.contains_key(id.as_str()))
            .cloned()
            .collect();
        for id in stale_routes {
            if let Some(overlay) = self.route_lines.remove(&id) {
                self.host.remove_overlay(overlay);
            }
            self.paths.remove(&id);
        }

        // One polyline per distinct referenced route.
        for (route_id, route) in &desired_routes {
            if self.route_lines.contains_key(*route_id) {
                continue;
            }
            let path = self.render_path(route);
            let overlay = self.host.add_polyline(&path, &route.style, &route.name);
            self.route_lines.insert(route.id.clone(), overlay);
            self.paths.insert(route.id.clone(), path);
        }

        // One marker per entity with a resolvable route.
        for (id, entity) in &desired_entities {
            if self.markers.contains_key(*id) {
                continue;
            }
            let progress = self.tracker.progress_of(entity);
            let Some(path) = self.paths.get(entity.route_id.as_str()) else {
                continue;
            };
            let Some(position) = point_at_progress(path, progress) else {
                continue;
            };
            let overlay = self.host.add_marker(
                position,
                category_icon(entity.category),
                &entity_popup(entity, progress),
            );
            self.markers.insert(entity.id.clone(), overlay);
        }
    }

    /// Advance every tracked entity and move its marker in place.
    ///
    /// Progress is advanced before the coordinate is read, so a render
    /// never observes pre-tick state. Markers are repositioned, never
    /// recreated.
    pub fn tick(&mut self, elapsed: f64) {
        let dataset = Rc::clone(&self.dataset);
        for entity in dataset.entities_in(self.category) {
            let Some(&marker) = self.markers.get(&entity.id) else {
                continue;
            };
            let Some(path) = self.paths.get(&entity.route_id) else {
                continue;
            };
            let progress = self.tracker.advance(entity, elapsed);
            if let Some(position) = point_at_progress(path, progress) {
                self.host.move_marker(marker, position);
            }
        }
    }

    /// Remove every owned overlay from the host. No-op when already
    /// disabled. Progress state survives; visual resources do not.
    pub fn disable(&mut self) {
        for (_, overlay) in self.route_lines.drain() {
            self.host.remove_overlay(overlay);
        }
        for (_, overlay) in self.markers.drain() {
            self.host.remove_overlay(overlay);
        }
        self.paths.clear();
    }
}

impl AnimatedLayer for MarkerLayerController {
    fn name(&self) -> &str {
        &self.name
    }

    fn allocate(&mut self) -> Result<(), LayerError> {
        let dataset = Rc::clone(&self.dataset);
        self.enable(dataset.entities_in(self.category));
        Ok(())
    }

    fn tick(&mut self, elapsed: f64) {
        MarkerLayerController::tick(self, elapsed);
    }

    fn release(&mut self) {
        self.disable();
    }
}
