//! The injected dataset: routes, moving entities, and wind samples.
//!
//! Records are plain serde data structs, created once from the embedder's
//! data and read-only for the engine's lifetime. A new dataset means
//! constructing a new engine. Validation happens at construction so the
//! engine can assume every `Route` holds at least two waypoints.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{AIRCRAFT_SPEED_SCALE, VESSEL_SPEED_SCALE};
use crate::error::DatasetError;
use crate::types::LatLng;

/// Polyline styling hints forwarded to the host map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStyle {
    /// CSS-style hex color, e.g. "#22d3ee".
    pub color: String,
    /// Stroke weight in pixels.
    pub weight: f64,
    /// Stroke opacity in [0,1].
    pub opacity: f64,
    /// Whether the line is dashed.
    pub dashed: bool,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: "#22d3ee".to_string(),
            weight: 2.0,
            opacity: 0.6,
            dashed: true,
        }
    }
}

/// An ordered, immutable sequence of waypoints defining a path.
///
/// Always holds at least two waypoints; enforced by [`Route::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    waypoints: Vec<LatLng>,
    pub style: RouteStyle,
}

impl Route {
    /// Build a route, rejecting fewer than two waypoints.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        waypoints: Vec<LatLng>,
        style: RouteStyle,
    ) -> Result<Self, DatasetError> {
        let id = id.into();
        if waypoints.len() < 2 {
            return Err(DatasetError::TooFewWaypoints {
                route_id: id,
                count: waypoints.len(),
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            waypoints,
            style,
        })
    }

    pub fn waypoints(&self) -> &[LatLng] {
        &self.waypoints
    }

    /// First waypoint (origin of the route).
    pub fn origin(&self) -> LatLng {
        self.waypoints[0]
    }

    /// Last waypoint (destination of the route).
    pub fn destination(&self) -> LatLng {
        self.waypoints[self.waypoints.len() - 1]
    }
}

/// Category of a moving entity. Determines the progress-rate scaling
/// (raw speed units differ by orders of magnitude between categories)
/// and which animated layer the entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    /// Maritime vessel; speed in knots.
    Vessel,
    /// Aircraft; speed in mph.
    Aircraft,
}

impl EntityCategory {
    /// Progress-rate divisor for this category.
    pub fn speed_scale(&self) -> f64 {
        match self {
            EntityCategory::Vessel => VESSEL_SPEED_SCALE,
            EntityCategory::Aircraft => AIRCRAFT_SPEED_SCALE,
        }
    }
}

/// A moving thing bound to a route.
///
/// `progress` is only the starting position; live progress is owned by
/// the engine's progress tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingEntity {
    pub id: String,
    pub route_id: String,
    pub category: EntityCategory,
    /// Display label (vessel name, flight number).
    pub label: String,
    /// Speed in the category's raw unit (knots or mph).
    pub speed: f64,
    /// Initial progress along the route, in [0,1).
    pub progress: f64,
    /// Origin description for popups.
    pub origin: String,
    /// Destination description for popups.
    pub destination: String,
    /// Free-form detail line (cargo, aircraft type).
    pub detail: String,
}

/// Eight-way compass direction for wind samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassDirection {
    /// Unit vector in canvas space (y grows downward, so north points up
    /// the screen at negative y).
    pub fn unit_vector(&self) -> DVec2 {
        const DIAG: f64 = std::f64::consts::FRAC_1_SQRT_2;
        match self {
            CompassDirection::N => DVec2::new(0.0, -1.0),
            CompassDirection::NE => DVec2::new(DIAG, -DIAG),
            CompassDirection::E => DVec2::new(1.0, 0.0),
            CompassDirection::SE => DVec2::new(DIAG, DIAG),
            CompassDirection::S => DVec2::new(0.0, 1.0),
            CompassDirection::SW => DVec2::new(-DIAG, DIAG),
            CompassDirection::W => DVec2::new(-1.0, 0.0),
            CompassDirection::NW => DVec2::new(-DIAG, -DIAG),
        }
    }
}

/// A static wind observation used to seed flow particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    /// Location descriptor (for display only; particles ignore it).
    pub region: String,
    /// Scalar speed magnitude in the source feed's unit.
    pub speed: f64,
    pub direction: CompassDirection,
}

/// The complete injected dataset. Immutable for the engine's lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    routes: Vec<Route>,
    entities: Vec<MovingEntity>,
    wind: Vec<WindSample>,
}

impl Dataset {
    pub fn new(routes: Vec<Route>, entities: Vec<MovingEntity>, wind: Vec<WindSample>) -> Self {
        Self {
            routes,
            entities,
            wind,
        }
    }

    /// Look up a route by id.
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn entities(&self) -> &[MovingEntity] {
        &self.entities
    }

    /// Entities belonging to one animated category.
    pub fn entities_in(&self, category: EntityCategory) -> impl Iterator<Item = &MovingEntity> {
        self.entities.iter().filter(move |e| e.category == category)
    }

    pub fn wind(&self) -> &[WindSample] {
        &self.wind
    }
}
