//! Fundamental geographic and canvas value types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
///
/// All path math in this crate treats coordinate space as planar: distances
/// are Euclidean in degree space, not geodesic. This is a documented
/// approximation — at visualization zoom levels the error is invisible and
/// it keeps the math pure and cheap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Linear interpolation toward `other` at parameter `t` in [0,1].
    pub fn lerp(&self, other: &LatLng, t: f64) -> LatLng {
        LatLng {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
        }
    }

    /// Planar (Euclidean) distance in degree space.
    pub fn planar_distance_to(&self, other: &LatLng) -> f64 {
        let dlat = other.lat - self.lat;
        let dlng = other.lng - self.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }
}

/// Pixel extent of the host's canvas / map container.
///
/// Canvas space has the origin at the top-left corner, y growing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a canvas-space point lies inside the extent.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

/// An RGBA stroke color. Components in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Speed classification for flow-particle rendering.
///
/// Buckets a particle's derived speed into one of three fixed palette
/// entries: cyan for calm, yellow for moderate, red for severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedBand {
    Calm,
    Moderate,
    Severe,
}

impl SpeedBand {
    /// Classify a derived particle speed against the fixed thresholds.
    pub fn classify(speed: f64) -> Self {
        use crate::constants::{SPEED_BAND_CALM_MAX, SPEED_BAND_MODERATE_MAX};
        if speed < SPEED_BAND_CALM_MAX {
            SpeedBand::Calm
        } else if speed < SPEED_BAND_MODERATE_MAX {
            SpeedBand::Moderate
        } else {
            SpeedBand::Severe
        }
    }

    /// Palette color for this band at full opacity.
    pub fn color(&self) -> Rgba {
        match self {
            // cyan-400 / yellow-400 / red-500
            SpeedBand::Calm => Rgba::new(34.0 / 255.0, 211.0 / 255.0, 238.0 / 255.0, 1.0),
            SpeedBand::Moderate => Rgba::new(250.0 / 255.0, 204.0 / 255.0, 21.0 / 255.0, 1.0),
            SpeedBand::Severe => Rgba::new(239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0, 1.0),
        }
    }
}
