//! Path geometry: arc generation and progress-to-coordinate mapping.
//!
//! Pure functions over coordinate slices — no hidden state, same inputs
//! always give the same output. Distances are planar (degree-space
//! Euclidean), not geodesic; the arcs are a visual stand-in for
//! great-circle routes, not navigation-grade geometry.

use crate::types::LatLng;

/// Build a synthetically curved two-point arc.
///
/// Produces `num_points + 1` coordinates. For step `i`, `t = i /
/// num_points`; the base coordinate is the linear interpolation of
/// `origin`/`destination` at `t`, and a lateral offset of
/// `sin(t·π) · curvature · planar_distance(origin, destination)` is added
/// to the latitude, giving a single-humped arc.
///
/// The first and last coordinates equal `origin` and `destination`
/// exactly for any curvature. `sin(π)` is not exactly zero in floating
/// point, so the endpoints are emitted literally rather than computed.
pub fn build_arc(
    origin: LatLng,
    destination: LatLng,
    num_points: usize,
    curvature: f64,
) -> Vec<LatLng> {
    let num_points = num_points.max(1);
    let distance = origin.planar_distance_to(&destination);
    let mut path = Vec::with_capacity(num_points + 1);

    for i in 0..=num_points {
        if i == 0 {
            path.push(origin);
            continue;
        }
        if i == num_points {
            path.push(destination);
            continue;
        }
        let t = i as f64 / num_points as f64;
        let base = origin.lerp(&destination, t);
        let offset = (t * std::f64::consts::PI).sin() * curvature * distance;
        path.push(LatLng::new(base.lat + offset, base.lng));
    }

    path
}

/// Map a normalized progress value to a coordinate on a path.
///
/// `progress` is clamped to [0,1] and mapped to `progress · (len − 1)`;
/// the integer part selects a segment and the fractional remainder
/// interpolates within it. A single-point path returns that point for
/// any progress. Returns `None` only for an empty slice (which a
/// validated [`Route`](crate::Route) can never produce).
pub fn point_at_progress(path: &[LatLng], progress: f64) -> Option<LatLng> {
    let last = path.len().checked_sub(1)?;
    if last == 0 {
        return Some(path[0]);
    }

    let exact = progress.clamp(0.0, 1.0) * last as f64;
    let segment = exact.floor() as usize;
    if segment >= last {
        return Some(path[last]);
    }

    let remainder = exact - segment as f64;
    Some(path[segment].lerp(&path[segment + 1], remainder))
}
