//! Animation constants and tuning parameters.

/// Nominal animation frame rate (Hz) for embedders driving the engine
/// with a timer rather than a display-refresh callback.
pub const TICK_RATE: u32 = 30;

/// Seconds per frame at the nominal rate.
pub const FRAME_SECS: f64 = 1.0 / TICK_RATE as f64;

// --- Entity progress ---

/// Progress-rate divisor for vessels. Raw speed is in knots; dividing by
/// this yields progress-per-frame at a plausible visual pace (a 20 kn
/// container ship crosses its route in roughly 90 minutes of wall time).
pub const VESSEL_SPEED_SCALE: f64 = 100_000.0;

/// Progress-rate divisor for aircraft. Raw speed is in mph, an order of
/// magnitude larger than vessel knots; the smaller divisor keeps planes
/// visibly faster than ships without racing across the map.
pub const AIRCRAFT_SPEED_SCALE: f64 = 50_000.0;

// --- Arc generation ---

/// Number of segments in a synthetically curved two-point arc
/// (producing ARC_SEGMENTS + 1 path coordinates).
pub const ARC_SEGMENTS: usize = 60;

/// Lateral arc offset as a fraction of the endpoints' planar distance.
pub const ARC_CURVATURE: f64 = 0.15;

// --- Wind particles ---

/// Default particle pool size. Few, long streaks read better than many
/// short ones.
pub const DEFAULT_PARTICLE_COUNT: usize = 40;

/// Converts a wind sample's speed magnitude to base particle speed
/// (canvas pixels per frame).
pub const WIND_BASE_SPEED_SCALE: f64 = 1.0 / 300.0;

/// Per-particle random speed multiplier range.
pub const WIND_SPEED_JITTER_MIN: f64 = 0.5;
pub const WIND_SPEED_JITTER_MAX: f64 = 2.0;

/// Damping applied when turning derived speed into a velocity vector.
pub const WIND_VELOCITY_DAMPING: f64 = 0.8;

/// Particle lifetime range in frames. A fresh particle's initial age is
/// randomized below the minimum so the pool's phases stay staggered.
pub const PARTICLE_LIFETIME_MIN: f64 = 150.0;
pub const PARTICLE_LIFETIME_MAX: f64 = 300.0;

/// Peak stroke opacity at the middle of a particle's life.
pub const PARTICLE_PEAK_ALPHA: f64 = 0.5;

/// Trail length in velocity multiples: base plus a speed-proportional term.
pub const TRAIL_BASE_LENGTH: f64 = 8.0;
pub const TRAIL_LENGTH_PER_SPEED: f64 = 15.0;

/// Stroke width: base plus a speed-proportional term.
pub const STROKE_BASE_WIDTH: f64 = 0.8;
pub const STROKE_WIDTH_PER_SPEED: f64 = 1.5;

/// Derived-speed thresholds for palette bucketing.
pub const SPEED_BAND_CALM_MAX: f64 = 0.2;
pub const SPEED_BAND_MODERATE_MAX: f64 = 0.4;
