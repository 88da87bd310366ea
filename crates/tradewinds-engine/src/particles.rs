//! Wind particle field: a fixed pool of short-lived flow particles.
//!
//! Particles are spawned from random wind samples, drift across the
//! canvas, and are fully respawned in place when they expire or leave
//! the bounds — the pool never grows or shrinks. All randomness flows
//! through a seeded ChaCha8 generator, so the same seed replays the
//! same field.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::DVec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tradewinds_core::constants::{
    PARTICLE_LIFETIME_MAX, PARTICLE_LIFETIME_MIN, PARTICLE_PEAK_ALPHA, STROKE_BASE_WIDTH,
    STROKE_WIDTH_PER_SPEED, TRAIL_BASE_LENGTH, TRAIL_LENGTH_PER_SPEED, WIND_BASE_SPEED_SCALE,
    WIND_SPEED_JITTER_MAX, WIND_SPEED_JITTER_MIN, WIND_VELOCITY_DAMPING,
};
use tradewinds_core::dataset::WindSample;
use tradewinds_core::types::{CanvasBounds, SpeedBand};

use crate::error::LayerError;
use crate::host::{CanvasSurface, ListenerId, MapHost};
use crate::layer::AnimatedLayer;

/// One flow particle. Owned by the field, reused in place on respawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Canvas-space position.
    pub pos: DVec2,
    /// Canvas-space velocity in pixels per frame.
    pub vel: DVec2,
    /// Age in frames. Always below `max_age` at render time.
    pub age: f64,
    /// Lifetime in frames.
    pub max_age: f64,
    /// Derived speed, used for trail length, width, and palette bucketing.
    pub speed: f64,
}

impl Particle {
    /// Fraction of lifetime remaining, in [0,1].
    pub fn remaining_fraction(&self) -> f64 {
        1.0 - self.age / self.max_age
    }
}

/// The particle simulation. Pool size is fixed for the field's lifetime.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: CanvasBounds,
    wind: Vec<WindSample>,
    rng: ChaCha8Rng,
}

impl ParticleField {
    /// Allocate and fully populate the pool.
    pub fn new(
        wind: Vec<WindSample>,
        count: usize,
        bounds: CanvasBounds,
        seed: u64,
    ) -> Result<Self, LayerError> {
        if wind.is_empty() {
            return Err(LayerError::NoWindSamples);
        }
        let mut field = Self {
            particles: Vec::with_capacity(count),
            bounds,
            wind,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        for _ in 0..count {
            let particle = field.spawn();
            field.particles.push(particle);
        }
        Ok(field)
    }

    /// Resample a fresh particle: random wind sample, jittered speed,
    /// random position within bounds, randomized lifetime. The initial
    /// age is randomized below the minimum lifetime so pool phases stay
    /// staggered.
    fn spawn(&mut self) -> Particle {
        let sample = &self.wind[self.rng.gen_range(0..self.wind.len())];
        let direction = sample.direction.unit_vector();
        let jitter = self
            .rng
            .gen_range(WIND_SPEED_JITTER_MIN..WIND_SPEED_JITTER_MAX);
        let speed = sample.speed * WIND_BASE_SPEED_SCALE * jitter;

        let pos = DVec2::new(
            self.rng.gen::<f64>() * self.bounds.width,
            self.rng.gen::<f64>() * self.bounds.height,
        );

        Particle {
            pos,
            vel: direction * speed * WIND_VELOCITY_DAMPING,
            age: self.rng.gen::<f64>() * PARTICLE_LIFETIME_MIN,
            max_age: self
                .rng
                .gen_range(PARTICLE_LIFETIME_MIN..PARTICLE_LIFETIME_MAX),
            speed,
        }
    }

    /// Integrate every particle and respawn expired or escaped ones in
    /// place. Slot indices are stable; only slot contents are replaced.
    pub fn tick(&mut self, elapsed: f64) {
        for i in 0..self.particles.len() {
            let (pos, expired) = {
                let p = &mut self.particles[i];
                p.pos += p.vel * elapsed;
                p.age += elapsed;
                (p.pos, p.age >= p.max_age)
            };
            if expired || !self.bounds.contains(pos) {
                self.particles[i] = self.spawn();
            }
        }
    }

    /// Draw the field: one trailing stroke per particle, opacity easing
    /// over remaining lifetime, color bucketed by speed.
    pub fn render(&self, canvas: &dyn CanvasSurface) {
        canvas.clear();
        for p in &self.particles {
            let alpha = (p.remaining_fraction() * std::f64::consts::PI).sin() * PARTICLE_PEAK_ALPHA;
            let color = SpeedBand::classify(p.speed)
                .color()
                .with_alpha(alpha as f32);
            let trail = TRAIL_BASE_LENGTH + p.speed * TRAIL_LENGTH_PER_SPEED;
            let tail = p.pos - p.vel * trail;
            let width = STROKE_BASE_WIDTH + p.speed * STROKE_WIDTH_PER_SPEED;
            canvas.stroke_segment(p.pos, tail, width, color);
        }
    }

    /// Adopt a new canvas extent without resetting particle state.
    /// Particles stranded outside the new bounds respawn naturally on
    /// their next tick.
    pub fn on_resize(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    #[cfg(test)]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

/// The particle field as an animated layer: owns the canvas resource and
/// the viewport-change subscription while enabled.
pub struct ParticleLayer {
    host: Rc<dyn MapHost>,
    wind: Vec<WindSample>,
    count: usize,
    seed: u64,
    field: Option<ParticleField>,
    listener: Option<ListenerId>,
    // Weak self-reference handed to the viewport listener, so a late
    // event can never touch a dropped layer.
    self_ref: Weak<RefCell<ParticleLayer>>,
}

impl ParticleLayer {
    pub fn new(
        host: Rc<dyn MapHost>,
        wind: Vec<WindSample>,
        count: usize,
        seed: u64,
    ) -> Rc<RefCell<Self>> {
        Rc::new_cyclic(|weak| {
            RefCell::new(Self {
                host,
                wind,
                count,
                seed,
                field: None,
                listener: None,
                self_ref: weak.clone(),
            })
        })
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }
}

impl AnimatedLayer for ParticleLayer {
    fn name(&self) -> &str {
        "particles"
    }

    fn allocate(&mut self) -> Result<(), LayerError> {
        if self.field.is_some() {
            return Ok(());
        }
        let bounds = self.host.container_bounds();
        self.field = Some(ParticleField::new(
            self.wind.clone(),
            self.count,
            bounds,
            self.seed,
        )?);

        let weak = self.self_ref.clone();
        let listener = self.host.on_viewport_change(Box::new(move |bounds| {
            if let Some(layer) = weak.upgrade() {
                if let Some(field) = layer.borrow_mut().field.as_mut() {
                    field.on_resize(bounds);
                }
            }
        }));
        self.listener = Some(listener);
        Ok(())
    }

    fn tick(&mut self, elapsed: f64) {
        if let Some(field) = self.field.as_mut() {
            field.tick(elapsed);
            field.render(self.host.canvas());
        }
    }

    fn release(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.remove_viewport_listener(listener);
        }
        if self.field.take().is_some() {
            self.host.canvas().clear();
        }
    }
}
