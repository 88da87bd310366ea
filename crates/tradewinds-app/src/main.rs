//! Headless demo: runs the overlay engine against a console host.
//!
//! Drives the frame scheduler at the nominal tick rate for a few hundred
//! frames, toggling layers along the way, and logs a summary. Run with
//! `RUST_LOG=debug` to watch overlay mutations.

mod data;
mod host;

use std::rc::Rc;
use std::time::{Duration, Instant};

use log::info;

use tradewinds_core::constants::TICK_RATE;
use tradewinds_core::types::CanvasBounds;
use tradewinds_engine::host::MapHost;
use tradewinds_engine::scheduler::{FrameScheduler, Scheduler};
use tradewinds_engine::{EngineConfig, LayerKind, OverlayEngine};

use crate::host::ConsoleHost;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Frames to run before exiting.
const DEMO_FRAMES: u64 = 300;

fn main() {
    env_logger::init();

    let host = Rc::new(ConsoleHost::new(CanvasBounds::new(1280.0, 720.0)));
    let scheduler = Rc::new(FrameScheduler::new());
    let mut engine = OverlayEngine::new(
        data::demo_dataset(),
        Rc::clone(&host) as Rc<dyn MapHost>,
        Rc::clone(&scheduler) as Rc<dyn Scheduler>,
        EngineConfig::default(),
    );

    engine
        .set_layer_enabled(LayerKind::Vessels, true)
        .expect("vessel layer enables");
    engine
        .set_layer_enabled(LayerKind::Flights, true)
        .expect("flight layer enables");
    engine
        .set_layer_enabled(LayerKind::Particles, true)
        .expect("particle layer enables");

    info!(
        "engine up: {} live overlays, running {DEMO_FRAMES} frames at {TICK_RATE}Hz",
        host.live_overlays()
    );

    let mut next_frame_time = Instant::now();
    for frame in 0..DEMO_FRAMES {
        scheduler.run_frame(1.0);

        // Exercise a toggle mid-run: drop the particle layer for a
        // stretch, then bring it back.
        if frame == 100 {
            engine
                .set_layer_enabled(LayerKind::Particles, false)
                .expect("particle layer disables");
            info!("particles off at frame {frame}");
        }
        if frame == 200 {
            engine
                .set_layer_enabled(LayerKind::Particles, true)
                .expect("particle layer re-enables");
            info!("particles back on at frame {frame}");
        }

        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_frame_time = now;
        }
    }

    engine.shutdown();
    info!(
        "done: {} marker moves, {} particle strokes, {} overlays left",
        host.marker_moves(),
        host.strokes_drawn(),
        host.live_overlays()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_is_internally_consistent() {
        let dataset = data::demo_dataset();
        assert!(!dataset.entities().is_empty());
        assert!(!dataset.wind().is_empty());
        for entity in dataset.entities() {
            assert!(
                dataset.route(&entity.route_id).is_some(),
                "entity '{}' must reference a bundled route",
                entity.id
            );
        }
    }

    #[test]
    fn test_headless_engine_smoke_run() {
        let host = Rc::new(ConsoleHost::new(CanvasBounds::new(1280.0, 720.0)));
        let scheduler = Rc::new(FrameScheduler::new());
        let mut engine = OverlayEngine::new(
            data::demo_dataset(),
            Rc::clone(&host) as Rc<dyn MapHost>,
            Rc::clone(&scheduler) as Rc<dyn Scheduler>,
            EngineConfig::default(),
        );

        engine.set_layer_enabled(LayerKind::Vessels, true).unwrap();
        engine.set_layer_enabled(LayerKind::Flights, true).unwrap();
        engine.set_layer_enabled(LayerKind::Particles, true).unwrap();

        for _ in 0..60 {
            scheduler.run_frame(1.0);
        }

        assert!(host.marker_moves() > 0);
        assert!(host.strokes_drawn() > 0);

        engine.shutdown();
        assert_eq!(host.live_overlays(), 0);
    }

    #[test]
    fn test_frame_duration_constant() {
        // 30Hz = 33.333ms per frame.
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
