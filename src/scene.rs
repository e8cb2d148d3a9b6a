//! The frame driver tying the effects together.
//!
//! [`Scene`] owns the clock and both particle populations (plus the optional
//! laptop hologram) and executes the per-frame sequence against whatever
//! [`Canvas`] the host supplies:
//!
//! 1. wash the surface with the translucent backdrop fill (fading trails
//!    rather than a hard clear);
//! 2. tick and render every symbol particle;
//! 3. one connective-edge pass over the whole symbol population;
//! 4. tick and render the hologram, when present;
//! 5. tick, render and prune the trail; each particle draws before its
//!    death check, so a dying particle is visible on its death frame.
//!
//! The scene never drives itself: the host calls [`Scene::frame`] once per
//! repaint, passing the current surface extent (never cached here, so
//! resizes take effect on the next frame). [`Scene::stop`] flips a flag the
//! host observes to cancel rescheduling.
//!
//! # Example
//!
//! ```ignore
//! use neonfx::prelude::*;
//!
//! let mut scene = Scene::new().with_seed(7).with_symbol_count(80);
//! let mut canvas = DisplayList::new();
//! scene.frame(&mut canvas, Vec2::new(800.0, 600.0));
//! ```

use glam::Vec2;
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::field::{SymbolField, DEFAULT_POPULATION};
use crate::laptop::LaptopHologram;
use crate::time::FrameClock;
use crate::trail::TrailEmitter;
use crate::visuals::VisualConfig;

/// The animated scene: clock, populations and visual tunables.
pub struct Scene {
    clock: FrameClock,
    trail: TrailEmitter,
    /// Created lazily on the first frame, at the live surface extent.
    field: Option<SymbolField>,
    hologram: Option<LaptopHologram>,
    visuals: VisualConfig,
    symbol_count: usize,
    seed: Option<u64>,
    running: bool,
}

impl Scene {
    /// Create a scene with the default population and the hologram enabled.
    pub fn new() -> Self {
        Self {
            clock: FrameClock::new(),
            trail: TrailEmitter::new(),
            field: None,
            hologram: Some(LaptopHologram::new()),
            visuals: VisualConfig::default(),
            symbol_count: DEFAULT_POPULATION,
            seed: None,
            running: true,
        }
    }

    /// Seed every randomized component for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.trail = TrailEmitter::with_seed(seed);
        if self.hologram.is_some() {
            self.hologram = Some(LaptopHologram::with_seed(seed ^ 0x4c61_7074));
        }
        self
    }

    /// Set the symbol population size. Takes effect when the field is built
    /// on the first frame.
    pub fn with_symbol_count(mut self, count: usize) -> Self {
        self.symbol_count = count;
        self
    }

    /// Enable or disable the laptop hologram.
    pub fn with_hologram(mut self, enabled: bool) -> Self {
        self.hologram = if enabled {
            match self.seed {
                Some(seed) => Some(LaptopHologram::with_seed(seed ^ 0x4c61_7074)),
                None => Some(LaptopHologram::new()),
            }
        } else {
            None
        };
        self
    }

    /// Override the backdrop wash.
    pub fn with_visuals(mut self, visuals: VisualConfig) -> Self {
        self.visuals = visuals;
        self
    }

    /// Forward a pointer movement to the populations.
    ///
    /// Spawns a (rate-limited) trail burst and pushes nearby symbols away.
    /// Safe to call at any event cadence between frames.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.trail.spawn(position);
        if let Some(field) = &mut self.field {
            field.repel(position);
        }
    }

    /// Execute one frame against `canvas` at the given surface extent.
    ///
    /// Does nothing once the scene is stopped.
    pub fn frame(&mut self, canvas: &mut impl Canvas, extent: Vec2) {
        if !self.running {
            return;
        }
        self.clock.update();

        canvas.fill(extent, self.visuals.backdrop, self.visuals.fade_alpha);

        let field = self.field.get_or_insert_with(|| {
            debug!(count = self.symbol_count, ?extent, "symbol field initialized");
            match self.seed {
                Some(seed) => SymbolField::with_seed(self.symbol_count, extent, seed ^ 0x5379_6d62),
                None => SymbolField::new(self.symbol_count, extent),
            }
        });
        field.tick(extent);
        field.render(canvas);
        field.draw_edges(canvas);

        if let Some(hologram) = &mut self.hologram {
            hologram.tick();
            hologram.render(canvas, extent);
        }

        self.trail.tick_and_render(canvas);
    }

    /// Stop the scene; the host loop observes this and cancels rescheduling.
    pub fn stop(&mut self) {
        if self.running {
            info!(frames = self.clock.frame(), "scene stopped");
            self.running = false;
        }
    }

    /// Whether frames still execute.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The scene clock.
    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// The trail population.
    #[inline]
    pub fn trail(&self) -> &TrailEmitter {
        &self.trail
    }

    /// The symbol field, once the first frame has created it.
    #[inline]
    pub fn field(&self) -> Option<&SymbolField> {
        self.field.as_ref()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCmd};

    const EXTENT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn first_frame_builds_the_field_at_the_live_extent() {
        let mut scene = Scene::new().with_seed(1).with_hologram(false);
        assert!(scene.field().is_none());

        let mut canvas = DisplayList::new();
        scene.frame(&mut canvas, EXTENT);

        let field = scene.field().expect("field built on first frame");
        assert_eq!(field.len(), DEFAULT_POPULATION);
    }

    #[test]
    fn every_frame_opens_with_the_fade_fill() {
        let mut scene = Scene::new().with_seed(2).with_hologram(false);
        for _ in 0..3 {
            let mut canvas = DisplayList::new();
            scene.frame(&mut canvas, EXTENT);
            match &canvas.commands()[0] {
                DrawCmd::Fill { extent, alpha, .. } => {
                    assert_eq!(*extent, EXTENT);
                    assert!((alpha - 0.1).abs() < 1e-6);
                }
                other => panic!("frame opened with {other:?}"),
            }
        }
    }

    #[test]
    fn pointer_movement_feeds_the_trail() {
        let mut scene = Scene::new().with_seed(3).with_hologram(false);
        scene.pointer_moved(Vec2::new(100.0, 100.0));
        assert_eq!(scene.trail().len(), 3);
    }

    #[test]
    fn stopped_scene_draws_nothing() {
        let mut scene = Scene::new().with_seed(4).with_hologram(false);
        let mut canvas = DisplayList::new();
        scene.frame(&mut canvas, EXTENT);
        let frames_before = scene.clock().frame();

        scene.stop();
        assert!(!scene.is_running());

        let mut after = DisplayList::new();
        scene.frame(&mut after, EXTENT);
        assert!(after.is_empty());
        assert_eq!(scene.clock().frame(), frames_before);
    }

    #[test]
    fn symbol_count_is_honored() {
        let mut scene = Scene::new().with_seed(5).with_symbol_count(17).with_hologram(false);
        let mut canvas = DisplayList::new();
        scene.frame(&mut canvas, EXTENT);

        assert_eq!(scene.field().unwrap().len(), 17);
        let symbols = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Symbol { .. }))
            .count();
        assert_eq!(symbols, 17);
    }

    #[test]
    fn hologram_toggle_changes_the_command_stream() {
        let mut bare = Scene::new().with_seed(6).with_symbol_count(0).with_hologram(false);
        let mut canvas = DisplayList::new();
        bare.frame(&mut canvas, EXTENT);
        assert_eq!(canvas.len(), 1); // just the fade fill

        let mut with_model = Scene::new().with_seed(6).with_symbol_count(0).with_hologram(true);
        let mut canvas = DisplayList::new();
        with_model.frame(&mut canvas, EXTENT);
        assert!(canvas.len() > 1);
    }
}
