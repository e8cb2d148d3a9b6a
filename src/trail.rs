//! Cursor trail particles.
//!
//! [`TrailEmitter`] owns a small population of short-lived glow particles
//! spawned along the pointer's path. Spawning is rate-limited to roughly one
//! qualifying event per 16 ms; each accepted event adds three particles with
//! independently randomized jitter, size, velocity, decay rate and color.
//!
//! Particles advance every tick, fade out and shrink, and are removed once
//! either their life or radius crosses the death threshold, but only after
//! one final draw, so a dying particle is still visible on its death frame.
//!
//! # Example
//!
//! ```ignore
//! use neonfx::trail::TrailEmitter;
//! use glam::Vec2;
//!
//! let mut trail = TrailEmitter::with_seed(7);
//! trail.spawn(Vec2::new(100.0, 100.0));
//!
//! // In the frame loop:
//! trail.tick_with(|p| println!("{} at {}", p.radius, p.position));
//! ```

use std::time::Duration;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::canvas::Canvas;
use crate::time::RateGate;
use crate::visuals::{Rgb, TRAIL_PALETTE};

/// Particles added per accepted spawn event.
pub const PARTICLES_PER_SPAWN: usize = 3;

/// Minimum time between accepted spawn events, roughly one display frame.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(16);

/// Spawn positions are jittered by this much on each axis.
const SPAWN_JITTER: f32 = 2.5;

/// Radius multiplier applied every tick.
const RADIUS_FALLOFF: f32 = 0.98;

/// A particle whose radius shrinks below this is dead.
const MIN_RADIUS: f32 = 0.5;

/// One glow particle of the cursor trail.
///
/// Velocity, decay rate and color are fixed at spawn; position, life and
/// radius change every tick. Life and radius never increase.
#[derive(Debug, Clone)]
pub struct TrailParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Current radius; starts in `[3, 8)` and shrinks by 2% per tick.
    pub radius: f32,
    /// Remaining life in `[0, 1]`; doubles as the draw alpha.
    pub life: f32,
    pub color: Rgb,
    /// Per-tick life decrement, drawn uniformly from `[0.01, 0.03)`.
    decay: f32,
}

impl TrailParticle {
    fn sample(rng: &mut SmallRng, at: Vec2) -> Self {
        let jitter = Vec2::new(
            rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER),
            rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER),
        );
        Self {
            position: at + jitter,
            velocity: Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
            radius: rng.gen_range(3.0..8.0),
            life: 1.0,
            color: TRAIL_PALETTE[rng.gen_range(0..TRAIL_PALETTE.len())],
            decay: rng.gen_range(0.01..0.03),
        }
    }

    fn advance(&mut self) {
        self.position += self.velocity;
        self.life -= self.decay;
        self.radius *= RADIUS_FALLOFF;
    }

    /// Whether the particle has reached its death condition.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0 || self.radius <= MIN_RADIUS
    }

    /// Draw alpha: remaining life clamped to non-negative.
    ///
    /// Life can dip slightly below zero on the death frame, which still gets
    /// one final draw.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.life.max(0.0)
    }
}

/// The cursor trail: spawn gate plus the active particle population.
#[derive(Debug)]
pub struct TrailEmitter {
    particles: Vec<TrailParticle>,
    gate: RateGate,
    rng: SmallRng,
}

impl TrailEmitter {
    /// Create an emitter seeded from entropy.
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Create an emitter with a reproducible random stream.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            particles: Vec::new(),
            gate: RateGate::new(SPAWN_INTERVAL),
            rng,
        }
    }

    /// Replace the spawn interval. Mostly useful for tests and demos.
    pub fn with_spawn_interval(mut self, interval: Duration) -> Self {
        self.gate = RateGate::new(interval);
        self
    }

    /// Spawn a burst of particles near `at`.
    ///
    /// Subject to the rate gate: calls arriving inside the spawn window add
    /// nothing and return 0, otherwise exactly [`PARTICLES_PER_SPAWN`]
    /// particles are added and that count is returned.
    pub fn spawn(&mut self, at: Vec2) -> usize {
        if !self.gate.try_pass() {
            return 0;
        }
        for _ in 0..PARTICLES_PER_SPAWN {
            let p = TrailParticle::sample(&mut self.rng, at);
            self.particles.push(p);
        }
        PARTICLES_PER_SPAWN
    }

    /// Advance every particle one tick, handing each to `draw` before its
    /// death check.
    ///
    /// The scan runs in reverse so removal never shifts an index that is
    /// still to be visited. A particle whose death condition holds this tick
    /// is drawn once more, then removed.
    pub fn tick_with<F: FnMut(&TrailParticle)>(&mut self, mut draw: F) {
        for i in (0..self.particles.len()).rev() {
            self.particles[i].advance();
            draw(&self.particles[i]);
            if self.particles[i].is_dead() {
                self.particles.remove(i);
            }
        }
    }

    /// Advance one tick without drawing.
    pub fn tick(&mut self) {
        self.tick_with(|_| {});
    }

    /// Advance one tick and render each particle as a glow disc.
    pub fn tick_and_render(&mut self, canvas: &mut impl Canvas) {
        self.tick_with(|p| canvas.glow_disc(p.position, p.radius, p.color, p.alpha()));
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the trail is currently empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The live population, oldest first.
    #[inline]
    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }
}

impl Default for TrailEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn ungated(seed: u64) -> TrailEmitter {
        TrailEmitter::with_seed(seed).with_spawn_interval(Duration::ZERO)
    }

    #[test]
    fn spawn_adds_exactly_three() {
        let mut trail = TrailEmitter::with_seed(1);
        assert_eq!(trail.spawn(Vec2::new(100.0, 100.0)), PARTICLES_PER_SPAWN);
        assert_eq!(trail.len(), 3);
    }

    #[test]
    fn spawn_is_rate_limited() {
        let mut trail = TrailEmitter::with_seed(2);
        assert_eq!(trail.spawn(Vec2::ZERO), 3);
        // Immediately inside the 16 ms window: rejected.
        assert_eq!(trail.spawn(Vec2::ZERO), 0);
        assert_eq!(trail.len(), 3);

        thread::sleep(Duration::from_millis(20));
        assert_eq!(trail.spawn(Vec2::ZERO), 3);
        assert_eq!(trail.len(), 6);
    }

    #[test]
    fn sampled_attributes_stay_in_range() {
        let mut trail = ungated(3);
        for _ in 0..40 {
            trail.spawn(Vec2::new(50.0, 50.0));
        }
        for p in trail.particles() {
            assert!((p.position.x - 50.0).abs() < SPAWN_JITTER + 1e-6);
            assert!((p.position.y - 50.0).abs() < SPAWN_JITTER + 1e-6);
            assert!(p.velocity.x >= -1.0 && p.velocity.x < 1.0);
            assert!(p.velocity.y >= -1.0 && p.velocity.y < 1.0);
            assert!(p.radius >= 3.0 && p.radius < 8.0);
            assert!(p.decay >= 0.01 && p.decay < 0.03);
            assert_eq!(p.life, 1.0);
            assert!(TRAIL_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn radius_follows_geometric_decay() {
        let mut trail = ungated(4);
        trail.spawn(Vec2::ZERO);
        let initial: Vec<f32> = trail.particles().iter().map(|p| p.radius).collect();

        for k in 1..=10 {
            trail.tick();
            for (p, r0) in trail.particles().iter().zip(&initial) {
                let expected = r0 * RADIUS_FALLOFF.powi(k);
                assert!((p.radius - expected).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn life_and_radius_never_increase() {
        let mut trail = ungated(5);
        trail.spawn(Vec2::ZERO);
        let mut prev: Vec<(f32, f32)> = trail
            .particles()
            .iter()
            .map(|p| (p.life, p.radius))
            .collect();

        for _ in 0..20 {
            trail.tick();
            if trail.is_empty() {
                break;
            }
            for (p, (life, radius)) in trail.particles().iter().zip(&prev) {
                assert!(p.life <= *life);
                assert!(p.radius <= *radius);
            }
            prev = trail
                .particles()
                .iter()
                .map(|p| (p.life, p.radius))
                .collect();
        }
    }

    #[test]
    fn all_particles_die_within_a_hundred_ticks() {
        // Decay is at least 0.01 per tick, so life crosses zero within
        // ceil(1 / 0.01) = 100 ticks even if the radius death never fires.
        let mut trail = ungated(6);
        trail.spawn(Vec2::new(10.0, 10.0));
        for _ in 0..100 {
            trail.tick();
        }
        assert!(trail.is_empty());
    }

    #[test]
    fn survivors_are_never_past_their_death_condition() {
        let mut trail = ungated(7);
        trail.spawn(Vec2::ZERO);
        for _ in 0..100 {
            trail.tick();
            for p in trail.particles() {
                assert!(!p.is_dead());
            }
        }
    }

    #[test]
    fn dying_particles_get_one_final_draw() {
        let mut trail = ungated(8);
        trail.spawn(Vec2::ZERO);

        // Every tick must draw exactly the pre-removal population, so a
        // particle removed this tick was still drawn this tick.
        while !trail.is_empty() {
            let before = trail.len();
            let mut drawn = 0;
            trail.tick_with(|_| drawn += 1);
            assert_eq!(drawn, before);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = ungated(9);
        let mut b = ungated(9);
        a.spawn(Vec2::new(1.0, 2.0));
        b.spawn(Vec2::new(1.0, 2.0));

        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.velocity, pb.velocity);
            assert_eq!(pa.radius, pb.radius);
            assert_eq!(pa.color, pb.color);
        }
    }
}
