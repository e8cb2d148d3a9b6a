//! The drifting mathematical-symbol field.
//!
//! [`SymbolField`] maintains a fixed-size population of labeled particles that
//! sink down the surface while swaying horizontally and slowly rotating. A
//! particle that drifts past the bottom edge is recycled to the top with a
//! fresh horizontal position and a re-rolled symbol; its speed, font size,
//! opacity and angular drift survive the wrap, so the population never grows
//! or shrinks.
//!
//! Two extra passes run over the population each frame:
//!
//! - [`SymbolField::draw_edges`] connects every pair of particles closer than
//!   150 units with a faint line. The pair scan is brute-force O(N²); at the
//!   default population of 80 that is 3 160 distance checks per frame.
//! - [`SymbolField::repel`] nudges particles near the pointer away from it,
//!   without touching their stored drift parameters.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::canvas::Canvas;
use crate::visuals::ACCENT;

/// Symbols a field particle can carry. Shared by reference; never mutated.
pub const SYMBOLS: [&str; 45] = [
    "π", "Σ", "∫", "∂", "∞", "α", "β", "γ", "θ", "λ", "μ", "Δ", "∇",
    "∑", "∏", "√", "∛", "≈", "≠", "≤", "≥", "±", "∓", "×", "÷",
    "sin", "cos", "tan", "log", "ln", "lim", "f(x)", "dx", "dy",
    "∈", "∉", "⊂", "⊃", "∪", "∩", "∅", "ℝ", "ℂ", "ℕ", "ℤ",
];

/// Default population size.
pub const DEFAULT_POPULATION: usize = 80;

/// Pairs closer than this get a connecting edge.
pub const LINK_DISTANCE: f32 = 150.0;

/// Particles inside this radius of the pointer are pushed away.
pub const REPEL_RADIUS: f32 = 100.0;

/// Fraction of the pointer offset applied per repel call.
const REPEL_STEP: f32 = 0.01;

/// Particles wrap once they are this far below the bottom edge, and re-enter
/// the same distance above the top.
const WRAP_MARGIN: f32 = 50.0;

/// Horizontal sway amplitude per tick.
const SWAY_STEP: f32 = 0.5;

/// Opacity of connecting edges.
const EDGE_ALPHA: f32 = 0.05;

/// Stroke width of connecting edges.
const EDGE_WIDTH: f32 = 1.0;

/// One drifting symbol.
///
/// Everything except position, heading and symbol is fixed at creation and
/// survives wraps.
#[derive(Debug, Clone)]
pub struct SymbolParticle {
    pub position: Vec2,
    pub symbol: &'static str,
    /// Downward drift per tick, in `[0.2, 0.7)`.
    pub speed: f32,
    /// Glyph size in surface units, in `[12, 20)`.
    pub font_size: f32,
    /// Fixed draw alpha, in `[0.1, 0.4)`.
    pub opacity: f32,
    /// Drives both the horizontal sway and the glyph rotation.
    pub heading: f32,
    /// Signed heading increment per tick, in `[-0.01, 0.01)`.
    drift: f32,
}

impl SymbolParticle {
    fn sample(rng: &mut SmallRng, extent: Vec2) -> Self {
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..extent.x.max(1.0)),
                rng.gen_range(0.0..extent.y.max(1.0)),
            ),
            symbol: SYMBOLS[rng.gen_range(0..SYMBOLS.len())],
            speed: rng.gen_range(0.2..0.7),
            font_size: rng.gen_range(12.0..20.0),
            opacity: rng.gen_range(0.1..0.4),
            heading: rng.gen_range(0.0..std::f32::consts::TAU),
            drift: rng.gen_range(-0.01..0.01),
        }
    }
}

/// Fixed-size population of drifting symbols.
#[derive(Debug)]
pub struct SymbolField {
    particles: Vec<SymbolParticle>,
    rng: SmallRng,
}

impl SymbolField {
    /// Create a field of `count` particles scattered over `extent`, seeded
    /// from entropy.
    pub fn new(count: usize, extent: Vec2) -> Self {
        Self::from_rng(count, extent, SmallRng::from_entropy())
    }

    /// Create a field with a reproducible random stream.
    pub fn with_seed(count: usize, extent: Vec2, seed: u64) -> Self {
        Self::from_rng(count, extent, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(count: usize, extent: Vec2, mut rng: SmallRng) -> Self {
        let particles = (0..count)
            .map(|_| SymbolParticle::sample(&mut rng, extent))
            .collect();
        Self { particles, rng }
    }

    /// Advance every particle one tick against the current surface extent.
    ///
    /// The extent is taken per call rather than cached, so a resized surface
    /// is picked up on the very next tick.
    pub fn tick(&mut self, extent: Vec2) {
        for p in &mut self.particles {
            p.position.y += p.speed;
            p.position.x += p.heading.sin() * SWAY_STEP;
            p.heading += p.drift;

            if p.position.y > extent.y + WRAP_MARGIN {
                p.position.y = -WRAP_MARGIN;
                p.position.x = self.rng.gen_range(0.0..extent.x.max(1.0));
                p.symbol = SYMBOLS[self.rng.gen_range(0..SYMBOLS.len())];
            }
        }
    }

    /// Push particles within [`REPEL_RADIUS`] of `pointer` away from it by 1%
    /// of the offset vector. Stored speed and drift are untouched.
    pub fn repel(&mut self, pointer: Vec2) {
        for p in &mut self.particles {
            let offset = pointer - p.position;
            if offset.length() < REPEL_RADIUS {
                p.position -= offset * REPEL_STEP;
            }
        }
    }

    /// Draw every symbol at its position, rotated by its heading.
    pub fn render(&self, canvas: &mut impl Canvas) {
        for p in &self.particles {
            canvas.symbol(p.position, p.symbol, p.font_size, p.heading, ACCENT, p.opacity);
        }
    }

    /// Draw one faint line per unordered pair of particles closer than
    /// [`LINK_DISTANCE`].
    pub fn draw_edges(&self, canvas: &mut impl Canvas) {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].position;
                let b = self.particles[j].position;
                if a.distance(b) < LINK_DISTANCE {
                    canvas.line(a, b, ACCENT, EDGE_ALPHA, EDGE_WIDTH);
                }
            }
        }
    }

    /// Population size. Constant for the field's lifetime.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field was built with zero particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The population, in creation order.
    #[inline]
    pub fn particles(&self) -> &[SymbolParticle] {
        &self.particles
    }
}
