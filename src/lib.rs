//! # neonfx
//!
//! Neon canvas effects: a cursor-following glow trail, a drifting field of
//! mathematical symbols with proximity-connected edges, and a holographic
//! wireframe laptop, all simulated on the CPU and drawn through a small
//! 2D canvas abstraction.
//!
//! ## Quick Start
//!
//! ```ignore
//! use neonfx::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     let scene = Scene::new().with_symbol_count(80);
//!     neonfx::viewer::run(scene)
//! }
//! ```
//!
//! ## Headless use
//!
//! The simulation is independent of any window. Drive it yourself and record
//! the draw calls:
//!
//! ```ignore
//! use neonfx::prelude::*;
//!
//! let mut scene = Scene::new().with_seed(7);
//! let mut canvas = DisplayList::new();
//! scene.pointer_moved(Vec2::new(400.0, 300.0));
//! scene.frame(&mut canvas, Vec2::new(800.0, 600.0));
//! assert!(!canvas.is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! ### Populations
//!
//! Two independent particle populations share the surface and the per-frame
//! clock. The [`trail::TrailEmitter`] spawns short-lived glow particles along
//! the pointer's path (rate-limited to one burst per ~16 ms); the
//! [`field::SymbolField`] keeps a fixed-size population of drifting glyphs
//! alive forever by recycling anything that leaves the bottom edge back to
//! the top.
//!
//! ### The canvas port
//!
//! Components never rasterize. They issue fills, glow discs, lines and
//! rotated text against [`canvas::Canvas`]; the bundled viewer maps those
//! onto egui, and [`canvas::DisplayList`] records them for tests.
//!
//! ### Determinism
//!
//! Every randomized component owns a seedable generator. Seed the scene (or
//! an individual component) and the whole command stream is reproducible.

pub mod canvas;
pub mod error;
pub mod field;
pub mod input;
pub mod laptop;
pub mod scene;
pub mod time;
pub mod trail;
pub mod viewer;
pub mod visuals;

pub use canvas::{Canvas, DisplayList, DrawCmd};
pub use error::ViewerError;
pub use field::{SymbolField, SymbolParticle, DEFAULT_POPULATION, SYMBOLS};
pub use glam::Vec2;
pub use input::PointerTracker;
pub use laptop::LaptopHologram;
pub use scene::Scene;
pub use time::{FrameClock, RateGate};
pub use trail::{TrailEmitter, TrailParticle, PARTICLES_PER_SPAWN};
pub use viewer::Viewer;
pub use visuals::{Rgb, VisualConfig, ACCENT, BACKDROP, TRAIL_PALETTE};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use neonfx::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, DisplayList, DrawCmd};
    pub use crate::error::ViewerError;
    pub use crate::field::{SymbolField, SYMBOLS};
    pub use crate::input::PointerTracker;
    pub use crate::laptop::LaptopHologram;
    pub use crate::scene::Scene;
    pub use crate::time::FrameClock;
    pub use crate::trail::TrailEmitter;
    pub use crate::viewer::Viewer;
    pub use crate::visuals::{Rgb, VisualConfig, ACCENT, TRAIL_PALETTE};
    pub use glam::Vec2;
}
