//! The 2D drawing surface the effects render through.
//!
//! The simulation never touches pixels directly. Each component issues draw
//! calls against the [`Canvas`] trait and the host decides how to rasterize
//! them: the bundled viewer forwards to an egui `Painter`, while tests and
//! headless callers record into a [`DisplayList`].
//!
//! The trait is deliberately small: the four primitives below are everything
//! the effects need.
//!
//! # Example
//!
//! ```ignore
//! use neonfx::canvas::{Canvas, DisplayList};
//! use neonfx::visuals::BACKDROP;
//! use glam::Vec2;
//!
//! let mut list = DisplayList::new();
//! list.fill(Vec2::new(800.0, 600.0), BACKDROP, 0.1);
//! assert_eq!(list.commands().len(), 1);
//! ```

use glam::Vec2;

use crate::visuals::Rgb;

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Translucent rectangle covering the surface from the origin to `extent`.
    Fill { extent: Vec2, color: Rgb, alpha: f32 },
    /// Radial-gradient disc: fully opaque at the center, transparent at the rim.
    GlowDisc {
        center: Vec2,
        radius: f32,
        color: Rgb,
        alpha: f32,
    },
    /// Stroked line segment.
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgb,
        alpha: f32,
        width: f32,
    },
    /// Center-aligned text rotated around its own midpoint.
    Symbol {
        center: Vec2,
        text: &'static str,
        size: f32,
        angle: f32,
        color: Rgb,
        alpha: f32,
    },
}

/// Output port of the effect scene.
///
/// Coordinates are surface-local with the origin at the top-left corner and
/// y growing downward. Alpha is in `[0, 1]`.
pub trait Canvas {
    /// Wash the whole surface with a translucent color.
    fn fill(&mut self, extent: Vec2, color: Rgb, alpha: f32);

    /// Draw a glow disc (radial gradient, opaque center to transparent rim).
    fn glow_disc(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);

    /// Draw a stroked line segment.
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32);

    /// Draw `text` centered on `center`, rotated by `angle` radians.
    fn symbol(&mut self, center: Vec2, text: &'static str, size: f32, angle: f32, color: Rgb, alpha: f32);
}

/// A [`Canvas`] that records draw calls instead of rasterizing them.
///
/// Used by the test suite to assert on exactly what a frame drew, and usable
/// by any host that wants to replay the commands against its own surface.
#[derive(Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCmd>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in issue order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Number of recorded commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DisplayList {
    fn fill(&mut self, extent: Vec2, color: Rgb, alpha: f32) {
        self.commands.push(DrawCmd::Fill { extent, color, alpha });
    }

    fn glow_disc(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.commands.push(DrawCmd::GlowDisc {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            color,
            alpha,
            width,
        });
    }

    fn symbol(&mut self, center: Vec2, text: &'static str, size: f32, angle: f32, color: Rgb, alpha: f32) {
        self.commands.push(DrawCmd::Symbol {
            center,
            text,
            size,
            angle,
            color,
            alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::{ACCENT, BACKDROP};

    #[test]
    fn records_commands_in_issue_order() {
        let mut list = DisplayList::new();
        list.fill(Vec2::new(100.0, 50.0), BACKDROP, 0.1);
        list.line(Vec2::ZERO, Vec2::new(10.0, 0.0), ACCENT, 0.05, 1.0);
        list.glow_disc(Vec2::new(5.0, 5.0), 4.0, ACCENT, 1.0);

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCmd::Fill { .. }));
        assert!(matches!(list.commands()[1], DrawCmd::Line { .. }));
        assert!(matches!(list.commands()[2], DrawCmd::GlowDisc { .. }));
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut list = DisplayList::new();
        list.symbol(Vec2::ZERO, "π", 14.0, 0.3, ACCENT, 0.2);
        assert!(!list.is_empty());
        list.clear();
        assert!(list.is_empty());
    }
}
