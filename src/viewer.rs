//! Windowed host for the effect scene.
//!
//! [`run`] opens an eframe window and drives a [`Scene`] at the display's
//! repaint cadence: every update samples the pointer, executes one frame
//! through the [`PainterCanvas`] adapter and requests the next repaint, so
//! the loop is always bound to a host frame boundary, never free-running.
//! A stopped scene closes the viewport instead of rescheduling.
//!
//! `PainterCanvas` maps the canvas primitives onto egui's `Painter`: fills
//! and lines directly, glow discs as a stack of concentric circles with a
//! gaussian falloff, and symbols as galleys rotated about their midpoint.

use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Pos2, Rect, Sense, Stroke};
use glam::Vec2;
use tracing::info;

use crate::canvas::Canvas;
use crate::error::ViewerError;
use crate::input::PointerTracker;
use crate::scene::Scene;
use crate::visuals::{Rgb, BACKDROP};

/// Circle layers approximating one radial-gradient glow disc.
const GLOW_STEPS: usize = 8;

fn color32(color: Rgb, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, a)
}

/// [`Canvas`] implementation painting into an egui layer.
///
/// Positions arriving from the scene are surface-local; `origin` shifts them
/// into the panel's screen rect.
pub struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl<'a> PainterCanvas<'a> {
    /// Wrap a painter whose drawable area starts at `origin`.
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn pos(&self, p: Vec2) -> Pos2 {
        Pos2::new(self.origin.x + p.x, self.origin.y + p.y)
    }
}

impl Canvas for PainterCanvas<'_> {
    fn fill(&mut self, extent: Vec2, color: Rgb, alpha: f32) {
        let rect = Rect::from_min_size(self.origin, egui::vec2(extent.x, extent.y));
        self.painter.rect_filled(rect, 0.0, color32(color, alpha));
    }

    fn glow_disc(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        // Largest, faintest layer first so the bright core paints on top.
        let center = self.pos(center);
        for i in (0..GLOW_STEPS).rev() {
            let t = (i + 1) as f32 / GLOW_STEPS as f32;
            let falloff = (-2.5 * t * t).exp();
            let layer_alpha = alpha * falloff * (2.0 / GLOW_STEPS as f32);
            self.painter
                .circle_filled(center, radius * t, color32(color, layer_alpha));
        }
        self.painter
            .circle_filled(center, radius * 0.25, color32(color, alpha));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32) {
        self.painter.line_segment(
            [self.pos(from), self.pos(to)],
            Stroke::new(width, color32(color, alpha)),
        );
    }

    fn symbol(&mut self, center: Vec2, text: &'static str, size: f32, angle: f32, color: Rgb, alpha: f32) {
        let fill = color32(color, alpha);
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), FontId::monospace(size), fill);
        // TextShape rotates around its anchor, so place the anchor where the
        // rotated galley's top-left corner lands to keep the glyph centered.
        let half = galley.size() / 2.0;
        let offset = Rot2::from_angle(angle) * -half;
        let anchor = self.pos(center) + offset;
        self.painter
            .add(TextShape::new(anchor, galley, fill).with_angle(angle));
    }
}

/// The eframe application wrapping a scene.
pub struct Viewer {
    scene: Scene,
    pointer: PointerTracker,
}

impl Viewer {
    /// Wrap a scene for windowed display.
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            pointer: PointerTracker::new(),
        }
    }
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.scene.is_running() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(color32(BACKDROP, 1.0)))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::hover());
                let rect = response.rect;

                let local = response
                    .hover_pos()
                    .map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y));
                if let Some(moved_to) = self.pointer.sample(local) {
                    self.scene.pointer_moved(moved_to);
                }

                let mut canvas = PainterCanvas::new(&painter, rect.min);
                self.scene
                    .frame(&mut canvas, Vec2::new(rect.width(), rect.height()));
            });

        // Self-reschedule: one frame per host repaint, for the scene's lifetime.
        ctx.request_repaint();
    }
}

/// Open a window and run `scene` until it stops or the window closes.
pub fn run(scene: Scene) -> Result<(), ViewerError> {
    info!("starting viewer");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("neonfx"),
        ..Default::default()
    };
    eframe::run_native(
        "neonfx",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(scene)))),
    )?;
    Ok(())
}
