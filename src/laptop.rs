//! The holographic laptop centerpiece.
//!
//! A stylized laptop (base slab, tilted screen with a glowing display, a
//! grid of key caps and a surrounding cloud of holographic points) rendered
//! as accent-colored wireframe through the shared 2D canvas. The model sways
//! on both axes, the display glow pulses, and three colored lights pulse at
//! their own frequencies, modulating the wireframe brightness.
//!
//! Everything is projected through a fixed perspective camera; there is no
//! retained 3D scene. The whole subsystem is optional: a scene built without
//! it simply never calls in here.

use glam::{Mat4, Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::canvas::Canvas;
use crate::visuals::{Rgb, ACCENT};

/// Sway phase advance per tick.
const SWAY_STEP: f32 = 0.01;

/// Point-cloud yaw advance per tick.
const CLOUD_YAW_STEP: f32 = 0.001;

/// Holographic points surrounding the model.
const CLOUD_POINTS: usize = 100;

/// Half-extent of the cube the cloud points are scattered in.
const CLOUD_HALF: f32 = 5.0;

/// Screen tilt, leaning the display slightly back.
const SCREEN_TILT: f32 = -0.2;

/// Vertical field of view of the fixed camera.
const CAMERA_FOV: f32 = 75.0 * std::f32::consts::PI / 180.0;

/// Magenta of the second pulsing light.
const MAGENTA: Rgb = Rgb::new(255, 0, 255);

/// The rotating laptop hologram.
#[derive(Debug)]
pub struct LaptopHologram {
    phase: f32,
    cloud_yaw: f32,
    cloud: Vec<Vec3>,
    /// Wireframe segments in model space, tilt baked in.
    edges: Vec<(Vec3, Vec3)>,
    /// Key-cap centers on the base, drawn as small glow points.
    keys: Vec<Vec3>,
    /// Display quad corners, for the pulsing glow outline.
    display: [Vec3; 4],
}

impl LaptopHologram {
    /// Build the model with an entropy-seeded point cloud.
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Build the model with a reproducible point cloud.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: SmallRng) -> Self {
        let cloud = (0..CLOUD_POINTS)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-CLOUD_HALF..CLOUD_HALF),
                    rng.gen_range(-CLOUD_HALF..CLOUD_HALF),
                    rng.gen_range(-CLOUD_HALF..CLOUD_HALF),
                )
            })
            .collect();

        let mut edges = Vec::new();
        // Base slab under the keyboard.
        box_edges(
            Mat4::from_translation(Vec3::new(0.0, -0.1, 0.0)),
            Vec3::new(2.0, 0.1, 1.5),
            &mut edges,
        );
        // Screen slab and its emissive frame, both tilted back.
        let screen_at = Mat4::from_translation(Vec3::new(0.0, 1.5, -1.4))
            * Mat4::from_rotation_x(SCREEN_TILT);
        box_edges(screen_at, Vec3::new(1.9, 1.25, 0.05), &mut edges);
        let frame_at = Mat4::from_translation(Vec3::new(0.0, 1.5, -1.45))
            * Mat4::from_rotation_x(SCREEN_TILT);
        box_edges(frame_at, Vec3::new(1.95, 1.3, 0.025), &mut edges);

        // 8x5 grid of key caps.
        let mut keys = Vec::new();
        for i in 0..8 {
            for j in 0..5 {
                keys.push(Vec3::new(
                    -1.4 + i as f32 * 0.4,
                    0.1,
                    -0.8 + j as f32 * 0.4,
                ));
            }
        }

        let display_at = Mat4::from_translation(Vec3::new(0.0, 1.5, -1.35))
            * Mat4::from_rotation_x(SCREEN_TILT);
        let display = [
            display_at.transform_point3(Vec3::new(-1.75, 1.1, 0.0)),
            display_at.transform_point3(Vec3::new(1.75, 1.1, 0.0)),
            display_at.transform_point3(Vec3::new(1.75, -1.1, 0.0)),
            display_at.transform_point3(Vec3::new(-1.75, -1.1, 0.0)),
        ];

        Self {
            phase: 0.0,
            cloud_yaw: 0.0,
            cloud,
            edges,
            keys,
            display,
        }
    }

    /// Advance sway and cloud rotation one tick.
    pub fn tick(&mut self) {
        self.phase += SWAY_STEP;
        self.cloud_yaw += CLOUD_YAW_STEP;
    }

    /// Current sway phase in radians-ish model time.
    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Pulsing alpha of the display glow.
    #[inline]
    pub fn display_alpha(&self) -> f32 {
        0.2 + (self.phase * 2.0).sin() * 0.1
    }

    /// Intensities of the cyan, magenta and green lights.
    ///
    /// The green light holds steady; the other two pulse.
    #[inline]
    pub fn light_pulse(&self) -> [f32; 3] {
        [
            1.0 + self.phase.sin() * 0.3,
            0.8 + (self.phase * 1.5).sin() * 0.2,
            0.6,
        ]
    }

    fn group_rotation(&self) -> Mat4 {
        Mat4::from_rotation_y((self.phase * 0.3).sin() * 0.3)
            * Mat4::from_rotation_x((self.phase * 0.2).sin() * 0.1)
    }

    /// Project and draw the whole model onto `canvas`.
    pub fn render(&self, canvas: &mut impl Canvas, extent: Vec2) {
        let camera = Projector::new(extent);
        let model = self.group_rotation();
        let [cyan_pulse, magenta_pulse, _] = self.light_pulse();

        // Wireframe, brightened and dimmed by the cyan light.
        let wire_alpha = (0.5 * cyan_pulse).min(1.0);
        for (a, b) in &self.edges {
            let a = camera.project(model.transform_point3(*a));
            let b = camera.project(model.transform_point3(*b));
            if let (Some(a), Some(b)) = (a, b) {
                canvas.line(a, b, ACCENT, wire_alpha, 1.0);
            }
        }

        // Display outline plus its pulsing glow.
        let corners: Vec<Option<Vec2>> = self
            .display
            .iter()
            .map(|v| camera.project(model.transform_point3(*v)))
            .collect();
        for i in 0..4 {
            if let (Some(a), Some(b)) = (corners[i], corners[(i + 1) % 4]) {
                canvas.line(a, b, ACCENT, self.display_alpha() + 0.2, 1.5);
            }
        }
        let display_center = self.display.iter().sum::<Vec3>() / 4.0;
        if let Some(center) = camera.project(model.transform_point3(display_center)) {
            if let Some(top) = camera.project(model.transform_point3(self.display[0])) {
                canvas.glow_disc(center, center.distance(top), ACCENT, self.display_alpha());
            }
        }

        // Key caps, faint under the magenta light.
        let key_alpha = (0.15 * magenta_pulse).min(1.0);
        for key in &self.keys {
            if let Some(p) = camera.project(model.transform_point3(*key)) {
                canvas.glow_disc(p, 2.0, MAGENTA, key_alpha);
            }
        }

        // Holographic point cloud, spinning independently of the sway.
        let cloud_model = model * Mat4::from_rotation_y(self.cloud_yaw);
        for point in &self.cloud {
            if let Some(p) = camera.project(cloud_model.transform_point3(*point)) {
                canvas.glow_disc(p, 1.5, ACCENT, 0.6);
            }
        }
    }
}

impl Default for LaptopHologram {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed perspective camera mapping model space onto the surface.
struct Projector {
    view_proj: Mat4,
    extent: Vec2,
}

impl Projector {
    fn new(extent: Vec2) -> Self {
        let extent = extent.max(Vec2::ONE);
        let aspect = extent.x / extent.y;
        let view = Mat4::look_at_rh(Vec3::new(0.0, 1.0, 6.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(CAMERA_FOV, aspect, 0.1, 1000.0);
        Self {
            view_proj: proj * view,
            extent,
        }
    }

    /// Project a world point to surface coordinates.
    ///
    /// Returns `None` for points at or behind the camera plane.
    fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.extent.x,
            (1.0 - ndc.y) * 0.5 * self.extent.y,
        ))
    }
}

/// Append the twelve wireframe edges of a box with half-extents `half`,
/// transformed by `at`.
fn box_edges(at: Mat4, half: Vec3, out: &mut Vec<(Vec3, Vec3)>) {
    let corner = |x: f32, y: f32, z: f32| {
        at.transform_point3(Vec3::new(x * half.x, y * half.y, z * half.z))
    };
    let c = [
        corner(-1.0, -1.0, -1.0),
        corner(1.0, -1.0, -1.0),
        corner(1.0, 1.0, -1.0),
        corner(-1.0, 1.0, -1.0),
        corner(-1.0, -1.0, 1.0),
        corner(1.0, -1.0, 1.0),
        corner(1.0, 1.0, 1.0),
        corner(-1.0, 1.0, 1.0),
    ];
    const PAIRS: [(usize, usize); 12] = [
        (0, 1), (1, 2), (2, 3), (3, 0), // back face
        (4, 5), (5, 6), (6, 7), (7, 4), // front face
        (0, 4), (1, 5), (2, 6), (3, 7), // connecting edges
    ];
    for (a, b) in PAIRS {
        out.push((c[a], c[b]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCmd};

    const EXTENT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn tick_advances_phase() {
        let mut laptop = LaptopHologram::with_seed(1);
        laptop.tick();
        laptop.tick();
        assert!((laptop.phase() - 2.0 * SWAY_STEP).abs() < 1e-6);
    }

    #[test]
    fn display_pulse_follows_the_formula() {
        let mut laptop = LaptopHologram::with_seed(2);
        for _ in 0..100 {
            laptop.tick();
        }
        let t = laptop.phase();
        assert!((laptop.display_alpha() - (0.2 + (t * 2.0).sin() * 0.1)).abs() < 1e-6);

        let [cyan, magenta, green] = laptop.light_pulse();
        assert!((cyan - (1.0 + t.sin() * 0.3)).abs() < 1e-6);
        assert!((magenta - (0.8 + (t * 1.5).sin() * 0.2)).abs() < 1e-6);
        assert_eq!(green, 0.6);
    }

    #[test]
    fn origin_projects_inside_the_surface() {
        let camera = Projector::new(EXTENT);
        let p = camera.project(Vec3::ZERO).expect("origin visible");
        assert!(p.x > 0.0 && p.x < EXTENT.x);
        assert!(p.y > 0.0 && p.y < EXTENT.y);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let camera = Projector::new(EXTENT);
        // The camera sits at z = 6 looking toward -z; z = 100 is behind it.
        assert!(camera.project(Vec3::new(0.0, 0.0, 100.0)).is_none());
    }

    #[test]
    fn render_emits_wireframe_and_cloud() {
        let laptop = LaptopHologram::with_seed(3);
        let mut list = DisplayList::new();
        laptop.render(&mut list, EXTENT);

        let lines = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .count();
        let discs = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCmd::GlowDisc { .. }))
            .count();

        // Three boxes of twelve edges each, plus the display outline.
        assert!(lines >= 36);
        // Keys and most cloud points are in front of the camera.
        assert!(discs > 40);
    }

    #[test]
    fn degenerate_extent_does_not_panic() {
        let laptop = LaptopHologram::with_seed(4);
        let mut list = DisplayList::new();
        laptop.render(&mut list, Vec2::ZERO);
    }
}
