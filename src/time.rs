//! Frame timing and rate limiting.
//!
//! [`FrameClock`] is the single source of truth for time across the scene:
//! elapsed seconds, per-frame delta, frame index and a periodically refreshed
//! FPS estimate. A fixed delta can be installed for deterministic tests.
//!
//! [`RateGate`] suppresses repeated triggering inside a minimum time window;
//! the trail emitter uses one to cap spawning at roughly once per 16 ms no
//! matter how often pointer events arrive.
//!
//! # Example
//!
//! ```ignore
//! use neonfx::time::FrameClock;
//!
//! let mut clock = FrameClock::new();
//!
//! // In the frame loop:
//! let (elapsed, delta) = clock.update();
//! println!("frame {} at {:.2}s (+{:.4}s)", clock.frame(), elapsed, delta);
//! ```

use std::time::{Duration, Instant};

/// How often the FPS estimate is recomputed.
const FPS_WINDOW: Duration = Duration::from_millis(500);

/// Per-frame time tracking.
#[derive(Debug)]
pub struct FrameClock {
    /// When the clock was created.
    start: Instant,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Total elapsed time in seconds (cached for fast access).
    elapsed_secs: f32,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// FPS estimate, refreshed every [`FPS_WINDOW`].
    fps: f32,
    /// Frame count at the last FPS refresh.
    fps_frame_count: u64,
    /// Time of the last FPS refresh.
    fps_update_time: Instant,
    /// Fixed delta for deterministic updates (optional).
    fixed_delta: Option<f32>,
}

impl FrameClock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fixed_delta: None,
        }
    }

    /// Advance the clock by one frame. Call once per frame.
    ///
    /// Returns `(elapsed_time, delta_time)` for convenience.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();

        let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta);
        self.last_frame = now;

        self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= FPS_WINDOW {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        (self.elapsed_secs, self.delta_secs)
    }

    /// Total elapsed time in seconds since creation.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Time since the previous frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since creation.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Latest FPS estimate. Zero until the first refresh window has passed.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Install a fixed delta time, or `None` to use real frame timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimum-interval limiter.
///
/// `try_pass` answers whether enough time has elapsed since the last accepted
/// call; the first call always passes.
#[derive(Debug)]
pub struct RateGate {
    min_interval: Duration,
    last: Option<Instant>,
}

impl RateGate {
    /// Create a gate that accepts at most one call per `min_interval`.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    /// Accept or reject a call at the current instant.
    ///
    /// Accepting records the instant, so bursts of calls inside the window
    /// collapse to the first one.
    pub fn try_pass(&mut self) -> bool {
        let open = self
            .last
            .map_or(true, |last| last.elapsed() >= self.min_interval);
        if open {
            self.last = Some(Instant::now());
        }
        open
    }

    /// The configured minimum interval.
    #[inline]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clock_starts_at_frame_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn update_advances_frame_and_time() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        let (elapsed, delta) = clock.update();

        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn fixed_delta_overrides_real_timing() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(1.0 / 60.0));

        thread::sleep(Duration::from_millis(50));
        clock.update();

        let expected = 1.0 / 60.0;
        assert!((clock.delta() - expected).abs() < 0.0001);
    }

    #[test]
    fn gate_passes_first_call() {
        let mut gate = RateGate::new(Duration::from_millis(16));
        assert!(gate.try_pass());
    }

    #[test]
    fn gate_blocks_inside_window() {
        let mut gate = RateGate::new(Duration::from_millis(16));
        assert!(gate.try_pass());
        assert!(!gate.try_pass());
    }

    #[test]
    fn gate_reopens_after_window() {
        let mut gate = RateGate::new(Duration::from_millis(16));
        assert!(gate.try_pass());
        thread::sleep(Duration::from_millis(20));
        assert!(gate.try_pass());
    }

    #[test]
    fn zero_interval_gate_never_blocks() {
        let mut gate = RateGate::new(Duration::ZERO);
        assert!(gate.try_pass());
        assert!(gate.try_pass());
        assert!(gate.try_pass());
    }
}
