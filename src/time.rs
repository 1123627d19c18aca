//! Frame timing.
//!
//! [`FrameClock`] is the stage's single source of truth for elapsed time,
//! per-frame delta, frame count, and a periodically refreshed FPS estimate.
//! A fixed delta can be installed for deterministic runs: with one set, both
//! delta *and* elapsed advance by the fixed amount per tick, so simulations
//! that sample elapsed time (the rope's idle sway) replay identically.

use std::time::{Duration, Instant};

/// How often the FPS estimate refreshes.
const FPS_WINDOW: Duration = Duration::from_millis(500);

/// Wall-clock tracking for a frame loop.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
    elapsed: f32,
    delta: f32,
    frame: u64,
    fixed_delta: Option<f32>,
    fps: f32,
    fps_window_start: Instant,
    fps_window_frames: u64,
}

impl FrameClock {
    /// Start the clock at zero elapsed time.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            elapsed: 0.0,
            delta: 0.0,
            frame: 0,
            fixed_delta: None,
            fps: 0.0,
            fps_window_start: now,
            fps_window_frames: 0,
        }
    }

    /// Advance one frame. Returns `(elapsed, delta)` in seconds.
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        match self.fixed_delta {
            Some(step) => {
                self.delta = step;
                self.elapsed += step;
            }
            None => {
                self.delta = now.duration_since(self.last_tick).as_secs_f32();
                self.elapsed = now.duration_since(self.start).as_secs_f32();
            }
        }
        self.last_tick = now;
        self.frame += 1;

        self.fps_window_frames += 1;
        let window = now.duration_since(self.fps_window_start);
        if window >= FPS_WINDOW {
            self.fps = self.fps_window_frames as f32 / window.as_secs_f32();
            self.fps_window_frames = 0;
            self.fps_window_start = now;
        }

        (self.elapsed, self.delta)
    }

    /// Seconds since the clock started (or sum of fixed deltas).
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds covered by the latest tick.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Ticks so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Smoothed frames per second; zero until the first window closes.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Install or clear a fixed per-tick delta for deterministic stepping.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_at_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn wall_clock_tick_advances() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        let (elapsed, delta) = clock.tick();
        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn fixed_delta_is_fully_deterministic() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(1.0 / 60.0));
        for _ in 0..60 {
            clock.tick();
        }
        assert_eq!(clock.frame(), 60);
        assert!((clock.elapsed() - 1.0).abs() < 1e-4);
        assert!((clock.delta() - 1.0 / 60.0).abs() < 1e-6);
    }
}
