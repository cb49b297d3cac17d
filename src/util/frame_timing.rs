//! Per-frame timing for the viewer and web render loops.

use web_time::Instant;

/// Frame delta and smoothed FPS for the render loop.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

/// Longest frame delta handed to the camera, so a stalled window does not
/// cause a jump when it resumes.
const MAX_FRAME_DT: f32 = 0.1;

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a new frame timer starting now.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Call once per frame. Returns the seconds since the previous call,
    /// capped at 0.1 s.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(frame_time)
    }

    /// Fold a measured frame time into the FPS average.
    fn record(&mut self, frame_time: f32) -> f32 {
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(MAX_FRAME_DT)
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_converges_toward_frame_rate() {
        let mut timing = FrameTiming::new();
        for _ in 0..400 {
            let _ = timing.record(1.0 / 30.0);
        }
        assert!((timing.fps() - 30.0).abs() < 0.5);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut timing = FrameTiming::new();
        assert_eq!(timing.record(2.0), MAX_FRAME_DT);
        assert!((timing.record(0.016) - 0.016).abs() < 1e-6);
        assert_eq!(timing.record(0.0), 0.0);
    }
}
