use std::time::Instant;

/// Interval between FPS samples in seconds
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Minimal frame clock - just tracks delta time
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame count over a fixed interval
#[derive(Debug, Default)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame; returns the new average when a sample completes
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed < FPS_UPDATE_INTERVAL {
            return None;
        }

        self.fps = self.frame_count as f32 / self.elapsed;
        self.frame_count = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    /// Last completed sample
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009);
    }

    #[test]
    fn fps_sampled_once_per_interval() {
        let mut counter = FpsCounter::new();

        for _ in 0..59 {
            assert_eq!(counter.record(1.0 / 60.0), None);
        }
        let fps = counter.record(1.0 / 60.0 + 0.001).unwrap();

        assert!((fps - 60.0).abs() < 0.1);
        assert_eq!(counter.fps(), fps);
    }

    #[test]
    fn fps_starts_at_zero() {
        assert_eq!(FpsCounter::new().fps(), 0.0);
    }
}
