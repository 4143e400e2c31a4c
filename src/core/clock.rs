use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started
    pub time: f32,
    /// Seconds since the previous tick
    pub delta: f32,
}

/// Host-owned frame clock. The camera never reads time itself;
/// the render loop ticks this once per frame and passes `delta` on.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_number: 0,
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) -> FrameInfo {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameInfo {
        let info = FrameInfo {
            number: self.frame_number,
            time: now.duration_since(self.start).as_secs_f32(),
            delta: now.duration_since(self.last_tick).as_secs_f32(),
        };
        self.last_tick = now;
        self.frame_number += 1;
        info
    }

    /// Restart delta measurement without touching elapsed time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over a fixed reporting interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    elapsed: f32,
    frames: u32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Count a frame, returns the average FPS once per interval
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < self.interval {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_clock_numbers_frames() {
        let mut clock = Clock::new();
        assert_eq!(clock.tick().number, 0);
        assert_eq!(clock.tick().number, 1);
    }

    #[test]
    fn test_clock_measures_delta() {
        let mut clock = Clock::new();
        let start = clock.start;

        let first = clock.tick_at(start + Duration::from_millis(10));
        assert!((first.delta - 0.010).abs() < 1e-4);

        let second = clock.tick_at(start + Duration::from_millis(25));
        assert!((second.delta - 0.015).abs() < 1e-4);
        assert!((second.time - 0.025).abs() < 1e-4);
    }

    #[test]
    fn test_fps_counter_reports_per_interval() {
        let mut fps = FpsCounter::new(1.0);
        for _ in 0..7 {
            assert_eq!(fps.tick(0.125), None);
        }
        assert_eq!(fps.tick(0.125), Some(8.0));
        assert_eq!(fps.tick(0.125), None);
    }
}
