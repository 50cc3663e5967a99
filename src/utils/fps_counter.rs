use std::time::Instant;

/// Length of one averaging window, in seconds.
const WINDOW_SECONDS: f32 = 1.0;

/// Frame-rate meter averaged over one-second windows.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    last_update: Instant,
    frames_in_window: u32,
    window_time: f32,
    pub current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frames_in_window: 0,
            window_time: 0.0,
            current_fps: 0.0,
        }
    }

    /// Counts one frame against the wall clock.
    pub fn update(&mut self) -> Option<f32> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;
        self.record_frame(dt)
    }

    /// Counts one frame that took `dt` seconds. Returns the new average when a
    /// window closes.
    pub fn record_frame(&mut self, dt: f32) -> Option<f32> {
        self.frames_in_window += 1;
        self.window_time += dt.max(0.0);

        if self.window_time < WINDOW_SECONDS {
            return None;
        }

        self.current_fps = self.frames_in_window as f32 / self.window_time;
        self.frames_in_window = 0;
        self.window_time = 0.0;
        Some(self.current_fps)
    }

    /// Average frame time of the last closed window, in milliseconds.
    #[must_use]
    pub fn frame_time_ms(&self) -> f32 {
        if self.current_fps > 0.0 {
            1000.0 / self.current_fps
        } else {
            0.0
        }
    }
}
