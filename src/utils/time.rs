use std::time::{Duration, Instant};

/// Wall-clock frame timer.
///
/// The app runner ticks it once per redraw; the elapsed seconds are what the
/// animator receives as its query time.
#[derive(Debug, Clone)]
pub struct Timer {
    start_time: Instant,
    last_tick: Instant,
    /// Time between the two most recent ticks.
    pub delta: Duration,
    /// Time from creation (or the last [`reset`](Self::reset)) to the most recent tick.
    pub elapsed: Duration,
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_tick: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Ticks against an explicit instant. Instants earlier than the previous
    /// tick produce a zero delta.
    pub fn tick_at(&mut self, now: Instant) {
        self.delta = now.saturating_duration_since(self.last_tick);
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.last_tick = now;
        self.frame_count += 1;
    }

    /// Restarts the clock; used once the window exists so that window
    /// creation time is not counted as animation time.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[inline]
    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_at_accumulates_elapsed_and_counts_frames() {
        let mut timer = Timer::new();
        let origin = timer.start_time;

        timer.tick_at(origin + Duration::from_millis(250));
        timer.tick_at(origin + Duration::from_millis(750));

        assert_eq!(timer.frame_count, 2);
        assert_eq!(timer.delta, Duration::from_millis(500));
        assert!((timer.elapsed_seconds() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn backwards_instant_gives_zero_delta() {
        let mut timer = Timer::new();
        let origin = timer.start_time;
        timer.tick_at(origin + Duration::from_secs(1));
        timer.tick_at(origin);
        assert_eq!(timer.delta, Duration::ZERO);
    }
}
