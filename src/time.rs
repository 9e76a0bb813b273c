//! Host-side repeating timer for the economy tick.
//!
//! `draw_web()` calls at ~60fps with variable delta. TickTimer turns the
//! wall clock into "a tick is due" signals at a fixed period. A late frame
//! yields a single late tick; periods missed while the tab was stalled are
//! dropped, never replayed.

/// Period of the economy tick.
pub const TICK_PERIOD_MS: f64 = 1000.0;

pub struct TickTimer {
    period_ms: f64,
    /// Milliseconds elapsed since the last fired tick
    accumulator: f64,
    /// Total ticks fired since creation
    total_ticks: u64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl TickTimer {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed wall-clock timestamp (from `Date.now()` or similar).
    /// Returns true when a tick is due this frame.
    ///
    /// Call this once per draw frame.
    pub fn update(&mut self, now_ms: f64) -> bool {
        let delta = match self.last_timestamp {
            // Clock going backwards counts as no time passing
            Some(prev) => (now_ms - prev).max(0.0),
            None => 0.0, // First frame starts the timer
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        if self.accumulator < self.period_ms {
            return false;
        }
        // Keep the phase of the current period but drop whole missed periods.
        self.accumulator %= self.period_ms;
        self.total_ticks += 1;
        true
    }

    #[cfg(test)]
    fn total_ticks(&self) -> u64 {
        self.total_ticks
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(TICK_PERIOD_MS)
    }
}
