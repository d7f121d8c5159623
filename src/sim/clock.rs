//! Frame timing
//!
//! Turns a monotonically increasing time source into per-frame elapsed time.

/// Elapsed-time tracker; the first frame reports zero
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last: None, max_dt }
    }

    /// Record the current time (seconds) and return the elapsed time since
    /// the previous call, clamped to `[0, max_dt]`
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        dt.clamp(0.0, self.max_dt)
    }

    /// Forget the previous time so the next frame reports zero
    pub fn reset(&mut self) {
        self.last = None;
    }
}
