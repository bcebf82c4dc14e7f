//! Easing curves and counter interpolation

/// Cubic ease-out: fast start, slow finish
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Cubic ease-in-out, the default curve for marker transitions
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Elapsed-time fraction clamped to [0, 1]
///
/// A non-positive duration counts as already finished.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || elapsed_ms.is_nan() {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// One integer counter animating from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub start: u64,
    pub end: u64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(start: u64, end: u64, duration_ms: f64) -> Self {
        Self { start, end, duration_ms }
    }

    /// Displayed value after `elapsed_ms`.
    ///
    /// Floors while running; exactly `end` once complete.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let t = progress(elapsed_ms, self.duration_ms);
        if t >= 1.0 {
            return self.end;
        }
        let start = self.start as f64;
        let range = self.end as f64 - start;
        let value = (start + range * ease_out_cubic(t)).floor();
        value.max(0.0) as u64
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        progress(elapsed_ms, self.duration_ms) >= 1.0
    }
}
