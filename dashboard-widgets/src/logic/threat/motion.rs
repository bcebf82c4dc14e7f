//! Marker motion: position tweens and the looping pulse ring

use crate::constants;
use crate::logic::easing::{ease_cubic_in_out, progress};

/// Animated move between two screen points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    /// A tween that is already at rest on `at`
    pub fn settled(at: (f64, f64)) -> Self {
        Self { from: at, to: at, start_ms: 0.0, duration_ms: 0.0 }
    }

    pub fn new(from: (f64, f64), to: (f64, f64), start_ms: f64, duration_ms: f64) -> Self {
        Self { from, to, start_ms, duration_ms }
    }

    pub fn position(&self, now_ms: f64) -> (f64, f64) {
        let t = ease_cubic_in_out(progress(now_ms - self.start_ms, self.duration_ms));
        (
            self.from.0 + (self.to.0 - self.from.0) * t,
            self.from.1 + (self.to.1 - self.from.1) * t,
        )
    }

    pub fn is_settled(&self, now_ms: f64) -> bool {
        progress(now_ms - self.start_ms, self.duration_ms) >= 1.0
    }

    /// Start a new move from wherever the marker is at `now_ms`
    pub fn retarget(&self, to: (f64, f64), now_ms: f64, duration_ms: f64) -> Self {
        Self::new(self.position(now_ms), to, now_ms, duration_ms)
    }
}

/// Ring radius and opacity at a point in the pulse loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseFrame {
    pub radius: f64,
    pub opacity: f64,
}

/// Pulse state `elapsed_ms` after the ring was created.
///
/// Each period expands the ring 4 → 14 while fading 0.8 → 0, then snaps back.
pub fn pulse_at(elapsed_ms: f64) -> PulseFrame {
    let period = constants::PULSE_PERIOD_MS;
    let phase = elapsed_ms.max(0.0) % period;
    let t = ease_cubic_in_out(phase / period);
    PulseFrame {
        radius: constants::PULSE_START_RADIUS
            + (constants::PULSE_END_RADIUS - constants::PULSE_START_RADIUS) * t,
        opacity: constants::PULSE_START_OPACITY * (1.0 - t),
    }
}

/// SVG `transform` value for a marker group
pub fn translate(position: (f64, f64)) -> String {
    format!("translate({}, {})", position.0, position.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_endpoints() {
        let tween = Tween::new((0.0, 0.0), (100.0, 50.0), 1000.0, 400.0);
        assert_eq!(tween.position(1000.0), (0.0, 0.0));
        assert_eq!(tween.position(1200.0), (50.0, 25.0));
        assert_eq!(tween.position(1400.0), (100.0, 50.0));
        assert_eq!(tween.position(9000.0), (100.0, 50.0));
        assert!(!tween.is_settled(1399.0));
        assert!(tween.is_settled(1400.0));
    }

    #[test]
    fn test_settled_tween_never_moves() {
        let tween = Tween::settled((3.0, 4.0));
        assert_eq!(tween.position(0.0), (3.0, 4.0));
        assert!(tween.is_settled(0.0));
    }

    #[test]
    fn test_retarget_mid_flight() {
        let tween = Tween::new((0.0, 0.0), (100.0, 0.0), 0.0, 400.0);
        let next = tween.retarget((0.0, 0.0), 200.0, 400.0);
        assert_eq!(next.from, (50.0, 0.0));
        assert_eq!(next.position(600.0), (0.0, 0.0));
    }

    #[test]
    fn test_pulse_cycle() {
        let start = pulse_at(0.0);
        assert_eq!(start.radius, 4.0);
        assert!((start.opacity - 0.8).abs() < 1e-12);

        let middle = pulse_at(750.0);
        assert!((middle.radius - 9.0).abs() < 1e-9);
        assert!((middle.opacity - 0.4).abs() < 1e-9);

        let late = pulse_at(1499.0);
        assert!(late.radius > 13.9);
        assert!(late.opacity < 0.01);

        // resets and repeats
        assert_eq!(pulse_at(1500.0), start);
        assert_eq!(pulse_at(3000.0 + 750.0), middle);
    }

    #[test]
    fn test_translate_format() {
        assert_eq!(translate((10.5, 20.0)), "translate(10.5, 20)");
    }
}
