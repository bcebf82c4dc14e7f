//! Globe Geometry
//!
//! Per-frame layout for the decorative canvas globe. The DOM renderer
//! only paints what `GlobeState::next_frame` returns.

use std::f64::consts::PI;

use crate::constants;

/// Radial gradient parameters: (x0, y0, r0) → (x1, y1, r1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub x0: f64,
    pub y0: f64,
    pub r0: f64,
    pub x1: f64,
    pub y1: f64,
    pub r1: f64,
}

/// Axis-aligned ellipse centered on the globe, rotated by `rotation`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub radius_x: f64,
    pub radius_y: f64,
    pub rotation: f64,
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeFrame {
    pub width: f64,
    pub height: f64,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub glow: RadialGradient,
    pub glow_radius: f64,
    pub body: RadialGradient,
    pub latitudes: Vec<Ellipse>,
    pub longitudes: Vec<Ellipse>,
}

/// Mutable globe state owned by one canvas
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeState {
    width: f64,
    height: f64,
    rotation: f64,
}

impl GlobeState {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, rotation: 0.0 }
    }

    /// Resize the surface; rotation carries over
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Layout for the current frame, then advance the rotation.
    ///
    /// Returns `None` when the surface is too small to hold a sphere;
    /// the rotation still advances so resizing back resumes smoothly.
    pub fn next_frame(&mut self) -> Option<GlobeFrame> {
        let frame = layout(self.width, self.height, self.rotation);
        self.rotation += constants::GLOBE_ROTATION_STEP;
        frame
    }
}

/// Pure frame layout for a given size and rotation
pub fn layout(width: f64, height: f64, rotation: f64) -> Option<GlobeFrame> {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let r = cx.min(cy) - constants::GLOBE_MARGIN;
    if !(r > 0.0) {
        return None;
    }

    let glow = RadialGradient {
        x0: cx,
        y0: cy,
        r0: r * 0.2,
        x1: cx,
        y1: cy,
        r1: r * 1.1,
    };

    let body = RadialGradient {
        x0: cx - r * 0.3,
        y0: cy - r * 0.3,
        r0: r * 0.2,
        x1: cx,
        y1: cy,
        r1: r,
    };

    let latitudes = constants::GLOBE_LATITUDES
        .iter()
        .map(|lat| Ellipse {
            radius_x: r,
            radius_y: r * (lat * PI / 180.0).cos(),
            rotation: 0.0,
        })
        .collect();

    let longitudes = (0..constants::GLOBE_LONGITUDES)
        .map(|i| Ellipse {
            radius_x: r,
            radius_y: r * 0.3,
            rotation: rotation + (i as f64) * PI / 3.0,
        })
        .collect();

    Some(GlobeFrame {
        width,
        height,
        cx,
        cy,
        radius: r,
        glow,
        glow_radius: r * 1.1,
        body,
        latitudes,
        longitudes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_geometry() {
        let frame = layout(800.0, 420.0, 0.0).unwrap();
        assert_eq!(frame.cx, 400.0);
        assert_eq!(frame.cy, 210.0);
        assert_eq!(frame.radius, 190.0);
        assert!((frame.glow_radius - 209.0).abs() < 1e-9);
        assert!((frame.body.x0 - 343.0).abs() < 1e-9);
        assert_eq!(frame.latitudes.len(), 5);
        assert_eq!(frame.longitudes.len(), 6);

        // equator is a full circle, ±60° are half-height
        assert!((frame.latitudes[2].radius_y - 190.0).abs() < 1e-9);
        assert!((frame.latitudes[0].radius_y - 95.0).abs() < 1e-9);
        assert!((frame.latitudes[4].radius_y - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_longitudes_are_spaced_by_sixty_degrees() {
        let frame = layout(600.0, 420.0, 0.5).unwrap();
        for (i, ellipse) in frame.longitudes.iter().enumerate() {
            let expected = 0.5 + i as f64 * PI / 3.0;
            assert!((ellipse.rotation - expected).abs() < 1e-12);
            assert!((ellipse.radius_y - frame.radius * 0.3).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut globe = GlobeState::new(600.0, 420.0);
        let first = globe.next_frame().unwrap();
        let second = globe.next_frame().unwrap();
        assert_eq!(first.longitudes[0].rotation, 0.0);
        assert!((second.longitudes[0].rotation - 0.002).abs() < 1e-12);
        let third = globe.next_frame().unwrap();
        assert!((third.longitudes[0].rotation - 0.004).abs() < 1e-12);
    }

    #[test]
    fn test_resize_keeps_rotation() {
        let mut globe = GlobeState::new(600.0, 420.0);
        for _ in 0..10 {
            globe.next_frame();
        }
        globe.resize(300.0, 420.0);
        assert_eq!(globe.size(), (300.0, 420.0));
        let frame = globe.next_frame().unwrap();
        assert!((frame.longitudes[0].rotation - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_surface_skips_frame() {
        let mut globe = GlobeState::new(30.0, 420.0);
        assert!(globe.next_frame().is_none());
        globe.resize(600.0, 420.0);
        let frame = globe.next_frame().unwrap();
        assert!((frame.longitudes[0].rotation - 0.002).abs() < 1e-12);
        assert!(layout(0.0, 0.0, 0.0).is_none());
    }
}
