//! Mercator projection sized to the map viewport

use std::f64::consts::FRAC_PI_4;

use crate::constants;

/// Latitudes beyond this are clamped (square-world Mercator limit)
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    pub scale: f64,
    pub translate: (f64, f64),
}

impl Mercator {
    pub fn new(scale: f64, translate: (f64, f64)) -> Self {
        Self { scale, translate }
    }

    /// Projection used by the threat map for a `width` × `height` viewport
    pub fn for_viewport(width: f64, height: f64) -> Self {
        Self::new(
            width / constants::MAP_SCALE_DIVISOR,
            (width / 2.0, height / constants::MAP_TRANSLATE_Y_DIVISOR),
        )
    }

    /// Project (longitude, latitude) in degrees to screen pixels
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lambda = lon.to_radians();
        let phi = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = self.scale * lambda;
        let y = -self.scale * (FRAC_PI_4 + phi / 2.0).tan().ln();
        (x + self.translate.0, y + self.translate.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_origin_maps_to_translate() {
        let m = Mercator::for_viewport(620.0, 380.0);
        assert!((m.scale - 100.0).abs() < 1e-9);
        let (x, y) = m.project(0.0, 0.0);
        assert!((x - 310.0).abs() < 1e-9);
        assert!((y - 380.0 / 1.45).abs() < 1e-9);
    }

    #[test]
    fn test_north_is_up_east_is_right() {
        let m = Mercator::for_viewport(800.0, 380.0);
        let (x0, y0) = m.project(0.0, 0.0);
        let (x1, y1) = m.project(13.40, 52.52);
        assert!(x1 > x0);
        assert!(y1 < y0);

        let (xw, _) = m.project(-122.41, 37.77);
        assert!(xw < x0);
    }

    #[test]
    fn test_antimeridian_span() {
        let m = Mercator::new(100.0, (0.0, 0.0));
        let (west, _) = m.project(-180.0, 0.0);
        let (east, _) = m.project(180.0, 0.0);
        assert!((east - west - 2.0 * PI * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_poles_are_finite() {
        let m = Mercator::for_viewport(800.0, 380.0);
        let (_, north) = m.project(0.0, 90.0);
        let (_, south) = m.project(0.0, -90.0);
        assert!(north.is_finite());
        assert!(south.is_finite());
        assert!((north - m.translate.1 + m.scale * PI).abs() < 1e-6);
    }
}
