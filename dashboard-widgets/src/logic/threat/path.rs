//! SVG path data for projected country outlines

use std::fmt::Write as FmtWrite;

use super::projection::Mercator;
use super::topology::AreaFeature;

/// Longitude jump between consecutive points that is treated as an
/// antimeridian crossing rather than a real edge
const WRAP_THRESHOLD_DEG: f64 = 180.0;

/// `d` attribute for one feature; empty when it has no area
pub fn feature_path(feature: &AreaFeature, projection: &Mercator) -> String {
    let mut d = String::new();
    for polygon in &feature.polygons {
        for ring in polygon {
            append_ring(&mut d, ring, projection);
        }
    }
    d
}

fn append_ring(d: &mut String, ring: &[(f64, f64)], projection: &Mercator) {
    if ring.len() < 2 {
        return;
    }

    let mut previous_lon: Option<f64> = None;
    let mut crossed = false;
    for &(lon, lat) in ring {
        let (x, y) = projection.project(lon, lat);
        let command = match previous_lon {
            None => 'M',
            Some(prev) if (lon - prev).abs() > WRAP_THRESHOLD_DEG => {
                crossed = true;
                'M'
            }
            Some(_) => 'L',
        };
        let _ = write!(d, "{}{},{}", command, round2(x), round2(y));
        previous_lon = Some(lon);
    }
    // a ring split at the antimeridian cannot be closed back to its start
    if !crossed {
        d.push('Z');
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
