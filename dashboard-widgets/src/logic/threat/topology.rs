//! TopoJSON decoding
//!
//! Turns a topology (shared, optionally quantized arcs) into per-country
//! polygon rings in longitude/latitude degrees.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// A closed ring of (lon, lat) points
pub type Ring = Vec<(f64, f64)>;

/// Rings of one polygon: exterior first, then holes
pub type Polygon = Vec<Ring>;

#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    #[error("topology has no object named '{0}'")]
    MissingObject(String),
    #[error("arc index {0} out of range")]
    ArcIndex(i64),
}

// ============================================================================
// WIRE FORMAT
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub arcs: Vec<Vec<Vec<f64>>>,
    pub objects: HashMap<String, Geometry>,
}

/// Geometry object; ids and properties are not needed for drawing
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(flatten)]
    pub kind: GeometryKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum GeometryKind {
    GeometryCollection { geometries: Vec<Geometry> },
    Polygon { arcs: Vec<Vec<i64>> },
    MultiPolygon { arcs: Vec<Vec<Vec<i64>>> },
    LineString { arcs: Vec<i64> },
    MultiLineString { arcs: Vec<Vec<i64>> },
    Point { coordinates: Vec<f64> },
    MultiPoint { coordinates: Vec<Vec<f64>> },
}

// ============================================================================
// DECODED FEATURES
// ============================================================================

/// One area feature (a country) ready for projection
#[derive(Debug, Clone, PartialEq)]
pub struct AreaFeature {
    pub polygons: Vec<Polygon>,
}

impl Topology {
    /// Arcs with quantization and delta encoding removed
    pub fn decoded_arcs(&self) -> Vec<Ring> {
        self.arcs
            .iter()
            .map(|arc| {
                let mut x = 0.0;
                let mut y = 0.0;
                arc.iter()
                    .filter(|p| p.len() >= 2)
                    .map(|p| match &self.transform {
                        Some(t) => {
                            x += p[0];
                            y += p[1];
                            (x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1])
                        }
                        None => (p[0], p[1]),
                    })
                    .collect()
            })
            .collect()
    }

    /// Area features of the named object.
    ///
    /// A collection yields one feature per member; a single geometry yields one
    /// feature. Line and point members come back with no polygons.
    pub fn features(&self, object: &str) -> Result<Vec<AreaFeature>, TopologyError> {
        let geometry = self
            .objects
            .get(object)
            .ok_or_else(|| TopologyError::MissingObject(object.to_string()))?;

        let arcs = self.decoded_arcs();
        let members: Vec<&Geometry> = match &geometry.kind {
            GeometryKind::GeometryCollection { geometries } => geometries.iter().collect(),
            _ => vec![geometry],
        };

        members
            .into_iter()
            .map(|g| {
                Ok(AreaFeature {
                    polygons: polygons(&g.kind, &arcs)?,
                })
            })
            .collect()
    }
}

fn polygons(kind: &GeometryKind, arcs: &[Ring]) -> Result<Vec<Polygon>, TopologyError> {
    match kind {
        GeometryKind::Polygon { arcs: rings } => Ok(vec![polygon(rings, arcs)?]),
        GeometryKind::MultiPolygon { arcs: polys } => {
            polys.iter().map(|rings| polygon(rings, arcs)).collect()
        }
        // nested collections are flattened into one feature
        GeometryKind::GeometryCollection { geometries } => {
            let mut out = Vec::new();
            for g in geometries {
                out.extend(polygons(&g.kind, arcs)?);
            }
            Ok(out)
        }
        _ => Ok(Vec::new()),
    }
}

fn polygon(rings: &[Vec<i64>], arcs: &[Ring]) -> Result<Polygon, TopologyError> {
    rings.iter().map(|indices| ring(indices, arcs)).collect()
}

/// Stitch arcs into one ring.
///
/// Consecutive arcs share an endpoint, so the join point is kept once.
/// A negative index `~i` means arc `i` reversed. Rings shorter than four
/// points are padded with their first point.
fn ring(indices: &[i64], arcs: &[Ring]) -> Result<Ring, TopologyError> {
    let mut points: Ring = Vec::new();

    for &index in indices {
        let (arc_index, reversed) = if index < 0 { (!index, true) } else { (index, false) };
        let arc = usize::try_from(arc_index)
            .ok()
            .and_then(|i| arcs.get(i))
            .ok_or(TopologyError::ArcIndex(index))?;

        if !points.is_empty() {
            points.pop();
        }
        if reversed {
            points.extend(arc.iter().rev().copied());
        } else {
            points.extend(arc.iter().copied());
        }
    }

    if let Some(&first) = points.first() {
        while points.len() < 4 {
            points.push(first);
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two squares sharing an edge, quantized with delta encoding.
    ///
    /// arc 0: (1,0) → (1,1)                 shared edge
    /// arc 1: (1,1) → (0,1) → (0,0) → (1,0)   rest of the left square
    /// arc 2: (1,0) → (2,0) → (2,1) → (1,1)   rest of the right square
    const FIXTURE: &str = r#"{
        "type": "Topology",
        "transform": { "scale": [10, 5], "translate": [-100, -50] },
        "arcs": [
            [[1,0],[0,1]],
            [[1,1],[-1,0],[0,-1],[1,0]],
            [[1,0],[1,0],[0,1],[-1,0]]
        ],
        "objects": {
            "countries": {
                "type": "GeometryCollection",
                "geometries": [
                    { "type": "Polygon", "id": "001", "properties": {"name": "Left"}, "arcs": [[0, 1]] },
                    { "type": "MultiPolygon", "id": 2, "arcs": [[[2, -1]]] },
                    { "type": "Point", "coordinates": [0, 0] }
                ]
            }
        }
    }"#;

    fn fixture() -> Topology {
        serde_json::from_str(FIXTURE).unwrap()
    }

    #[test]
    fn test_decode_quantized_arcs() {
        let arcs = fixture().decoded_arcs();
        assert_eq!(arcs[0], vec![(-90.0, -50.0), (-90.0, -45.0)]);
        assert_eq!(arcs[1], vec![(-90.0, -45.0), (-100.0, -45.0), (-100.0, -50.0), (-90.0, -50.0)]);
    }

    #[test]
    fn test_ring_stitching() {
        let features = fixture().features("countries").unwrap();
        assert_eq!(features.len(), 3);

        let left = &features[0];
        assert_eq!(left.polygons.len(), 1);
        assert_eq!(
            left.polygons[0][0],
            vec![(-90.0, -50.0), (-90.0, -45.0), (-100.0, -45.0), (-100.0, -50.0), (-90.0, -50.0)]
        );
    }

    #[test]
    fn test_reversed_arc() {
        let features = fixture().features("countries").unwrap();
        let right = &features[1];
        let ring = &right.polygons[0][0];
        // arc 2 then arc 0 reversed, closing back at (1,0)
        assert_eq!(
            ring,
            &vec![(-90.0, -50.0), (-80.0, -50.0), (-80.0, -45.0), (-90.0, -45.0), (-90.0, -50.0)]
        );
    }

    #[test]
    fn test_points_have_no_area() {
        let features = fixture().features("countries").unwrap();
        assert!(features[2].polygons.is_empty());
    }

    #[test]
    fn test_missing_object() {
        let err = fixture().features("land").unwrap_err();
        assert_eq!(err, TopologyError::MissingObject("land".into()));
    }

    #[test]
    fn test_bad_arc_index() {
        let json = r#"{"type":"Topology","arcs":[[[0,0],[1,1]]],"objects":{"x":{"type":"Polygon","arcs":[[5]]}}}"#;
        let topology: Topology = serde_json::from_str(json).unwrap();
        assert_eq!(topology.features("x").unwrap_err(), TopologyError::ArcIndex(5));
    }

    #[test]
    fn test_short_ring_is_padded() {
        let json = r#"{"type":"Topology","arcs":[[[3,4],[5,6]]],"objects":{"x":{"type":"Polygon","arcs":[[0]]}}}"#;
        let topology: Topology = serde_json::from_str(json).unwrap();
        let features = topology.features("x").unwrap();
        assert_eq!(features[0].polygons[0][0], vec![(3.0, 4.0), (5.0, 6.0), (3.0, 4.0), (3.0, 4.0)]);
    }
}
