//! Sketch-element data model.
//!
//! Mirrors the wire format the persistence layer stores for a yard: each
//! element is a `{type, geometry, properties}` record where `geometry` is a
//! GeoJSON-shaped payload. Only plantable zones and obstacles participate in
//! layout generation; slopes and labels are presentation-only.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Category of a sketched yard element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SketchKind {
    FullSun,
    PartialShade,
    FullShade,
    Obstacle,
    Slope,
    Label,
}

impl SketchKind {
    /// Returns the display name of the element kind.
    pub fn name(&self) -> &'static str {
        match self {
            SketchKind::FullSun => "Full Sun",
            SketchKind::PartialShade => "Partial Shade",
            SketchKind::FullShade => "Full Shade",
            SketchKind::Obstacle => "Obstacle",
            SketchKind::Slope => "Slope",
            SketchKind::Label => "Label",
        }
    }

    /// True for the three sun-exposure categories that sprinklers must cover.
    pub fn is_plantable(&self) -> bool {
        matches!(
            self,
            SketchKind::FullSun | SketchKind::PartialShade | SketchKind::FullShade
        )
    }

    /// True when the element subtracts from the usable area.
    pub fn is_obstacle(&self) -> bool {
        matches!(self, SketchKind::Obstacle)
    }
}

/// GeoJSON-shaped geometry payload of a sketch element.
///
/// Coordinates are `[x, y]` pairs in the yard's shared planar system (feet).
/// Polygon rings are simple; the first ring is the outer boundary and any
/// further rings are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SketchGeometry {
    #[serde(alias = "point")]
    Point { coordinates: [f64; 2] },
    #[serde(alias = "Polyline")]
    LineString { coordinates: Vec<[f64; 2]> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

impl SketchGeometry {
    /// Polygon rings converted to point lists; `None` for non-polygon payloads.
    pub fn polygon_rings(&self) -> Option<Vec<Vec<Point>>> {
        match self {
            SketchGeometry::Polygon { coordinates } => Some(
                coordinates
                    .iter()
                    .map(|ring| ring.iter().map(|c| Point::new(c[0], c[1])).collect())
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Outer polygon ring, when this payload is a polygon with one.
    pub fn outer_ring(&self) -> Option<Vec<Point>> {
        match self {
            SketchGeometry::Polygon { coordinates } => coordinates
                .first()
                .map(|ring| ring.iter().map(|c| Point::new(c[0], c[1])).collect()),
            _ => None,
        }
    }
}

/// One sketched element of a yard plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchShape {
    #[serde(rename = "type")]
    pub kind: SketchKind,
    /// Missing geometry is tolerated; such shapes are skipped by the resolver.
    #[serde(default)]
    pub geometry: Option<SketchGeometry>,
    /// Opaque presentation properties (color, label text, rotation...).
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl SketchShape {
    pub fn new(kind: SketchKind, geometry: SketchGeometry) -> Self {
        Self {
            kind,
            geometry: Some(geometry),
            properties: serde_json::Map::new(),
        }
    }

    /// Convenience constructor for a polygon element from one outer ring.
    pub fn polygon(kind: SketchKind, ring: &[(f64, f64)]) -> Self {
        Self::new(
            kind,
            SketchGeometry::Polygon {
                coordinates: vec![ring.iter().map(|&(x, y)| [x, y]).collect()],
            },
        )
    }
}
