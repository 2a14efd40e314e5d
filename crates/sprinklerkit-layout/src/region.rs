//! Usable-area resolution.
//!
//! Turns the sketched shapes of a yard into one region: the union of all
//! plantable polygons minus the union of all obstacle polygons. Boolean
//! algebra is delegated to csgrs sketches; the resolved multipolygon is then
//! materialized into plain vertex rings for the placers.

use csgrs::sketch::Sketch;
use csgrs::traits::CSG;

use sprinklerkit_core::{Bounds, Point, SketchShape};

/// Consecutive ring vertices closer than this are collapsed into one.
const VERTEX_MERGE_EPS: f64 = 1e-5;

/// One connected piece of the usable area: an outer boundary plus any holes
/// punched by obstacles.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPolygon {
    pub outer: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

/// The usable planting area of a yard.
///
/// May be empty, one polygon with holes, or several disjoint polygons. Rings
/// are stored open (no closing duplicate vertex) in boundary traversal order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    polygons: Vec<RegionPolygon>,
}

impl Region {
    /// Resolves the usable area from a yard's sketch elements.
    ///
    /// Shapes with missing or non-polygon geometry are skipped, as are
    /// slope and label elements. An empty result is a valid region.
    pub fn resolve(shapes: &[SketchShape]) -> Region {
        let mut plantable: Vec<Sketch<()>> = Vec::new();
        let mut obstacles: Vec<Sketch<()>> = Vec::new();

        for shape in shapes {
            if !shape.kind.is_plantable() && !shape.kind.is_obstacle() {
                continue;
            }
            let Some(geometry) = &shape.geometry else {
                continue;
            };
            let Some(rings) = geometry.polygon_rings() else {
                continue;
            };
            let Some(sketch) = rings_to_sketch(&rings) else {
                continue;
            };

            if shape.kind.is_plantable() {
                plantable.push(sketch);
            } else {
                obstacles.push(sketch);
            }
        }

        let Some(mut usable) = union_all(plantable) else {
            return Region::default();
        };
        if let Some(obstacle_union) = union_all(obstacles) {
            usable = usable.difference(&obstacle_union);
        }

        Region::from_sketch(&usable)
    }

    /// Builds a region directly from resolved rings. Intended for callers
    /// that already hold boundary data (tests, renderers).
    pub fn from_polygons(polygons: Vec<RegionPolygon>) -> Region {
        Region { polygons }
    }

    fn from_sketch(sketch: &Sketch<()>) -> Region {
        let mut polygons = Vec::new();

        for poly in sketch.to_multipolygon().0 {
            let outer: Vec<Point> = clean_ring(poly.exterior().0.iter().map(|c| (c.x, c.y)));
            if outer.len() < 3 {
                continue;
            }

            let mut holes = Vec::new();
            for interior in poly.interiors() {
                let hole: Vec<Point> = clean_ring(interior.0.iter().map(|c| (c.x, c.y)));
                if hole.len() >= 3 {
                    holes.push(hole);
                }
            }

            polygons.push(RegionPolygon { outer, holes });
        }

        Region { polygons }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn polygons(&self) -> &[RegionPolygon] {
        &self.polygons
    }

    /// Bounding box over every outer ring, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut merged: Option<Bounds> = None;
        for poly in &self.polygons {
            if let Some(b) = Bounds::from_points(&poly.outer) {
                merged = Some(match merged {
                    Some(mut m) => {
                        m.merge(&b);
                        m
                    }
                    None => b,
                });
            }
        }
        merged
    }

    /// Even-odd containment: inside some outer ring and outside its holes.
    pub fn contains(&self, point: Point) -> bool {
        self.polygons.iter().any(|poly| {
            ring_contains(&poly.outer, point)
                && !poly.holes.iter().any(|hole| ring_contains(hole, point))
        })
    }
}

/// Builds a csgrs sketch from GeoJSON-style rings: the first ring is the
/// boundary, later rings are subtracted as holes. Returns `None` for
/// degenerate input (fewer than 3 distinct vertices).
fn rings_to_sketch(rings: &[Vec<Point>]) -> Option<Sketch<()>> {
    let mut iter = rings.iter();
    let outer = ring_points(iter.next()?)?;

    let mut sketch: Sketch<()> = Sketch::polygon(&outer, None);
    for hole in iter {
        if let Some(hole_points) = ring_points(hole) {
            sketch = sketch.difference(&Sketch::polygon(&hole_points, None));
        }
    }
    Some(sketch)
}

fn ring_points(ring: &[Point]) -> Option<Vec<[f64; 2]>> {
    let cleaned = clean_ring(ring.iter().map(|p| (p.x, p.y)));
    if cleaned.len() < 3 {
        return None;
    }
    Some(cleaned.iter().map(|p| [p.x, p.y]).collect())
}

/// Collapses near-duplicate consecutive vertices and drops the closing
/// duplicate so rings come out open.
fn clean_ring(coords: impl Iterator<Item = (f64, f64)>) -> Vec<Point> {
    let mut ring: Vec<Point> = Vec::new();

    for (x, y) in coords {
        if let Some(last) = ring.last() {
            if (x - last.x).hypot(y - last.y) < VERTEX_MERGE_EPS {
                continue;
            }
        }
        ring.push(Point::new(x, y));
    }

    if ring.len() > 1 {
        let first = ring[0];
        let last = ring[ring.len() - 1];
        if (first.x - last.x).hypot(first.y - last.y) < VERTEX_MERGE_EPS {
            ring.pop();
        }
    }

    ring
}

fn union_all(sketches: Vec<Sketch<()>>) -> Option<Sketch<()>> {
    let mut iter = sketches.into_iter();
    let first = iter.next()?;
    Some(iter.fold(first, |acc, s| acc.union(&s)))
}

/// Ray-cast point-in-ring test (even-odd rule).
fn ring_contains(ring: &[Point], p: Point) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;

    for i in 0..ring.len() {
        let pi = ring[i];
        let pj = ring[j];
        if ((pi.y > p.y) != (pj.y > p.y))
            && (p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}
