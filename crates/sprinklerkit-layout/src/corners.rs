//! Corner head placement.
//!
//! Walks the outer boundary of each region polygon and puts a wedge-arc head
//! at every convex corner, sized to exactly fill the exterior angle. Hole
//! boundaries are not corner-processed; concave and straight vertices are
//! left to the edge and interior placers.

use sprinklerkit_core::{Point, SprinklerPlacement};

use crate::config::LayoutConfig;
use crate::region::Region;

/// Edges shorter than this are treated as degenerate and skipped.
const MIN_EDGE_LEN: f64 = 1e-6;
/// Turn angles below this (degrees) mean the vertex is collinear.
const MIN_TURN_DEG: f64 = 1e-6;

/// Places wedge heads at the convex corners of every outer ring, in ring
/// traversal order.
pub fn place_corners(region: &Region, config: &LayoutConfig) -> Vec<SprinklerPlacement> {
    let mut heads = Vec::new();
    for poly in region.polygons() {
        place_ring_corners(&poly.outer, config, &mut heads);
    }
    heads
}

fn place_ring_corners(ring: &[Point], config: &LayoutConfig, out: &mut Vec<SprinklerPlacement>) {
    let n = ring.len();
    if n < 3 {
        return;
    }
    let area = signed_area(ring);

    for i in 0..n {
        let prev = ring[(i + n - 1) % n];
        let curr = ring[i];
        let next = ring[(i + 1) % n];

        let v1 = (curr.x - prev.x, curr.y - prev.y);
        let v2 = (next.x - curr.x, next.y - curr.y);

        let len1 = v1.0.hypot(v1.1);
        let len2 = v2.0.hypot(v2.1);
        if len1 < MIN_EDGE_LEN || len2 < MIN_EDGE_LEN {
            continue;
        }

        // Turn between the incoming and outgoing edge directions; the
        // interior angle at a convex vertex is 180 minus this turn.
        let cos_turn = ((v1.0 * v2.0 + v1.1 * v2.1) / (len1 * len2)).clamp(-1.0, 1.0);
        let turn = cos_turn.acos().to_degrees();

        if turn <= MIN_TURN_DEG || turn >= 180.0 {
            // Straight vertex or doubled-back spike.
            continue;
        }
        let cross = v1.0 * v2.1 - v1.1 * v2.0;
        if cross * area <= 0.0 {
            // Reflex vertex: the true interior angle is at least 180.
            continue;
        }

        // Spray arc needed to fill the exterior corner: 180 minus the
        // interior angle, which is the turn itself.
        let spray_angle = turn;

        let unit_v1 = (v1.0 / len1, v1.1 / len1);
        let unit_v2 = (v2.0 / len2, v2.1 / len2);
        let bisector = (-unit_v1.0 - unit_v2.0, -unit_v1.1 - unit_v2.1);
        let bisector_angle = bisector.1.atan2(bisector.0).to_degrees().rem_euclid(360.0);

        // Rotate the wedge so its arc is centered on the bisector.
        let direction = (bisector_angle + 90.0 - spray_angle / 2.0).rem_euclid(360.0);

        out.push(SprinklerPlacement::new(
            curr.x,
            curr.y,
            config.radius,
            spray_angle,
            direction,
        ));
    }
}

/// Shoelace signed area: positive for counterclockwise rings.
fn signed_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}
