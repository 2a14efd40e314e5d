//! Edge head placement.
//!
//! Subdivides every boundary segment at head-to-head spacing and places a
//! 180-degree head at each interior subdivision point, sprayed toward the
//! planted side. Segment endpoints are never placed here; they coincide with
//! corners.

use sprinklerkit_core::{Point, SprinklerPlacement};

use crate::config::LayoutConfig;
use crate::region::Region;

/// Places half-circle heads along every boundary ring, outer rings and hole
/// rings alike.
pub fn place_edges(region: &Region, config: &LayoutConfig) -> Vec<SprinklerPlacement> {
    let mut heads = Vec::new();
    for poly in region.polygons() {
        place_ring_edges(&poly.outer, config, &mut heads);
        for hole in &poly.holes {
            place_ring_edges(hole, config, &mut heads);
        }
    }
    heads
}

fn place_ring_edges(ring: &[Point], config: &LayoutConfig, out: &mut Vec<SprinklerPlacement>) {
    let n = ring.len();
    if n < 2 {
        return;
    }
    let spacing = config.spacing();

    for i in 0..n {
        let start = ring[i];
        let end = ring[(i + 1) % n];

        let length = start.distance_to(&end);
        let num_heads = ((length / spacing).floor() as usize).max(1);
        if num_heads < 2 {
            // Edge shorter than twice the spacing: corners alone cover it.
            continue;
        }

        let dx = (end.x - start.x) / num_heads as f64;
        let dy = (end.y - start.y) / num_heads as f64;

        let edge_angle = (end.y - start.y).atan2(end.x - start.x).to_degrees();
        let direction = edge_angle + 90.0;
        // Rotate another quarter turn so the half-plane spray faces inward.
        let direction = (direction + 90.0).rem_euclid(360.0);

        for j in 1..num_heads {
            out.push(SprinklerPlacement::new(
                start.x + dx * j as f64,
                start.y + dy * j as f64,
                config.radius,
                180.0,
                direction,
            ));
        }
    }
}
