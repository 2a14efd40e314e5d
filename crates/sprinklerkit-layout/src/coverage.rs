//! Coverage testing for interior fill.
//!
//! A candidate point is covered when any existing head center lies within
//! the effective radius. This uniform hash-grid index answers that query
//! with the same accept set as a scan over every center, at bucket cost:
//! cell size equals the query radius, so every center within range of a
//! candidate lives in the 3x3 cell neighborhood around it.

use std::collections::HashMap;

use sprinklerkit_core::Point;

/// Uniform-grid index over head centers.
#[derive(Debug)]
pub struct CoverageIndex {
    cell: f64,
    radius_sq: f64,
    cells: HashMap<(i64, i64), Vec<Point>>,
}

impl CoverageIndex {
    /// Creates an index answering "is any center within `radius`?" queries.
    /// `radius` must be positive and finite.
    pub fn new(radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius > 0.0,
            "coverage radius must be positive and finite, got {radius}"
        );
        Self {
            cell: radius,
            radius_sq: radius * radius,
            cells: HashMap::new(),
        }
    }

    fn key(&self, p: Point) -> (i64, i64) {
        (
            (p.x / self.cell).floor() as i64,
            (p.y / self.cell).floor() as i64,
        )
    }

    /// Adds a head center to the index.
    pub fn insert(&mut self, p: Point) {
        let key = self.key(p);
        self.cells.entry(key).or_default().push(p);
    }

    /// True when some indexed center lies within the coverage radius of `p`,
    /// boundary inclusive.
    pub fn is_covered(&self, p: Point) -> bool {
        let (cx, cy) = self.key(p);

        for ix in (cx - 1)..=(cx + 1) {
            for iy in (cy - 1)..=(cy + 1) {
                let Some(points) = self.cells.get(&(ix, iy)) else {
                    continue;
                };
                for q in points {
                    let dx = q.x - p.x;
                    let dy = q.y - p.y;
                    if dx * dx + dy * dy <= self.radius_sq {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Number of indexed centers.
    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
