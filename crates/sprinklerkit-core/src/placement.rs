//! Sprinkler placement output record.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// One sprinkler head produced by the layout engine.
///
/// `angle` is the spray arc in degrees: 360 for interior heads, 180 for edge
/// heads, and the exterior-corner wedge (0..180) for corner heads.
/// `direction` is the arc start in degrees counterclockwise from +X; it is
/// conventionally 0 when `angle` is 360.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SprinklerPlacement {
    pub x: f64,
    pub y: f64,
    /// Throw distance in feet.
    pub radius: f64,
    pub angle: f64,
    pub direction: f64,
}

impl SprinklerPlacement {
    pub fn new(x: f64, y: f64, radius: f64, angle: f64, direction: f64) -> Self {
        Self {
            x,
            y,
            radius,
            angle,
            direction,
        }
    }

    /// Full-circle head; direction is meaningless and pinned to 0.
    pub fn full_circle(x: f64, y: f64, radius: f64) -> Self {
        Self::new(x, y, radius, 360.0, 0.0)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_full_circle(&self) -> bool {
        self.angle >= 360.0
    }
}
