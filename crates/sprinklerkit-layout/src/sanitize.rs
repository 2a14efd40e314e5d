//! Numeric sanitation at the core boundary.
//!
//! Downstream serialization treats the plan as plain JSON, which has no
//! representation for NaN or infinity. Every float leaving the engine is
//! therefore scrubbed: non-finite values become 0.0.

use sprinklerkit_core::{Bounds, SprinklerPlacement};

use crate::generator::LayoutPlan;

/// Replaces a non-finite value with 0.0.
pub fn sanitize_value(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub fn sanitize_bounds(bounds: Bounds) -> Bounds {
    Bounds::new(
        sanitize_value(bounds.min_x),
        sanitize_value(bounds.min_y),
        sanitize_value(bounds.max_x),
        sanitize_value(bounds.max_y),
    )
}

pub fn sanitize_placement(head: SprinklerPlacement) -> SprinklerPlacement {
    SprinklerPlacement::new(
        sanitize_value(head.x),
        sanitize_value(head.y),
        sanitize_value(head.radius),
        sanitize_value(head.angle),
        sanitize_value(head.direction),
    )
}

/// Scrubs every float in an outgoing plan.
pub fn sanitize_plan(plan: LayoutPlan) -> LayoutPlan {
    LayoutPlan {
        bounds: plan.bounds.map(sanitize_bounds),
        sprinklers: plan
            .sprinklers
            .into_iter()
            .map(sanitize_placement)
            .collect(),
    }
}
