//! Interior head placement.
//!
//! Scans the region's bounding box on a regular grid and drops a full-circle
//! head at every grid point that lies inside the usable area and is not
//! already watered by a previously placed head. Earlier stages' heads and
//! interior heads placed so far both count as coverage.

use sprinklerkit_core::{LayoutError, Point, Result, SprinklerPlacement};

use crate::config::LayoutConfig;
use crate::coverage::CoverageIndex;
use crate::region::Region;

/// Fills interior gaps with 360-degree heads.
///
/// `existing` is the full list of corner and edge placements; the placement
/// cap counts those together with the heads emitted here. Exceeding the cap
/// aborts with [`LayoutError::TooLarge`] rather than truncating the plan.
pub fn place_interior(
    region: &Region,
    existing: &[SprinklerPlacement],
    config: &LayoutConfig,
) -> Result<Vec<SprinklerPlacement>> {
    let Some(bounds) = region.bounds() else {
        return Ok(Vec::new());
    };

    let spacing = config.spacing();
    let mut index = CoverageIndex::new(config.effective_radius());
    for head in existing {
        index.insert(head.position());
    }

    let mut heads = Vec::new();

    let mut y = bounds.min_y + spacing / 2.0;
    while y < bounds.max_y {
        let mut x = bounds.min_x + spacing / 2.0;
        while x < bounds.max_x {
            let candidate = Point::new(x, y);
            if region.contains(candidate) && !index.is_covered(candidate) {
                let placed = existing.len() + heads.len() + 1;
                if placed > config.max_placements {
                    return Err(LayoutError::TooLarge {
                        placed,
                        cap: config.max_placements,
                    });
                }
                heads.push(SprinklerPlacement::full_circle(x, y, config.radius));
                index.insert(candidate);
            }
            x += spacing;
        }
        y += spacing;
    }

    Ok(heads)
}
