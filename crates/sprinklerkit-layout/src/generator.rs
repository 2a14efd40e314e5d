//! Layout orchestration.
//!
//! Runs the placers in their fixed order - corners, edges, interior - and
//! assembles the sanitized plan. The concatenation order is observable:
//! downstream head numbering follows it, and the interior filler's coverage
//! test sees every head placed before it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sprinklerkit_core::{Bounds, LayoutError, Result, SketchShape, SprinklerPlacement};

use crate::config::LayoutConfig;
use crate::corners::place_corners;
use crate::edges::place_edges;
use crate::interior::place_interior;
use crate::region::Region;
use crate::sanitize::sanitize_plan;

/// Output of one layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// Bounding box of the usable area; `None` when the area is empty.
    pub bounds: Option<Bounds>,
    /// Placements in emission order: corners, then edges, then interior.
    pub sprinklers: Vec<SprinklerPlacement>,
}

impl LayoutPlan {
    /// Plan for an empty usable area.
    pub fn empty() -> Self {
        Self {
            bounds: None,
            sprinklers: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sprinklers.is_empty()
    }
}

/// Generates a sprinkler layout from a yard's sketch elements.
pub fn generate_layout(shapes: &[SketchShape], config: &LayoutConfig) -> Result<LayoutPlan> {
    config.validate()?;
    let region = Region::resolve(shapes);
    generate_region_layout(&region, config)
}

/// Generates a sprinkler layout for an already-resolved usable area.
pub fn generate_region_layout(region: &Region, config: &LayoutConfig) -> Result<LayoutPlan> {
    config.validate()?;

    if region.is_empty() {
        debug!("usable area is empty, nothing to place");
        return Ok(LayoutPlan::empty());
    }

    let mut sprinklers = place_corners(region, config);
    ensure_cap(sprinklers.len(), config)?;
    debug!("placed {} corner heads", sprinklers.len());

    let edge_heads = place_edges(region, config);
    sprinklers.extend(edge_heads);
    ensure_cap(sprinklers.len(), config)?;
    debug!("{} heads after edge placement", sprinklers.len());

    let interior_heads = place_interior(region, &sprinklers, config)?;
    sprinklers.extend(interior_heads);

    info!("generated sprinkler layout with {} heads", sprinklers.len());

    Ok(sanitize_plan(LayoutPlan {
        bounds: region.bounds(),
        sprinklers,
    }))
}

fn ensure_cap(placed: usize, config: &LayoutConfig) -> Result<()> {
    if placed > config.max_placements {
        return Err(LayoutError::TooLarge {
            placed,
            cap: config.max_placements,
        });
    }
    Ok(())
}
