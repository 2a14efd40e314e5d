//! Layout configuration.
//!
//! Throw radius and overlap factor are explicit parameters threaded through
//! every stage rather than process-wide constants, so layouts with different
//! policies can run concurrently without interference.

use serde::{Deserialize, Serialize};
use sprinklerkit_core::{LayoutError, Result};

/// Default throw radius in feet.
pub const DEFAULT_RADIUS: f64 = 10.0;
/// Default shrink applied to the throw radius for the interior coverage test.
pub const DEFAULT_OVERLAP_FACTOR: f64 = 0.95;
/// Default failsafe cap on emitted placements.
pub const DEFAULT_MAX_PLACEMENTS: usize = 1000;

/// Parameters for one layout run.
///
/// A single radius applies to every head in a plan; it doubles as the
/// head-to-head spacing along edges and across the interior grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Throw distance of every head, in feet.
    pub radius: f64,
    /// Interior circles are treated as slightly smaller than the throw
    /// radius so neighbors overlap instead of leaving dry seams.
    pub overlap_factor: f64,
    /// Upper bound on the total number of emitted placements. Exceeding it
    /// aborts the layout instead of truncating it.
    pub max_placements: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            overlap_factor: DEFAULT_OVERLAP_FACTOR,
            max_placements: DEFAULT_MAX_PLACEMENTS,
        }
    }
}

impl LayoutConfig {
    /// Creates a configuration with the given throw radius and defaults for
    /// the remaining parameters.
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Head-to-head spacing along edges and across the interior grid.
    pub fn spacing(&self) -> f64 {
        self.radius
    }

    /// Radius used by the interior coverage test.
    pub fn effective_radius(&self) -> f64 {
        self.radius * self.overlap_factor
    }

    /// Rejects non-positive or non-finite parameters before a layout run.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(LayoutError::InvalidConfig {
                reason: format!("throw radius must be positive and finite, got {}", self.radius),
            });
        }
        if !self.overlap_factor.is_finite()
            || self.overlap_factor <= 0.0
            || self.overlap_factor > 1.0
        {
            return Err(LayoutError::InvalidConfig {
                reason: format!(
                    "overlap factor must be in (0, 1], got {}",
                    self.overlap_factor
                ),
            });
        }
        if self.max_placements == 0 {
            return Err(LayoutError::InvalidConfig {
                reason: "placement cap must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
