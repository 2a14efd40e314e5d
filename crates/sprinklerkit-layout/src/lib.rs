//! # SprinklerKit Layout
//!
//! This crate computes sprinkler-head placements for a yard from its sketched
//! plantable zones and obstacles.
//!
//! ## Pipeline
//!
//! ```text
//! SketchShape list
//!   └── Region (plantable union minus obstacle union, via csgrs booleans)
//!         ├── Corner placer  (wedge heads at convex boundary corners)
//!         ├── Edge placer    (180-degree heads along boundary segments)
//!         └── Interior fill  (360-degree heads on an uncovered grid)
//! ```
//!
//! The three placers run in that fixed order; the interior fill tests
//! candidate grid points against every head placed so far. The whole
//! computation is a pure function of its inputs: no I/O, no shared state,
//! recomputed from scratch on every request.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprinklerkit_layout::{generate_layout, LayoutConfig};
//!
//! let plan = generate_layout(&shapes, &LayoutConfig::default())?;
//! for head in &plan.sprinklers {
//!     println!("({}, {}) arc {}", head.x, head.y, head.angle);
//! }
//! ```

pub mod config;
pub mod corners;
pub mod coverage;
pub mod edges;
pub mod generator;
pub mod interior;
pub mod region;
pub mod sanitize;

pub use config::LayoutConfig;
pub use corners::place_corners;
pub use coverage::CoverageIndex;
pub use edges::place_edges;
pub use generator::{generate_layout, generate_region_layout, LayoutPlan};
pub use interior::place_interior;
pub use region::{Region, RegionPolygon};
