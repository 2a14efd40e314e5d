//! # SprinklerKit
//!
//! A layout planning engine for residential irrigation systems: users sketch
//! a yard's plantable zones and obstacles, and the engine computes sprinkler
//! head placements that cover the usable area with minimal overlap.
//!
//! ## Architecture
//!
//! SprinklerKit is organized as a workspace with multiple crates:
//!
//! 1. **sprinklerkit-core** - Sketch data model, placements, errors
//! 2. **sprinklerkit-layout** - Usable-area resolution and head placement
//! 3. **sprinklerkit-visualizer** - SVG rendering of layout plans
//! 4. **sprinklerkit** - Main binary that integrates all crates
//!
//! ## Features
//!
//! - **Usable-area resolution**: union of plantable zones minus obstacles,
//!   with holes and disjoint pieces handled
//! - **Corner-aware placement**: wedge sprays sized to convex corners instead
//!   of wasteful full circles
//! - **Edge and interior coverage**: half-circle heads along boundaries plus
//!   grid fill of interior gaps
//! - **Failsafe cap**: oversized layouts fail fast instead of hanging

pub use sprinklerkit_layout as layout;
pub use sprinklerkit_visualizer as visualizer;

pub use sprinklerkit_core::{
    Bounds, LayoutError, Point, Result, SketchGeometry, SketchKind, SketchShape,
    SprinklerPlacement,
};

pub use sprinklerkit_layout::{
    generate_layout, generate_region_layout, LayoutConfig, LayoutPlan, Region,
};

pub use sprinklerkit_visualizer::{render_layout, SvgOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
