//! # SprinklerKit Visualizer
//!
//! Renders a resolved usable area and its sprinkler placements as a
//! standalone SVG document: the planted region as a filled polygon with
//! obstacle holes knocked out, wedge sectors for arc heads, circles for
//! full-circle heads, and a center dot per head.

pub mod svg;

pub use svg::{render_layout, SvgOptions};
