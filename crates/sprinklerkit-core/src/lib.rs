//! # SprinklerKit Core
//!
//! Core types for SprinklerKit.
//! Provides the sketch-element data model shared with the persistence layer,
//! the sprinkler placement output record, and the unified error type.

pub mod error;
pub mod geometry;
pub mod placement;
pub mod sketch;

pub use error::{LayoutError, Result};
pub use geometry::{Bounds, Point};
pub use placement::SprinklerPlacement;
pub use sketch::{SketchGeometry, SketchKind, SketchShape};
