//! Coordinate and color types shared across the scene tree and renderer.
//!
//! Canonical space:
//! - Integer pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! The compositor only ever translates, so [`Point`] doubles as a position
//! and as an accumulated parent offset.

mod color;
mod point;

pub use color::Color;
pub use point::Point;
