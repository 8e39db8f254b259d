//! Display driver and the presentation boundary.
//!
//! This module defines the stable interface between the pure compositing
//! core and whatever actually shows pixels (a window, a canvas, a
//! framebuffer). The core's whole obligation is to produce a correctly
//! sized, correctly ordered RGBA8 buffer and hand it to the [`Surface`]
//! exactly once per refresh; everything else stays on the host's side of the
//! boundary.

mod driver;
mod surface;

pub use driver::{Display, DisplayConfig};
pub use surface::Surface;
