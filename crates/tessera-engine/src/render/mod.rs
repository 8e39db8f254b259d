//! CPU rasterization target.
//!
//! Scene nodes paint into a [`Frame`]: a flat RGBA8 buffer plus its
//! dimensions. Nodes clip themselves against the frame bounds before
//! writing, so a `Frame` never grows, shrinks, or errors during a render
//! pass.

mod frame;

pub use frame::Frame;
