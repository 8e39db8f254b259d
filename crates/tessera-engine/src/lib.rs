//! Tessera engine crate.
//!
//! A retained-mode compositor for indexed-color scenes: a tree of positioned
//! tile grids and groups is flattened into a single RGBA8 buffer and handed
//! to a presentation [`Surface`](display::Surface) once per refresh.
//!
//! Scene traversal is pure CPU work with no platform dependencies; the only
//! boundary crossing is the single `present` call at the end of
//! [`Display::refresh`](display::Display::refresh).

pub mod coords;
pub mod display;
pub mod error;
pub mod logging;
pub mod render;
pub mod scene;
