use anyhow::Result;

use crate::render::Frame;

/// External presentation target consumed by [`Display`](super::Display).
///
/// Implementations live in the host (a winit window, an HTML canvas, a
/// memory-mapped framebuffer); the engine never looks behind this trait.
pub trait Surface {
    /// Surface width in pixels, queried once at display construction.
    fn width(&self) -> u32;

    /// Surface height in pixels, queried once at display construction.
    fn height(&self) -> u32;

    /// Shows `frame` at offset (0, 0), covering the full surface.
    ///
    /// `frame.bytes()` is row-major RGBA8 of length `width * height * 4`.
    /// Called exactly once per refresh; errors propagate verbatim to the
    /// caller of [`Display::refresh`](super::Display::refresh) with no retry
    /// and no fallback rendering path.
    fn present(&mut self, frame: &Frame) -> Result<()>;
}
