use crate::coords::Color;

/// Destination pixel buffer for one render pass.
///
/// Layout: row-major RGBA8, 4 bytes per pixel, `width * height * 4` bytes
/// total. The buffer length is fixed at construction; [`clear`](Frame::clear)
/// re-zeroes it in place so repeated refreshes reuse the allocation.
///
/// A zeroed frame is fully transparent black — pixels skipped by every node
/// (clipped, hidden, or palette-transparent) stay at `[0, 0, 0, 0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Allocates a zeroed `width` x `height` frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw RGBA8 bytes, exactly `width * height * 4` long.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Re-zeroes every byte without reallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Whether a signed destination coordinate lands inside the frame.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Writes `color` at `(x, y)` with full opacity (alpha 255).
    ///
    /// Callers clip first; `(x, y)` must be inside the frame.
    #[inline]
    pub fn put_opaque(&mut self, x: u32, y: u32, color: Color) {
        debug_assert!(x < self.width && y < self.height, "put_opaque out of bounds");
        let off = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[off] = color.r();
        self.pixels[off + 1] = color.g();
        self.pixels[off + 2] = color.b();
        self.pixels[off + 3] = 255;
    }
}
