use crate::error::Error;

use super::SharedBitmap;

/// 2-D grid of `u8` palette indices.
///
/// Storage is a flat row-major buffer whose length is always
/// `width * height`; dimensions are fixed for the bitmap's lifetime.
/// Zero-area bitmaps are legal and render nothing.
///
/// Index *values* are unconstrained bytes — whether one exceeds the length of
/// the palette it is eventually rendered with is a caller concern, not
/// validated here (`value_count` is advisory only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    value_count: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Allocates a zero-filled `width` x `height` bitmap.
    ///
    /// `value_count` declares the intended number of distinct indices; it is
    /// stored for introspection and never enforced.
    pub fn new(width: u32, height: u32, value_count: u32) -> Self {
        Self {
            width,
            height,
            value_count,
            data: vec![0; width as usize * height as usize],
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

    #[inline]
    pub fn value_count(&self) -> u32 {
        self.value_count
    }

    /// Returns the palette index stored at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Result<u8, Error> {
        self.check_coords(x, y)?;
        Ok(self.data[self.offset(x, y)])
    }

    /// Writes palette index `value` at `(x, y)`.
    ///
    /// Only *coordinates* can be rejected; any `u8` is a valid value.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<(), Error> {
        self.check_coords(x, y)?;
        let off = self.offset(x, y);
        self.data[off] = value;
        Ok(())
    }

    /// Sets every pixel to `value` in one pass.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Unchecked read for the rasterizer; `(x, y)` must be in range.
    #[inline]
    pub(crate) fn value_at(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[self.offset(x, y)]
    }

    /// Wraps the bitmap in a [`SharedBitmap`] handle for aliasing.
    #[inline]
    pub fn into_shared(self) -> SharedBitmap {
        std::rc::Rc::new(std::cell::RefCell::new(self))
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn check_coords(&self, x: u32, y: u32) -> Result<(), Error> {
        Error::check_index(x as usize, self.width as usize)?;
        Error::check_index(y as usize, self.height as usize)
    }
}
