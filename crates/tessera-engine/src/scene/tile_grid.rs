use crate::coords::Point;
use crate::render::Frame;

use super::{SharedBitmap, SharedPalette, SharedTileGrid};

/// Leaf scene node: one [`Bitmap`](super::Bitmap) rendered through one
/// [`Palette`](super::Palette) at a position.
///
/// Bitmap and palette are shared handles; reassigning either (or the
/// position, or the hidden flag) between refreshes is the normal way to
/// animate a retained scene.
#[derive(Debug, Clone)]
pub struct TileGrid {
    bitmap: SharedBitmap,
    palette: SharedPalette,
    position: Point,
    hidden: bool,
}

impl TileGrid {
    pub fn new(bitmap: SharedBitmap, palette: SharedPalette, position: Point) -> Self {
        Self {
            bitmap,
            palette,
            position,
            hidden: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hidden tile grids are skipped entirely during rendering: no buffer
    /// writes, no side effects.
    #[inline]
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    #[inline]
    pub fn bitmap(&self) -> SharedBitmap {
        self.bitmap.clone()
    }

    #[inline]
    pub fn set_bitmap(&mut self, bitmap: SharedBitmap) {
        self.bitmap = bitmap;
    }

    #[inline]
    pub fn palette(&self) -> SharedPalette {
        self.palette.clone()
    }

    #[inline]
    pub fn set_palette(&mut self, palette: SharedPalette) {
        self.palette = palette;
    }

    /// Rasterizes the bitmap into `frame` at `position + offset`.
    ///
    /// Per bitmap pixel, in row-major order:
    /// - a destination coordinate outside the frame is silently clipped;
    /// - a palette-transparent index is skipped, leaving whatever earlier
    ///   siblings painted underneath;
    /// - anything else is written as R, G, B, 255 — drawn pixels are always
    ///   fully opaque, there is no partial blending.
    ///
    /// Each destination pixel is written at most once per node, so traversal
    /// order never shows in the result.
    ///
    /// Borrows the shared bitmap and palette for reading; holding a mutable
    /// borrow of either across a refresh is a caller error and panics.
    pub fn render(&self, frame: &mut Frame, offset: Point) {
        if self.hidden {
            return;
        }
        let bitmap = self.bitmap.borrow();
        let palette = self.palette.borrow();
        let origin = self.position + offset;

        for by in 0..bitmap.height() {
            let py = origin.y + by as i32;
            if py < 0 || py >= frame.height() as i32 {
                continue;
            }
            for bx in 0..bitmap.width() {
                let px = origin.x + bx as i32;
                if !frame.contains(px, py) {
                    continue;
                }
                let (color, transparent) = palette.slot(bitmap.value_at(bx, by) as usize);
                if transparent {
                    continue;
                }
                frame.put_opaque(px as u32, py as u32, color);
            }
        }
    }

    /// Wraps the tile grid in a [`SharedTileGrid`] handle.
    #[inline]
    pub fn into_shared(self) -> SharedTileGrid {
        std::rc::Rc::new(std::cell::RefCell::new(self))
    }
}
