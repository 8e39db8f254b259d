use crate::coords::Color;
use crate::error::Error;

use super::SharedPalette;

/// Indexed color table with a per-entry binary transparency flag.
///
/// Entry count is fixed at construction. Entries default to opaque black and
/// are mutated in place; a failed mutation leaves the table unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    transparent: Vec<bool>,
}

impl Palette {
    /// Allocates `count` entries, all black, all opaque.
    pub fn new(count: usize) -> Self {
        Self {
            colors: vec![Color::BLACK; count],
            transparent: vec![false; count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Replaces the color at `index`.
    ///
    /// `color` is anything convertible to [`Color`] — a packed `0xRRGGBB`
    /// integer (rejected as [`Error::InvalidColor`] if it carries higher
    /// bits) or an `(r, g, b)` byte triple.
    pub fn set(
        &mut self,
        index: usize,
        color: impl TryInto<Color, Error = Error>,
    ) -> Result<(), Error> {
        self.set_color(index, color.try_into()?)
    }

    /// Replaces the color at `index` with an already-constructed [`Color`].
    pub fn set_color(&mut self, index: usize, color: Color) -> Result<(), Error> {
        Error::check_index(index, self.colors.len())?;
        self.colors[index] = color;
        Ok(())
    }

    /// Returns the color stored at `index`.
    pub fn get(&self, index: usize) -> Result<Color, Error> {
        Error::check_index(index, self.colors.len())?;
        Ok(self.colors[index])
    }

    /// Marks the entry at `index` transparent (`true`) or opaque (`false`).
    ///
    /// Transparent entries are skipped entirely during rendering: they
    /// neither paint nor clear the destination pixel.
    pub fn set_transparent(&mut self, index: usize, transparent: bool) -> Result<(), Error> {
        Error::check_index(index, self.transparent.len())?;
        self.transparent[index] = transparent;
        Ok(())
    }

    /// Whether the entry at `index` is currently transparent.
    pub fn is_transparent(&self, index: usize) -> Result<bool, Error> {
        Error::check_index(index, self.transparent.len())?;
        Ok(self.transparent[index])
    }

    /// Unchecked slot access for the rasterizer.
    ///
    /// A bitmap value beyond the palette length is a caller error; the `Vec`
    /// bounds check turns it into a panic at the offending lookup.
    #[inline]
    pub(crate) fn slot(&self, index: usize) -> (Color, bool) {
        (self.colors[index], self.transparent[index])
    }

    /// Wraps the palette in a [`SharedPalette`] handle for aliasing.
    #[inline]
    pub fn into_shared(self) -> SharedPalette {
        std::rc::Rc::new(std::cell::RefCell::new(self))
    }
}
