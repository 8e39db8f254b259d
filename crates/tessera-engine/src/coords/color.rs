use crate::error::Error;

/// Packed 24-bit RGB color (`0xRRGGBB`).
///
/// This is the only color format the engine understands. There is no alpha
/// channel here; transparency is a per-entry flag on the
/// [`Palette`](crate::scene::Palette), and every drawn pixel is written fully
/// opaque.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);

    /// Packs three channel bytes into `0xRRGGBB`.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Returns the packed `0xRRGGBB` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

/// Fallible conversion from a packed integer.
///
/// Bits above the low 24 would silently alias another color if masked, so
/// they are rejected as [`Error::InvalidColor`] instead.
impl TryFrom<u32> for Color {
    type Error = Error;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Error> {
        if value > 0x00FF_FFFF {
            Err(Error::InvalidColor { value })
        } else {
            Ok(Self(value))
        }
    }
}

/// Conversion from an `(r, g, b)` channel triple.
///
/// Infallible in practice (`u8` covers exactly one channel), expressed as
/// `TryFrom` so packed integers and triples go through one conversion seam.
impl TryFrom<(u8, u8, u8)> for Color {
    type Error = Error;

    #[inline]
    fn try_from((r, g, b): (u8, u8, u8)) -> Result<Self, Error> {
        Ok(Self::rgb(r, g, b))
    }
}
