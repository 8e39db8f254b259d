//! Engine error taxonomy.
//!
//! Every variant is a caller (programming) error: raised synchronously at the
//! violated contract, never retried or recovered internally, and a failed
//! operation leaves the receiver unchanged. Out-of-bounds *geometry* during
//! rendering is a silent clip, not an error; only invalid indices and colors
//! go through this type.

/// Contract violation raised by the scene API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A coordinate, palette slot, or child-sequence index was outside its
    /// valid domain `0..len`.
    #[error("index {index} out of range (valid: 0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A packed color carried bits above the low 24 (`0xRRGGBB`).
    #[error("invalid color {value:#010x}: exceeds 24-bit RGB")]
    InvalidColor { value: u32 },
}

impl Error {
    /// Checks `index < len`, producing [`Error::IndexOutOfRange`] otherwise.
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Error> {
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len })
        }
    }
}
