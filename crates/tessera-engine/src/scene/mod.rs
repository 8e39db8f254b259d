//! Scene tree types.
//!
//! Responsibilities:
//! - store indexed pixel data ([`Bitmap`]) and its color table ([`Palette`])
//! - position and compose leaf renderers ([`TileGrid`]) inside nested
//!   containers ([`Group`])
//! - provide deterministic paint order: a [`Group`]'s insertion order is its
//!   paint order, so the last-appended child wins at any overlapping pixel
//!
//! # Sharing
//!
//! Bitmaps and palettes are shared resources: several [`TileGrid`]s may alias
//! one instance (repeated sprites), so leaves hold [`SharedBitmap`] /
//! [`SharedPalette`] handles rather than owned values. `Rc<RefCell<_>>` makes
//! the whole tree `!Send`, which is deliberate — the engine is
//! single-threaded and a concurrent host must confine or externally lock the
//! entire tree (renders borrow shared resources for reading; mutating one
//! mid-render is a caller error the borrow checker will catch at runtime).

mod bitmap;
mod group;
mod node;
mod palette;
mod tile_grid;

use std::cell::RefCell;
use std::rc::Rc;

pub use bitmap::Bitmap;
pub use group::Group;
pub use node::Node;
pub use palette::Palette;
pub use tile_grid::TileGrid;

/// Reference-counted handle to a [`Bitmap`] aliased by any number of tile grids.
pub type SharedBitmap = Rc<RefCell<Bitmap>>;
/// Reference-counted handle to a [`Palette`] aliased by any number of tile grids.
pub type SharedPalette = Rc<RefCell<Palette>>;
/// Handle to a [`TileGrid`] owned by at most one parent [`Group`] at a time.
pub type SharedTileGrid = Rc<RefCell<TileGrid>>;
/// Handle to a [`Group`]; the root handle is also held by the display driver.
pub type SharedGroup = Rc<RefCell<Group>>;
