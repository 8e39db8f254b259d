use std::rc::Rc;

use crate::coords::Point;
use crate::render::Frame;

use super::{Group, SharedGroup, SharedTileGrid, TileGrid};

/// A child of a [`Group`]: anything renderable with a position and a hidden
/// flag.
///
/// The variant set is closed — the tree is exactly leaves
/// ([`TileGrid`](super::TileGrid)) and composites ([`Group`]) — so dispatch
/// is a plain `match` rather than a trait object.
///
/// A `Node` is a cheap clone of a reference-counted handle. Cloning one does
/// not copy the underlying node; the clone and the original stay pointer
/// identical (see [`ptr_eq`](Node::ptr_eq)), which is how
/// [`Group::remove`](super::Group::remove) identifies children.
#[derive(Debug, Clone)]
pub enum Node {
    Tiles(SharedTileGrid),
    Group(SharedGroup),
}

impl Node {
    /// Wraps an owned [`TileGrid`] in a fresh handle.
    #[inline]
    pub fn tiles(tiles: TileGrid) -> Self {
        Self::Tiles(tiles.into_shared())
    }

    /// Wraps an owned [`Group`] in a fresh handle.
    #[inline]
    pub fn group(group: Group) -> Self {
        Self::Group(group.into_shared())
    }

    /// Pointer identity: whether both nodes are handles to the same
    /// underlying tile grid or group.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Tiles(a), Node::Tiles(b)) => Rc::ptr_eq(a, b),
            (Node::Group(a), Node::Group(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        match self {
            Node::Tiles(tiles) => tiles.borrow().is_hidden(),
            Node::Group(group) => group.borrow().is_hidden(),
        }
    }

    pub fn set_hidden(&self, hidden: bool) {
        match self {
            Node::Tiles(tiles) => tiles.borrow_mut().set_hidden(hidden),
            Node::Group(group) => group.borrow_mut().set_hidden(hidden),
        }
    }

    /// Dispatches to the underlying node's `render`.
    pub fn render(&self, frame: &mut Frame, offset: Point) {
        match self {
            Node::Tiles(tiles) => tiles.borrow().render(frame, offset),
            Node::Group(group) => group.borrow().render(frame, offset),
        }
    }
}

impl From<SharedTileGrid> for Node {
    #[inline]
    fn from(tiles: SharedTileGrid) -> Self {
        Self::Tiles(tiles)
    }
}

impl From<&SharedTileGrid> for Node {
    #[inline]
    fn from(tiles: &SharedTileGrid) -> Self {
        Self::Tiles(tiles.clone())
    }
}

impl From<SharedGroup> for Node {
    #[inline]
    fn from(group: SharedGroup) -> Self {
        Self::Group(group)
    }
}

impl From<&SharedGroup> for Node {
    #[inline]
    fn from(group: &SharedGroup) -> Self {
        Self::Group(group.clone())
    }
}
