use crate::coords::Point;
use crate::error::Error;
use crate::render::Frame;

use super::{Node, SharedGroup};

/// Composite scene node: an ordered, mutable sequence of child [`Node`]s with
/// its own position and visibility.
///
/// Insertion order is paint order — children render back to front, so the
/// last-appended child wins at any overlapping destination pixel. Groups
/// nest to arbitrary depth and offsets compose additively at every level.
///
/// Nothing prevents a group from (transitively) containing itself; rendering
/// such a cycle recurses until the stack overflows. That is a caller error,
/// matching the lack of a cycle guard in the rest of the tree API.
#[derive(Debug, Clone)]
pub struct Group {
    children: Vec<Node>,
    scale: u32,
    position: Point,
    hidden: bool,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    /// An empty group at the origin with scale 1.
    pub fn new() -> Self {
        Self::with_transform(1, Point::zero())
    }

    /// An empty group with an initial scale and position.
    ///
    /// `scale` is stored for interface compatibility only; it has no visual
    /// effect in this version.
    pub fn with_transform(scale: u32, position: Point) -> Self {
        Self {
            children: Vec::new(),
            scale,
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
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Stored only; does not affect geometry.
    #[inline]
    pub fn set_scale(&mut self, scale: u32) {
        self.scale = scale;
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hiding a group hides its entire subtree for the render pass without
    /// touching the children's own hidden flags.
    #[inline]
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends `node` at the end (topmost in paint order).
    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Inserts `node` before position `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, node: impl Into<Node>) -> Result<(), Error> {
        Error::check_index(index, self.children.len() + 1)?;
        self.children.insert(index, node.into());
        Ok(())
    }

    /// Removes the first child pointer-identical to `node`.
    ///
    /// A node that is not a child has no position to report; the failure
    /// carries the out-of-range sentinel `index == len`.
    pub fn remove(&mut self, node: &Node) -> Result<(), Error> {
        let position = self.children.iter().position(|child| child.ptr_eq(node));
        match position {
            Some(index) => {
                self.children.remove(index);
                Ok(())
            }
            None => Err(Error::IndexOutOfRange {
                index: self.children.len(),
                len: self.children.len(),
            }),
        }
    }

    /// Removes and returns the last child.
    pub fn pop(&mut self) -> Result<Node, Error> {
        match self.children.pop() {
            Some(node) => Ok(node),
            None => Err(Error::IndexOutOfRange { index: 0, len: 0 }),
        }
    }

    /// Removes and returns the child at `index`.
    pub fn pop_at(&mut self, index: usize) -> Result<Node, Error> {
        Error::check_index(index, self.children.len())?;
        Ok(self.children.remove(index))
    }

    /// Returns a handle to the child at `index`.
    pub fn get(&self, index: usize) -> Result<Node, Error> {
        Error::check_index(index, self.children.len())?;
        Ok(self.children[index].clone())
    }

    /// Replaces the child at `index`, keeping its place in paint order.
    pub fn replace(&mut self, index: usize, node: impl Into<Node>) -> Result<(), Error> {
        Error::check_index(index, self.children.len())?;
        self.children[index] = node.into();
        Ok(())
    }

    /// Children in insertion (paint) order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Recursively renders every child with `offset + position` as the new
    /// accumulated offset. No-op when hidden.
    pub fn render(&self, frame: &mut Frame, offset: Point) {
        if self.hidden {
            return;
        }
        let offset = offset + self.position;
        for child in &self.children {
            child.render(frame, offset);
        }
    }

    /// Wraps the group in a [`SharedGroup`] handle.
    #[inline]
    pub fn into_shared(self) -> SharedGroup {
        std::rc::Rc::new(std::cell::RefCell::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Bitmap, Palette, TileGrid};

    fn solid_node(color: u32, w: u32, h: u32, x: i32, y: i32) -> Node {
        let mut palette = Palette::new(1);
        palette.set(0, color).unwrap();
        let mut bitmap = Bitmap::new(w, h, 1);
        bitmap.fill(0);
        Node::tiles(TileGrid::new(
            bitmap.into_shared(),
            palette.into_shared(),
            Point::new(x, y),
        ))
    }

    fn pixel(frame: &Frame, x: usize, y: usize) -> &[u8] {
        let off = (y * frame.width() as usize + x) * 4;
        &frame.bytes()[off..off + 4]
    }

    // ── list semantics ───────────────────────────────────────────────────

    #[test]
    fn append_and_len() {
        let mut g = Group::new();
        assert!(g.is_empty());
        g.append(solid_node(0, 1, 1, 0, 0));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn get_and_replace() {
        let mut g = Group::new();
        let a = solid_node(0, 1, 1, 0, 0);
        let b = solid_node(0, 1, 1, 0, 0);
        g.append(a.clone());
        assert!(g.get(0).unwrap().ptr_eq(&a));
        g.replace(0, b.clone()).unwrap();
        assert!(g.get(0).unwrap().ptr_eq(&b));
        assert!(!g.get(0).unwrap().ptr_eq(&a));
    }

    #[test]
    fn insert_orders_children() {
        let mut g = Group::new();
        let a = solid_node(0, 1, 1, 0, 0);
        let b = solid_node(0, 1, 1, 0, 0);
        g.append(b.clone());
        g.insert(0, a.clone()).unwrap();
        assert!(g.get(0).unwrap().ptr_eq(&a));
        assert!(g.get(1).unwrap().ptr_eq(&b));
    }

    #[test]
    fn insert_at_len_appends() {
        let mut g = Group::new();
        let a = solid_node(0, 1, 1, 0, 0);
        g.insert(0, a.clone()).unwrap();
        assert!(g.get(0).unwrap().ptr_eq(&a));
        assert_eq!(
            g.insert(3, solid_node(0, 1, 1, 0, 0)),
            Err(Error::IndexOutOfRange { index: 3, len: 2 })
        );
    }

    #[test]
    fn remove_first_match_only() {
        let mut g = Group::new();
        let a = solid_node(0, 1, 1, 0, 0);
        g.append(a.clone());
        g.append(a.clone());
        g.remove(&a).unwrap();
        assert_eq!(g.len(), 1);
        assert!(g.get(0).unwrap().ptr_eq(&a));
    }

    #[test]
    fn remove_absent_node_fails() {
        let mut g = Group::new();
        g.append(solid_node(0, 1, 1, 0, 0));
        let stranger = solid_node(0, 1, 1, 0, 0);
        // The sentinel is one past the end: an absent node has no position.
        assert_eq!(
            g.remove(&stranger).unwrap_err(),
            Error::IndexOutOfRange { index: 1, len: 1 }
        );
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn pop_returns_last() {
        let mut g = Group::new();
        let a = solid_node(0, 1, 1, 0, 0);
        let b = solid_node(0, 1, 1, 0, 0);
        g.append(a.clone());
        g.append(b.clone());
        assert!(g.pop().unwrap().ptr_eq(&b));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn pop_at_index() {
        let mut g = Group::new();
        let a = solid_node(0, 1, 1, 0, 0);
        let b = solid_node(0, 1, 1, 0, 0);
        g.append(a.clone());
        g.append(b.clone());
        assert!(g.pop_at(0).unwrap().ptr_eq(&a));
        assert!(g.get(0).unwrap().ptr_eq(&b));
    }

    #[test]
    fn pop_empty_fails() {
        // Node has no PartialEq (identity is ptr_eq), so compare errors only.
        let mut g = Group::new();
        assert_eq!(
            g.pop().unwrap_err(),
            Error::IndexOutOfRange { index: 0, len: 0 }
        );
        assert_eq!(
            g.pop_at(0).unwrap_err(),
            Error::IndexOutOfRange { index: 0, len: 0 }
        );
    }

    #[test]
    fn iter_in_insertion_order() {
        let mut g = Group::new();
        let a = solid_node(0, 1, 1, 0, 0);
        let b = solid_node(0, 1, 1, 0, 0);
        g.append(a.clone());
        g.append(b.clone());
        let order: Vec<bool> = g.iter().map(|n| n.ptr_eq(&a)).collect();
        assert_eq!(order, vec![true, false]);
    }

    // ── rendering ────────────────────────────────────────────────────────

    #[test]
    fn hidden_group_skips_subtree() {
        let mut g = Group::new();
        let child = solid_node(0xFF0000, 2, 2, 0, 0);
        g.append(child.clone());
        g.set_hidden(true);

        let mut frame = Frame::new(10, 10);
        g.render(&mut frame, Point::zero());
        assert!(frame.bytes().iter().all(|&b| b == 0));
        // The child's own flag is untouched.
        assert!(!child.is_hidden());
    }

    #[test]
    fn group_position_offsets_children() {
        let mut g = Group::with_transform(1, Point::new(5, 5));
        g.append(solid_node(0xFF0000, 1, 1, 0, 0));

        let mut frame = Frame::new(10, 10);
        g.render(&mut frame, Point::zero());
        assert_eq!(pixel(&frame, 5, 5), &[0xFF, 0x00, 0x00, 0xFF]);
        assert_eq!(pixel(&frame, 0, 0), &[0, 0, 0, 0]);
    }

    #[test]
    fn nested_offsets_accumulate() {
        // TileGrid at (2,2) inside a Group at (3,3) paints at (5,5).
        let mut inner = Group::with_transform(1, Point::new(2, 2));
        inner.append(solid_node(0x0000FF, 1, 1, 0, 0));
        let mut outer = Group::with_transform(1, Point::new(3, 3));
        outer.append(Node::group(inner));

        let mut frame = Frame::new(10, 10);
        outer.render(&mut frame, Point::zero());
        assert_eq!(pixel(&frame, 5, 5), &[0x00, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn deep_nesting_with_tile_position() {
        let mut tiles_group = Group::with_transform(1, Point::new(1, 0));
        tiles_group.append(solid_node(0xFF0000, 1, 1, 1, 1));
        let mut mid = Group::with_transform(1, Point::new(0, 1));
        mid.append(Node::group(tiles_group));
        let mut root = Group::with_transform(1, Point::new(2, 2));
        root.append(Node::group(mid));

        let mut frame = Frame::new(10, 10);
        root.render(&mut frame, Point::zero());
        // (2+0+1+1, 2+1+0+1) = (4, 4)
        assert_eq!(pixel(&frame, 4, 4), &[0xFF, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn later_children_paint_over_earlier() {
        let mut g = Group::new();
        g.append(solid_node(0xFF0000, 2, 2, 0, 0));
        g.append(solid_node(0x00FF00, 2, 2, 0, 0));

        let mut frame = Frame::new(10, 10);
        g.render(&mut frame, Point::zero());
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(pixel(&frame, x, y), &[0x00, 0xFF, 0x00, 0xFF]);
            }
        }
    }

    #[test]
    fn multiple_children_all_rendered() {
        let mut g = Group::new();
        g.append(solid_node(0xFF0000, 1, 1, 0, 0));
        g.append(solid_node(0x00FF00, 1, 1, 1, 0));
        g.append(solid_node(0x0000FF, 1, 1, 2, 0));

        let mut frame = Frame::new(10, 10);
        g.render(&mut frame, Point::zero());
        assert_eq!(pixel(&frame, 0, 0), &[0xFF, 0x00, 0x00, 0xFF]);
        assert_eq!(pixel(&frame, 1, 0), &[0x00, 0xFF, 0x00, 0xFF]);
        assert_eq!(pixel(&frame, 2, 0), &[0x00, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn hidden_child_inside_visible_group() {
        let mut g = Group::new();
        let child = solid_node(0xFF0000, 1, 1, 0, 0);
        child.set_hidden(true);
        g.append(child);
        g.append(solid_node(0x00FF00, 1, 1, 1, 0));

        let mut frame = Frame::new(10, 10);
        g.render(&mut frame, Point::zero());
        assert_eq!(pixel(&frame, 0, 0), &[0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 1, 0), &[0x00, 0xFF, 0x00, 0xFF]);
    }
}
