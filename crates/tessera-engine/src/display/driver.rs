use anyhow::{Context, Result};
use log::{debug, trace};

use crate::coords::Point;
use crate::render::Frame;
use crate::scene::SharedGroup;

use super::Surface;

/// Display configuration.
///
/// `width` / `height` override the dimensions reported by the surface;
/// `None` means "use what the surface reports".
///
/// With `auto_refresh` on (the default), every root replacement triggers a
/// synchronous [`Display::refresh`] before returning.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub auto_refresh: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            auto_refresh: true,
        }
    }
}

/// Driver that owns the root of the scene tree and the destination frame.
///
/// Dimensions are fixed at construction. At most one root group is active at
/// a time; assigning a new one replaces, never merges with, the previous
/// root. [`refresh`](Display::refresh) is deterministic pure computation
/// except for the single [`Surface::present`] call at the end — an unchanged
/// tree refreshed twice presents byte-identical buffers.
#[derive(Debug)]
pub struct Display<S: Surface> {
    surface: S,
    frame: Frame,
    root: Option<SharedGroup>,
    auto_refresh: bool,
}

impl<S: Surface> Display<S> {
    /// Binds a display to `surface` using its reported size and
    /// auto-refresh on.
    pub fn new(surface: S) -> Result<Self> {
        Self::with_config(surface, DisplayConfig::default())
    }

    pub fn with_config(surface: S, config: DisplayConfig) -> Result<Self> {
        let width = config.width.unwrap_or_else(|| surface.width());
        let height = config.height.unwrap_or_else(|| surface.height());
        anyhow::ensure!(width > 0 && height > 0, "surface has zero size");

        debug!("display bound: {width}x{height}, auto_refresh={}", config.auto_refresh);
        Ok(Self {
            surface,
            frame: Frame::new(width, height),
            root: None,
            auto_refresh: config.auto_refresh,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    #[inline]
    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    #[inline]
    pub fn set_auto_refresh(&mut self, auto_refresh: bool) {
        self.auto_refresh = auto_refresh;
    }

    /// The root group currently shown, if any.
    #[inline]
    pub fn root(&self) -> Option<&SharedGroup> {
        self.root.as_ref()
    }

    /// Replaces the root group.
    ///
    /// With auto-refresh on this renders and presents synchronously; the
    /// surface error, if any, is the caller's.
    pub fn set_root(&mut self, root: SharedGroup) -> Result<()> {
        debug!("root group replaced");
        self.root = Some(root);
        self.maybe_refresh()
    }

    /// Detaches the root group; the next refresh presents a blank frame.
    pub fn clear_root(&mut self) -> Result<()> {
        debug!("root group cleared");
        self.root = None;
        self.maybe_refresh()
    }

    /// One full render pass: clear the frame, walk the tree depth-first in
    /// child order, hand the finished buffer to the surface once.
    ///
    /// Clearing first guarantees no stale pixel data leaks between
    /// refreshes.
    pub fn refresh(&mut self) -> Result<()> {
        self.frame.clear();
        if let Some(root) = &self.root {
            root.borrow().render(&mut self.frame, Point::zero());
        }
        trace!("refresh: presenting {}x{} frame", self.frame.width(), self.frame.height());
        self.surface
            .present(&self.frame)
            .context("surface rejected presented frame")
    }

    fn maybe_refresh(&mut self) -> Result<()> {
        if self.auto_refresh {
            self.refresh()
        } else {
            Ok(())
        }
    }
}
