//! Layout metrics reported by the host.
//!
//! All values are in host units (CSS pixels in a browser, rows in a
//! terminal). Offsets are relative to the top of the scroll container's
//! content, matching `offsetTop` semantics.

/// Vertical extent of an element inside its scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub top: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

/// Scroll state of a scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub scroll_top: i32,
    /// Visible height of the container
    pub height: i32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: i32, height: i32) -> Self {
        Self { scroll_top, height }
    }

    pub fn visible_bottom(&self) -> i32 {
        self.scroll_top + self.height
    }
}

/// Where the dropdown sits relative to the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Dropdown top relative to the visible window
    pub dropdown_top: i32,
    pub dropdown_height: i32,
    /// Page scroll offset
    pub scroll_y: i32,
    /// Total document height
    pub window_height: i32,
}

impl Viewport {
    /// A dropdown flips above its input when its bottom edge would reach
    /// past the end of the document.
    pub fn should_flip(&self) -> bool {
        self.dropdown_top + self.scroll_y + self.dropdown_height >= self.window_height
    }
}

/// Direction of keyboard traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

/// Whether `element` is visible inside `container` when approached from
/// `direction`. Moving down only cares about the bottom edge, moving up only
/// about the top edge.
pub fn is_scrolled_into_view(
    element: Bounds,
    container: ScrollMetrics,
    direction: Direction,
) -> bool {
    match direction {
        Direction::Down => container.visible_bottom() >= element.bottom(),
        Direction::Up => element.top >= container.scroll_top,
    }
}

/// Scroll offset that brings `element` into view from `direction`: aligned to
/// the bottom edge when moving down, the top edge when moving up.
pub fn scroll_target(element: Bounds, container: ScrollMetrics, direction: Direction) -> i32 {
    match direction {
        Direction::Down => (element.bottom() - container.height).max(0),
        Direction::Up => element.top.max(0),
    }
}
