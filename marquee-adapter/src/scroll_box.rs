use marquee::{Axis, Viewport};

/// A width/height pair in the unit the host renders in (pixels, terminal cells, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i64,
    pub height: i64,
}

impl Size {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    pub fn along(self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    fn set_along(&mut self, axis: Axis, value: i64) {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
    }
}

/// An in-memory scroll container with `overflow: hidden` semantics.
///
/// The content is padded on both ends of each axis, and the scroll position is clamped into
/// `0..=content + 2 * padding - container`. This is enough to drive a marquee without a real
/// layout engine: a terminal or canvas renderer only needs the scroll offsets and padding to
/// know what to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollBox {
    content: Size,
    container: Size,
    padding: Size,
    scroll: Size,
    attached: bool,
}

impl ScrollBox {
    pub fn new(content: Size, container: Size) -> Self {
        Self {
            content,
            container,
            padding: Size::default(),
            scroll: Size::default(),
            attached: true,
        }
    }

    /// A one-row box for a single line of text, one unit per `char`.
    pub fn for_line(text: &str, width: i64) -> Self {
        let len = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
        Self::new(Size::new(len, 1), Size::new(width, 1))
    }

    /// A box showing `height` rows of `lines`, as wide as the longest line.
    pub fn for_lines(lines: &[&str], height: i64) -> Self {
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = i64::try_from(width).unwrap_or(i64::MAX);
        let rows = i64::try_from(lines.len()).unwrap_or(i64::MAX);
        Self::new(Size::new(width, rows), Size::new(width, height))
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Replaces the intrinsic content size, re-clamping the scroll offsets.
    pub fn set_content_size(&mut self, content: Size) {
        self.content = content;
        self.clamp_scroll();
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Applies a new size decided by the host's layout (e.g. the terminal was resized).
    ///
    /// The scroll offsets are left alone; call `Scheduler::resize` afterwards to let the
    /// marquee re-pad the content and compensate the position.
    pub fn layout(&mut self, container: Size) {
        self.container = container;
    }

    pub fn padding(&self) -> Size {
        self.padding
    }

    pub fn scroll_left(&self) -> i64 {
        self.scroll.width
    }

    pub fn scroll_top(&self) -> i64 {
        self.scroll.height
    }

    pub fn max_scroll(&self, axis: Axis) -> i64 {
        let total = self.content.along(axis) + 2 * self.padding.along(axis);
        (total - self.container.along(axis)).max(0)
    }

    /// Marks the box as torn down; a scheduler ticking it will notice on its next pass.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    fn clamp_scroll(&mut self) {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let clamped = self.scroll.along(axis).clamp(0, self.max_scroll(axis));
            self.scroll.set_along(axis, clamped);
        }
    }
}

impl Viewport for ScrollBox {
    fn scroll_position(&self, axis: Axis) -> i64 {
        self.scroll.along(axis)
    }

    fn set_scroll_position(&mut self, axis: Axis, position: i64) {
        let clamped = position.clamp(0, self.max_scroll(axis));
        self.scroll.set_along(axis, clamped);
    }

    fn content_extent(&self, axis: Axis) -> i64 {
        self.content.along(axis) + 2 * self.padding.along(axis)
    }

    fn container_extent(&self, axis: Axis) -> i64 {
        self.container.along(axis)
    }

    fn set_container_extent(&mut self, axis: Axis, extent: i64) {
        self.container.set_along(axis, extent.max(0));
        self.clamp_scroll();
    }

    fn set_content_padding(&mut self, axis: Axis, padding: i64) {
        self.padding.set_along(axis, padding.max(0));
        self.clamp_scroll();
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
