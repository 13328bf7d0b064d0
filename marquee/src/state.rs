use crate::{Axis, Behavior, Loops, ScrollDirection, reset_position};

/// Run-time state of one marquee.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, which makes it
/// usable as a snapshot for debugging or UI state restoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarqueeState {
    pub(crate) direction: ScrollDirection,
    pub(crate) axis: Axis,
    /// `None` right after a reset, before the first comparison.
    pub(crate) last_position: Option<i64>,
    pub(crate) remaining: Loops,
    pub(crate) speed: u32,
    pub(crate) behavior: Behavior,
    pub(crate) viewport_extent: i64,
    pub(crate) paused: bool,
}

impl MarqueeState {
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// The axis is fixed for the marquee's lifetime; it selects both the scroll coordinate and
    /// the content extent that is queried.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn last_position(&self) -> Option<i64> {
        self.last_position
    }

    pub fn remaining(&self) -> Loops {
        self.remaining
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    pub fn viewport_extent(&self) -> i64 {
        self.viewport_extent
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// [`reset_position`] for this marquee's behavior, direction and viewport extent.
    pub fn reset_position(&self, toward: ScrollDirection, content_extent: i64) -> i64 {
        reset_position(
            self.behavior,
            self.direction,
            toward,
            content_extent,
            self.viewport_extent,
        )
    }

    /// Scroll position at which the current cycle has reached its far end.
    pub(crate) fn edge_position(&self, content_extent: i64) -> i64 {
        self.reset_position(self.direction.reversed(), content_extent)
    }

    pub(crate) fn hit_edge(&self, position: i64, content_extent: i64) -> bool {
        let edge = self.edge_position(content_extent);
        match self.direction {
            ScrollDirection::Backward => position <= edge,
            ScrollDirection::Forward => position >= edge,
        }
    }

    pub(crate) fn is_cycle_complete(&self, position: i64, hit_edge: bool) -> bool {
        match self.behavior {
            Behavior::Scroll => self.last_position == Some(position),
            Behavior::Alternate | Behavior::Slide => hit_edge && self.last_position.is_some(),
        }
    }

    /// Where a finished marquee comes to rest. A slide rests at its arrival point rather than
    /// at the start of a new run.
    pub(crate) fn terminal_position(&self, content_extent: i64) -> i64 {
        match self.behavior {
            Behavior::Slide => self.reset_position(self.direction.reversed(), content_extent),
            Behavior::Scroll | Behavior::Alternate => {
                self.reset_position(self.direction, content_extent)
            }
        }
    }
}
