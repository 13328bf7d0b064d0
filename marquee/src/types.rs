use core::fmt;

/// The scroll axis a marquee moves along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Signed unit of motion along the axis.
///
/// `Forward` increases the scroll position (content travels left/up), `Backward` decreases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    pub fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// The direction a caller asks the content to travel in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Lenient, case-insensitive parse. Unknown names fall back to [`Direction::Left`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("right") {
            Self::Right
        } else if name.eq_ignore_ascii_case("up") {
            Self::Up
        } else if name.eq_ignore_ascii_case("down") {
            Self::Down
        } else {
            Self::Left
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }

    pub fn scroll_direction(self) -> ScrollDirection {
        match self {
            Self::Left | Self::Up => ScrollDirection::Forward,
            Self::Right | Self::Down => ScrollDirection::Backward,
        }
    }
}

/// How a marquee behaves once it reaches the far end of its track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Behavior {
    /// Runs until the scroll position saturates, then jumps back to the start.
    #[default]
    Scroll,
    /// Bounces between both ends, reversing on every completed cycle.
    Alternate,
    /// Travels in once and stays at the arrival point.
    Slide,
}

impl Behavior {
    /// Lenient, case-insensitive parse. Unknown names fall back to [`Behavior::Scroll`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("alternate") {
            Self::Alternate
        } else if name.eq_ignore_ascii_case("slide") {
            Self::Slide
        } else {
            Self::Scroll
        }
    }
}

/// Remaining loop budget of a marquee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Loops {
    Finite(u32),
    #[default]
    Infinite,
}

impl Loops {
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// `true` once a finite budget has been used up.
    pub fn is_exhausted(self) -> bool {
        matches!(self, Self::Finite(0))
    }

    pub(crate) fn decrement(&mut self) {
        if let Self::Finite(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

impl From<u32> for Loops {
    fn from(n: u32) -> Self {
        Self::Finite(n)
    }
}

/// A loop count as it appears in loosely typed configuration: a number or a flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LoopSetting {
    Flag(bool),
    Count(i64),
}

impl From<LoopSetting> for Loops {
    /// `true` and negative counts loop forever, `false` means zero loops.
    fn from(setting: LoopSetting) -> Self {
        match setting {
            LoopSetting::Flag(true) => Self::Infinite,
            LoopSetting::Flag(false) => Self::Finite(0),
            LoopSetting::Count(n) if n < 0 => Self::Infinite,
            LoopSetting::Count(n) => Self::Finite(u32::try_from(n).unwrap_or(u32::MAX)),
        }
    }
}

/// Identity of a started marquee within its [`crate::Scheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarqueeId(pub(crate) u64);

impl MarqueeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MarqueeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marquee#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarqueeEventKind {
    /// A cycle begins (on start and after every non-final cycle).
    Start,
    /// A cycle completed.
    Stop,
    /// The loop budget ran out; the marquee has been unregistered.
    End,
}

/// A lifecycle notification delivered to the marquee's `on_event` callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarqueeEvent {
    pub id: MarqueeId,
    pub kind: MarqueeEventKind,
    /// Scroll position after the transition was applied.
    pub position: i64,
    /// Direction of travel after the transition was applied.
    pub direction: ScrollDirection,
}
