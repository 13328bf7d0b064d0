use alloc::string::String;
use alloc::sync::Arc;

use crate::{Behavior, Direction, LoopSetting, Loops, MarqueeEvent};

/// Pixels advanced per tick when no (or a non-positive) scroll amount is configured.
pub const DEFAULT_SCROLL_AMOUNT: u32 = 2;

/// Delay between two ticks of the scheduler.
pub const DEFAULT_INTERVAL_MS: u64 = 50;

/// A callback fired for every lifecycle transition of one marquee.
pub type EventCallback = Arc<dyn Fn(&MarqueeEvent) + Send + Sync>;

/// Configuration for a single marquee passed to [`crate::Scheduler::start`].
#[derive(Clone)]
pub struct MarqueeOptions {
    pub behavior: Behavior,
    /// Number of cycles to run. `Slide` with `Infinite` is treated as a single loop, since a
    /// slide has no return trip.
    pub loops: Loops,
    /// Pixels advanced per tick. `0` falls back to [`DEFAULT_SCROLL_AMOUNT`].
    pub scroll_amount: u32,
    pub direction: Direction,
    pub on_event: Option<EventCallback>,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl MarqueeOptions {
    pub fn new() -> Self {
        Self {
            behavior: Behavior::Scroll,
            loops: Loops::Infinite,
            scroll_amount: DEFAULT_SCROLL_AMOUNT,
            direction: Direction::Left,
            on_event: None,
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_loops(mut self, loops: impl Into<Loops>) -> Self {
        self.loops = loops.into();
        self
    }

    pub fn with_scroll_amount(mut self, scroll_amount: u32) -> Self {
        self.scroll_amount = scroll_amount;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_on_event(
        mut self,
        on_event: Option<impl Fn(&MarqueeEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_event = on_event.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn effective_loops(&self) -> Loops {
        if self.behavior == Behavior::Slide && self.loops.is_infinite() {
            Loops::Finite(1)
        } else {
            self.loops
        }
    }

    pub(crate) fn effective_scroll_amount(&self) -> u32 {
        if self.scroll_amount == 0 {
            DEFAULT_SCROLL_AMOUNT
        } else {
            self.scroll_amount
        }
    }
}

impl core::fmt::Debug for MarqueeOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MarqueeOptions")
            .field("behavior", &self.behavior)
            .field("loops", &self.loops)
            .field("scroll_amount", &self.scroll_amount)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Loosely typed marquee configuration, as it would come from markup attributes or a config
/// file.
///
/// Parsing is lenient: unknown behaviors become `scroll`, unknown directions become `left`,
/// names are case-insensitive, and `loop` accepts either a number or a flag.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` using the
/// `behavior`, `loop`, `scrollAmount` and `direction` keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MarqueeConfig {
    pub behavior: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub loops: Option<LoopSetting>,
    pub scroll_amount: Option<i64>,
    pub direction: Option<String>,
}

impl MarqueeConfig {
    pub fn to_options(&self) -> MarqueeOptions {
        let scroll_amount = self
            .scroll_amount
            .filter(|&n| n > 0)
            .map_or(DEFAULT_SCROLL_AMOUNT, |n| {
                u32::try_from(n).unwrap_or(u32::MAX)
            });
        MarqueeOptions {
            behavior: self
                .behavior
                .as_deref()
                .map_or(Behavior::Scroll, Behavior::from_name),
            loops: self.loops.map_or(Loops::Infinite, Loops::from),
            scroll_amount,
            direction: self
                .direction
                .as_deref()
                .map_or(Direction::Left, Direction::from_name),
            on_event: None,
        }
    }
}

impl From<&MarqueeConfig> for MarqueeOptions {
    fn from(config: &MarqueeConfig) -> Self {
        config.to_options()
    }
}

/// What a tick does when it finds a marquee whose viewport has been detached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DetachedPolicy {
    /// Abandon the whole tick at the detached marquee. Marquees visited earlier in the pass
    /// keep their advance, the rest are skipped, and the active set is left untouched; every
    /// following tick stops at the same place until the detached marquee is destroyed.
    #[default]
    AbortTick,
    /// Drop only the detached marquee and keep advancing the others.
    SkipInstance,
}

/// Configuration for [`crate::Scheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchedulerOptions {
    /// Delay between two ticks. Every tick is re-armed with the same delay.
    pub interval_ms: u64,
    pub on_detached: DetachedPolicy,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            on_detached: DetachedPolicy::AbortTick,
        }
    }
}

impl SchedulerOptions {
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn with_on_detached(mut self, on_detached: DetachedPolicy) -> Self {
        self.on_detached = on_detached;
        self
    }
}
