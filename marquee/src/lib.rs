//! A headless marquee engine.
//!
//! A marquee moves content through a fixed-size viewport, one step per tick, and loops a
//! configurable number of times. Three behaviors are supported:
//!
//! - `Scroll`: runs until the scroll position saturates, then jumps back to the start.
//! - `Alternate`: bounces between both ends, reversing on every completed cycle.
//! - `Slide`: travels in once and comes to rest at the arrival point.
//!
//! The crate is UI-agnostic. A TUI/GUI layer is expected to provide a [`Viewport`]
//! (scroll position, content and container extents, padding) and to drive the shared
//! [`Scheduler`] from its own timer or event loop. For ready-made viewports and a blocking
//! driver, see the `marquee-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod marquee;
mod options;
mod reset;
mod scheduler;
mod state;
mod types;
mod viewport;


pub use error::{Error, Result};
pub use options::{
    DEFAULT_INTERVAL_MS, DEFAULT_SCROLL_AMOUNT, DetachedPolicy, EventCallback, MarqueeConfig,
    MarqueeOptions, SchedulerOptions,
};
pub use reset::reset_position;
pub use scheduler::{Scheduler, TickOutcome};
pub use state::MarqueeState;
pub use types::{
    Axis, Behavior, Direction, LoopSetting, Loops, MarqueeEvent, MarqueeEventKind, MarqueeId,
    ScrollDirection,
};
pub use viewport::Viewport;
