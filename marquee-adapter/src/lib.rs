//! Adapter utilities for the `marquee` crate.
//!
//! The `marquee` crate is UI-agnostic and focuses on the animation state machine and the shared
//! tick scheduler. This crate provides small, framework-neutral helpers commonly needed by
//! adapters:
//!
//! - [`ScrollBox`]: an in-memory scroll container implementing `marquee::Viewport`
//! - Text rendering of the visible window for terminal hosts ([`visible_line`], [`visible_rows`])
//! - A blocking driver with pluggable clocks ([`run_until_idle`])
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod driver;
mod scroll_box;
mod text;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use driver::SystemClock;
pub use driver::{Clock, ManualClock, run_until_idle};
pub use scroll_box::{ScrollBox, Size};
pub use text::{visible_line, visible_rows};
