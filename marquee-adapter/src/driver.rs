use core::ops::ControlFlow;

use marquee::{Scheduler, TickOutcome, Viewport};

/// A monotonic millisecond clock the driver can wait on.
pub trait Clock {
    fn now_ms(&self) -> u64;

    /// Blocks (or pretends to) until `now_ms() >= deadline_ms`.
    fn sleep_until_ms(&mut self, deadline_ms: u64);
}

/// A clock that never blocks: sleeping jumps straight to the deadline.
///
/// Useful for tests and for rendering an animation offline, frame by frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self { now_ms }
    }

    pub fn advance(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn sleep_until_ms(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }
}

/// Wall-clock time measured from when the clock was created.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn sleep_until_ms(&mut self, deadline_ms: u64) {
        let now = self.now_ms();
        if deadline_ms > now {
            std::thread::sleep(std::time::Duration::from_millis(deadline_ms - now));
        }
    }
}

/// Drives `scheduler` on its own cadence until the engine stops or `on_tick` breaks.
///
/// `on_tick` runs after every pass; adapters typically render there. A marquee whose viewport
/// is detached keeps the engine running (see `marquee::DetachedPolicy`), so hosts using the
/// default policy should either destroy it from their own bookkeeping or break out here.
///
/// Returns the number of passes run.
pub fn run_until_idle<V: Viewport, C: Clock>(
    scheduler: &mut Scheduler<V>,
    clock: &mut C,
    mut on_tick: impl FnMut(&Scheduler<V>, TickOutcome) -> ControlFlow<()>,
) -> u64 {
    let mut ticks = 0u64;
    while let Some(deadline) = scheduler.next_deadline_ms() {
        clock.sleep_until_ms(deadline);
        let Some(outcome) = scheduler.poll(clock.now_ms()) else {
            continue;
        };
        ticks += 1;
        if on_tick(scheduler, outcome).is_break() {
            mdebug!(ticks, "run_until_idle: stopped by caller");
            return ticks;
        }
    }
    mdebug!(ticks, "run_until_idle: engine idle");
    ticks
}
