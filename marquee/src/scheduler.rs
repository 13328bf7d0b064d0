use alloc::vec::Vec;

use crate::marquee::{Marquee, Step};
use crate::{
    DetachedPolicy, Error, MarqueeEventKind, MarqueeId, MarqueeOptions, MarqueeState, Result,
    SchedulerOptions, Viewport,
};

/// Result of a single scheduler pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine is not running; nothing was touched.
    Idle,
    /// Every active marquee was visited.
    Advanced {
        /// Marquees still registered after the pass.
        active: usize,
        /// Marquees that ended (or were dropped as detached) during the pass.
        removed: usize,
    },
    /// The pass was abandoned at a detached viewport (see [`DetachedPolicy::AbortTick`]).
    Aborted { detached: MarqueeId },
}

/// The shared tick engine and lifecycle controller for a population of marquees.
///
/// This type is UI-agnostic and does not own a timer. Your adapter drives it either by calling
/// [`Scheduler::tick`] on its own cadence, or by calling [`Scheduler::poll`] with a monotonic
/// clock and sleeping until [`Scheduler::next_deadline_ms`].
///
/// The engine starts running when a marquee is registered while it is stopped, and stops as
/// soon as the active set becomes empty, so an idle scheduler never asks to be ticked.
pub struct Scheduler<V> {
    options: SchedulerOptions,
    active: Vec<Marquee<V>>,
    running: bool,
    next_tick_ms: Option<u64>,
    next_id: u64,
}

impl<V> Default for Scheduler<V> {
    fn default() -> Self {
        Self::new(SchedulerOptions::default())
    }
}

impl<V> Scheduler<V> {
    pub fn new(options: SchedulerOptions) -> Self {
        Self {
            options,
            active: Vec::new(),
            running: false,
            next_tick_ms: None,
            next_id: 0,
        }
    }

    pub fn options(&self) -> &SchedulerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SchedulerOptions) {
        self.options = options;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of registered marquees, paused ones included.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, id: MarqueeId) -> bool {
        self.active.iter().any(|m| m.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = MarqueeId> + '_ {
        self.active.iter().map(|m| m.id)
    }

    pub fn state(&self, id: MarqueeId) -> Option<&MarqueeState> {
        self.active.iter().find(|m| m.id == id).map(|m| &m.state)
    }

    pub fn viewport(&self, id: MarqueeId) -> Option<&V> {
        self.active.iter().find(|m| m.id == id).map(|m| &m.viewport)
    }

    pub fn viewport_mut(&mut self, id: MarqueeId) -> Option<&mut V> {
        self.active
            .iter_mut()
            .find(|m| m.id == id)
            .map(|m| &mut m.viewport)
    }

    /// When the next [`Scheduler::poll`] will run a pass.
    ///
    /// Returns `None` while the engine is stopped, and `Some(0)` when a pass is due right away.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        if !self.running {
            return None;
        }
        Some(self.next_tick_ms.unwrap_or(0))
    }

    pub fn pause(&mut self, id: MarqueeId) -> Result<()> {
        self.find_mut(id)?.state.paused = true;
        mdebug!(id = id.get(), "pause");
        Ok(())
    }

    /// Same as [`Scheduler::pause`].
    pub fn stop(&mut self, id: MarqueeId) -> Result<()> {
        self.pause(id)
    }

    pub fn resume(&mut self, id: MarqueeId) -> Result<()> {
        self.find_mut(id)?.state.paused = false;
        mdebug!(id = id.get(), "resume");
        Ok(())
    }

    /// Same as [`Scheduler::resume`].
    pub fn unpause(&mut self, id: MarqueeId) -> Result<()> {
        self.resume(id)
    }

    /// Removes a marquee without waiting for its loops to run out and hands its viewport back.
    ///
    /// No `End` event is emitted.
    pub fn destroy(&mut self, id: MarqueeId) -> Result<V> {
        let index = self
            .active
            .iter()
            .position(|m| m.id == id)
            .ok_or(Error::InstanceNotFound(id))?;
        let marquee = self.active.remove(index);
        mdebug!(id = id.get(), "destroy");
        self.stop_if_idle();
        Ok(marquee.viewport)
    }

    fn find_mut(&mut self, id: MarqueeId) -> Result<&mut Marquee<V>> {
        self.active
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(Error::InstanceNotFound(id))
    }

    fn ensure_running(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.next_tick_ms = None;
        mdebug!(active = self.active.len(), "tick engine started");
    }

    fn stop_if_idle(&mut self) {
        if !self.running || !self.active.is_empty() {
            return;
        }
        self.running = false;
        self.next_tick_ms = None;
        mdebug!("tick engine stopped");
    }
}

impl<V: Viewport> Scheduler<V> {
    /// Sets up `viewport` as a marquee and registers it.
    ///
    /// The viewport's container extent along the marquee's axis is applied as content padding,
    /// the position snaps to the start of the first cycle, and a `Start` event fires. A
    /// zero loop budget fires `End` right after and registers nothing.
    pub fn start(&mut self, viewport: V, options: MarqueeOptions) -> MarqueeId {
        let id = MarqueeId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let marquee = Marquee::new(id, viewport, options);
        marquee.emit(MarqueeEventKind::Start);
        if marquee.state.remaining.is_exhausted() {
            mdebug!(id = id.get(), "zero loops, not registering");
            marquee.emit(MarqueeEventKind::End);
            return id;
        }

        self.active.push(marquee);
        self.ensure_running();
        id
    }

    /// Recomputes a marquee's geometry from its container and keeps the content in place.
    ///
    /// Returns the adjusted scroll position.
    pub fn resize(&mut self, id: MarqueeId) -> Result<i64> {
        Ok(self.find_mut(id)?.resize())
    }

    /// [`Scheduler::resize`] for every registered marquee.
    pub fn resize_all(&mut self) {
        for marquee in &mut self.active {
            marquee.resize();
        }
    }

    /// Runs one pass over the active set, regardless of the deadline.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        let current = core::mem::take(&mut self.active);
        let mut next = Vec::with_capacity(current.len());
        let mut removed = 0usize;

        let mut pending = current.into_iter();
        while let Some(mut marquee) = pending.next() {
            if !marquee.viewport.is_attached() {
                match self.options.on_detached {
                    DetachedPolicy::AbortTick => {
                        let detached = marquee.id;
                        mwarn!(id = detached.get(), "viewport detached, abandoning tick");
                        next.push(marquee);
                        next.extend(pending);
                        self.active = next;
                        return TickOutcome::Aborted { detached };
                    }
                    DetachedPolicy::SkipInstance => {
                        mwarn!(id = marquee.id.get(), "viewport detached, dropping marquee");
                        removed += 1;
                        continue;
                    }
                }
            }

            if marquee.state.paused {
                next.push(marquee);
                continue;
            }

            match marquee.advance() {
                Step::Retain => next.push(marquee),
                Step::Finished => removed += 1,
            }
        }

        self.active = next;
        let active = self.active.len();
        mtrace!(active, removed, "tick");
        self.stop_if_idle();
        TickOutcome::Advanced { active, removed }
    }

    /// Runs a pass if one is due at `now_ms`, then re-arms the deadline `interval_ms` later.
    ///
    /// The first pass after the engine starts is due immediately.
    pub fn poll(&mut self, now_ms: u64) -> Option<TickOutcome> {
        let due = self.next_deadline_ms()?;
        if now_ms < due {
            return None;
        }
        let outcome = self.tick();
        if self.running {
            self.next_tick_ms = Some(now_ms.saturating_add(self.options.interval_ms));
        }
        Some(outcome)
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for Scheduler<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scheduler")
            .field("options", &self.options)
            .field("active", &self.active)
            .field("running", &self.running)
            .field("next_tick_ms", &self.next_tick_ms)
            .finish()
    }
}
