use crate::options::EventCallback;
use crate::{
    Behavior, MarqueeEvent, MarqueeEventKind, MarqueeId, MarqueeOptions, MarqueeState, Viewport,
};

/// What the scheduler should do with a marquee after advancing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Retain,
    Finished,
}

/// An active-set entry: a marquee's state together with the viewport it drives.
pub(crate) struct Marquee<V> {
    pub(crate) id: MarqueeId,
    pub(crate) state: MarqueeState,
    pub(crate) viewport: V,
    on_event: Option<EventCallback>,
}

impl<V: Viewport> Marquee<V> {
    /// Pads the content by the container extent and snaps to the first cycle's start.
    pub(crate) fn new(id: MarqueeId, mut viewport: V, options: MarqueeOptions) -> Self {
        let axis = options.direction.axis();
        let extent = viewport.container_extent(axis);
        viewport.set_container_extent(axis, extent);
        viewport.set_content_padding(axis, extent);

        let state = MarqueeState {
            direction: options.direction.scroll_direction(),
            axis,
            last_position: None,
            remaining: options.effective_loops(),
            speed: options.effective_scroll_amount(),
            behavior: options.behavior,
            viewport_extent: extent,
            paused: false,
        };
        mdebug!(
            id = id.get(),
            behavior = ?state.behavior,
            direction = ?state.direction,
            loops = ?state.remaining,
            speed = state.speed,
            extent,
            "Marquee::new"
        );

        let mut marquee = Self {
            id,
            state,
            viewport,
            on_event: options.on_event,
        };
        let content = marquee.viewport.content_extent(axis);
        let start = marquee.state.reset_position(marquee.state.direction, content);
        marquee.snap_to(start);
        marquee
    }

    pub(crate) fn position(&self) -> i64 {
        self.viewport.scroll_position(self.state.axis)
    }

    /// Writes `position` and returns what the viewport actually accepted.
    fn snap_to(&mut self, position: i64) -> i64 {
        self.viewport.set_scroll_position(self.state.axis, position);
        self.position()
    }

    pub(crate) fn emit(&self, kind: MarqueeEventKind) {
        let event = MarqueeEvent {
            id: self.id,
            kind,
            position: self.position(),
            direction: self.state.direction,
        };
        mtrace!(id = self.id.get(), kind = ?kind, position = event.position, "emit");
        if let Some(cb) = &self.on_event {
            cb(&event);
        }
    }

    /// Runs one tick for an attached, unpaused marquee.
    pub(crate) fn advance(&mut self) -> Step {
        let axis = self.state.axis;
        let delta = i64::from(self.state.speed) * self.state.direction.sign();
        let position = self.snap_to(self.position().saturating_add(delta));

        let content = self.viewport.content_extent(axis);
        let hit_edge = self.state.hit_edge(position, content);
        if !self.state.is_cycle_complete(position, hit_edge) {
            self.state.last_position = Some(position);
            return Step::Retain;
        }

        if self.state.behavior == Behavior::Alternate {
            self.state.direction = self.state.direction.reversed();
        }
        self.state.last_position = None;
        self.emit(MarqueeEventKind::Stop);

        self.state.remaining.decrement();
        if self.state.remaining.is_exhausted() {
            let rest = self.state.terminal_position(content);
            self.snap_to(rest);
            mdebug!(id = self.id.get(), position = rest, "loops exhausted");
            self.emit(MarqueeEventKind::End);
            return Step::Finished;
        }

        let start = self.state.reset_position(self.state.direction, content);
        let position = self.snap_to(start);
        mtrace!(
            id = self.id.get(),
            position,
            remaining = ?self.state.remaining,
            "next cycle"
        );
        self.emit(MarqueeEventKind::Start);
        self.state.last_position = Some(position);
        Step::Retain
    }

    /// Re-reads the container extent and shifts the position by the change so the visible
    /// content stays put. Returns the adjusted position.
    pub(crate) fn resize(&mut self) -> i64 {
        let axis = self.state.axis;
        let old = self.state.viewport_extent;
        let new = self.viewport.container_extent(axis);
        self.viewport.set_container_extent(axis, new);
        self.viewport.set_content_padding(axis, new);
        self.state.viewport_extent = new;

        let target = self.position().saturating_add(new.saturating_sub(old));
        let position = self.snap_to(target);
        if self.state.last_position.is_some() {
            self.state.last_position = Some(position);
        }
        mdebug!(id = self.id.get(), old, new, position, "Marquee::resize");
        position
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for Marquee<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Marquee")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
