// Example: drive an alternating marquee by hand and print its lifecycle.
use marquee::{Axis, Behavior, Loops, MarqueeOptions, Scheduler, Viewport};

#[derive(Debug)]
struct Strip {
    text_len: i64,
    padding: i64,
    width: i64,
    scroll_left: i64,
}

impl Viewport for Strip {
    fn scroll_position(&self, _axis: Axis) -> i64 {
        self.scroll_left
    }

    fn set_scroll_position(&mut self, axis: Axis, position: i64) {
        let max = (self.content_extent(axis) - self.width).max(0);
        self.scroll_left = position.clamp(0, max);
    }

    fn content_extent(&self, _axis: Axis) -> i64 {
        self.text_len + 2 * self.padding
    }

    fn container_extent(&self, _axis: Axis) -> i64 {
        self.width
    }

    fn set_container_extent(&mut self, _axis: Axis, extent: i64) {
        self.width = extent;
    }

    fn set_content_padding(&mut self, _axis: Axis, padding: i64) {
        self.padding = padding;
    }

    fn is_attached(&self) -> bool {
        true
    }
}

fn main() {
    let mut s = Scheduler::default();
    let strip = Strip {
        text_len: 200,
        padding: 0,
        width: 50,
        scroll_left: 0,
    };
    let id = s.start(
        strip,
        MarqueeOptions::new()
            .with_behavior(Behavior::Alternate)
            .with_loops(Loops::Finite(4))
            .with_scroll_amount(5)
            .with_on_event(Some(|e: &marquee::MarqueeEvent| {
                println!(
                    "{:?} at {} heading {:?}",
                    e.kind, e.position, e.direction
                );
            })),
    );

    let mut frame = 0u32;
    while s.is_active(id) {
        frame += 1;
        let outcome = s.tick();
        if let Some(v) = s.viewport(id) {
            println!("frame={frame} scroll_left={} outcome={outcome:?}", v.scroll_left);
        }
    }
    println!("done after {frame} frames, running={}", s.is_running());
}
