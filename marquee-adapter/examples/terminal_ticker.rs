// Example: a one-line terminal ticker driven in real time.
use std::cell::RefCell;
use std::io::Write;
use std::ops::ControlFlow;
use std::rc::Rc;

use marquee::{Behavior, Loops, MarqueeEvent, MarqueeOptions, Scheduler, SchedulerOptions};
use marquee_adapter::{ScrollBox, SystemClock, run_until_idle, visible_line};

fn main() {
    let text = "Breaking: headless marquee engine ships with three behaviors";
    let view = Rc::new(RefCell::new(ScrollBox::for_line(text, 24)));

    let mut s = Scheduler::new(SchedulerOptions::default().with_interval_ms(40));
    s.start(
        Rc::clone(&view),
        MarqueeOptions::new()
            .with_behavior(Behavior::Scroll)
            .with_loops(Loops::Finite(2))
            .with_scroll_amount(1)
            .with_on_event(Some(|e: &MarqueeEvent| {
                eprintln!("\n[{:?} at {}]", e.kind, e.position);
            })),
    );

    let mut clock = SystemClock::new();
    let mut out = std::io::stdout();
    let ticks = run_until_idle(&mut s, &mut clock, |_, _| {
        let line = visible_line(text, &view.borrow());
        let _ = write!(out, "\r|{line}|");
        let _ = out.flush();
        ControlFlow::Continue(())
    });
    println!("\n{ticks} frames");
}
