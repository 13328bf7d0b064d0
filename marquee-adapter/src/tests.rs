use crate::*;

use core::cell::RefCell;
use core::ops::ControlFlow;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use marquee::{
    Axis, Behavior, DetachedPolicy, Direction, Loops, MarqueeOptions, Scheduler,
    SchedulerOptions, TickOutcome, Viewport,
};

#[test]
fn scroll_box_clamps_like_an_overflow_hidden_container() {
    let mut b = ScrollBox::new(Size::new(100, 1), Size::new(30, 1));
    b.set_scroll_position(Axis::Horizontal, 500);
    assert_eq!(b.scroll_left(), 70);
    b.set_scroll_position(Axis::Horizontal, -5);
    assert_eq!(b.scroll_left(), 0);

    b.set_content_padding(Axis::Horizontal, 30);
    assert_eq!(b.content_extent(Axis::Horizontal), 160);
    assert_eq!(b.max_scroll(Axis::Horizontal), 130);
    assert_eq!(b.max_scroll(Axis::Vertical), 0);

    b.set_scroll_position(Axis::Horizontal, 120);
    b.set_content_size(Size::new(40, 1));
    assert_eq!(b.scroll_left(), 70);
}

#[test]
fn ticker_renders_text_sliding_through_the_window() {
    let text = "HELLO";
    let view = Rc::new(RefCell::new(ScrollBox::for_line(text, 3)));
    let mut s = Scheduler::default();
    let id = s.start(
        Rc::clone(&view),
        MarqueeOptions::new()
            .with_scroll_amount(1)
            .with_loops(Loops::Finite(1)),
    );
    assert_eq!(view.borrow().padding().width, 3);
    assert_eq!(visible_line(text, &view.borrow()), "   ");

    let mut frames: Vec<String> = Vec::new();
    for _ in 0..8 {
        s.tick();
        frames.push(visible_line(text, &view.borrow()));
    }
    assert_eq!(
        frames,
        ["  H", " HE", "HEL", "ELL", "LLO", "LO ", "O  ", "   "]
    );
    assert!(s.is_active(id));

    s.tick();
    assert!(!s.is_active(id));
    assert_eq!(view.borrow().scroll_left(), 0);
}

#[test]
fn rows_roll_up_through_a_vertical_window() {
    let lines = ["a", "b", "c"];
    let view = Rc::new(RefCell::new(ScrollBox::for_lines(&lines, 2)));
    let mut s = Scheduler::default();
    s.start(
        Rc::clone(&view),
        MarqueeOptions::new()
            .with_direction(Direction::Up)
            .with_scroll_amount(1),
    );
    assert_eq!(visible_rows(&lines, &view.borrow()), ["", ""]);

    s.tick();
    assert_eq!(visible_rows(&lines, &view.borrow()), ["", "a"]);
    s.tick();
    assert_eq!(visible_rows(&lines, &view.borrow()), ["a", "b"]);
    assert_eq!(view.borrow().scroll_left(), 0);
}

#[test]
fn layout_change_then_resize_keeps_text_in_place() {
    let text = "HELLO WORLD";
    let view = Rc::new(RefCell::new(ScrollBox::for_line(text, 4)));
    let mut s = Scheduler::default();
    let id = s.start(
        Rc::clone(&view),
        MarqueeOptions::new().with_scroll_amount(1),
    );
    for _ in 0..3 {
        s.tick();
    }
    assert_eq!(visible_line(text, &view.borrow()), " HEL");

    view.borrow_mut().layout(Size::new(6, 1));
    assert_eq!(s.resize(id), Ok(5));

    let b = view.borrow();
    assert_eq!(b.container_size().width, 6);
    assert_eq!(b.padding().width, 6);
    assert_eq!(b.scroll_left(), 5);
    assert_eq!(visible_line(text, &b), " HELLO");
}

#[test]
fn detached_scroll_box_is_dropped_under_skip_policy() {
    let a = Rc::new(RefCell::new(ScrollBox::for_line("abc", 2)));
    let b = Rc::new(RefCell::new(ScrollBox::for_line("abc", 2)));
    let mut s = Scheduler::new(
        SchedulerOptions::default().with_on_detached(DetachedPolicy::SkipInstance),
    );
    let ia = s.start(Rc::clone(&a), MarqueeOptions::new().with_scroll_amount(1));
    let ib = s.start(Rc::clone(&b), MarqueeOptions::new().with_scroll_amount(1));

    a.borrow_mut().detach();
    assert_eq!(
        s.tick(),
        TickOutcome::Advanced {
            active: 1,
            removed: 1
        }
    );
    assert!(!s.is_active(ia));
    assert!(s.is_active(ib));
}

#[test]
fn driver_runs_a_finite_marquee_to_completion_on_a_manual_clock() {
    let mut s = Scheduler::new(SchedulerOptions::default().with_interval_ms(50));
    s.start(
        ScrollBox::for_line("HELLO", 3),
        MarqueeOptions::new()
            .with_scroll_amount(1)
            .with_loops(Loops::Finite(1)),
    );

    let mut clock = ManualClock::new(0);
    let mut outcomes = Vec::new();
    let ticks = run_until_idle(&mut s, &mut clock, |_, outcome| {
        outcomes.push(outcome);
        ControlFlow::Continue(())
    });

    // Positions 1..=8, then one more pass that sees the saturated position and ends.
    assert_eq!(ticks, 9);
    assert_eq!(clock.now_ms(), 8 * 50);
    assert_eq!(
        outcomes.last(),
        Some(&TickOutcome::Advanced {
            active: 0,
            removed: 1
        })
    );
    assert!(!s.is_running());
}

#[test]
fn driver_stops_when_the_callback_breaks() {
    let mut s = Scheduler::default();
    s.start(
        ScrollBox::for_line("an endless ticker", 5),
        MarqueeOptions::new().with_behavior(Behavior::Scroll),
    );

    let mut clock = ManualClock::new(1_000);
    let mut seen = 0;
    let ticks = run_until_idle(&mut s, &mut clock, |_, _| {
        seen += 1;
        if seen == 5 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    assert_eq!(ticks, 5);
    assert!(s.is_running());
    assert_eq!(clock.now_ms(), 1_000 + 4 * 50);
}

#[test]
fn manual_clock_only_moves_forward() {
    let mut clock = ManualClock::new(100);
    clock.sleep_until_ms(50);
    assert_eq!(clock.now_ms(), 100);
    clock.advance(25);
    clock.sleep_until_ms(110);
    assert_eq!(clock.now_ms(), 125);
}

#[cfg(feature = "std")]
#[test]
fn system_clock_drives_a_short_marquee() {
    let mut s = Scheduler::new(SchedulerOptions::default().with_interval_ms(1));
    s.start(
        ScrollBox::for_line("AB", 1),
        MarqueeOptions::new()
            .with_scroll_amount(1)
            .with_loops(Loops::Finite(1)),
    );

    let mut clock = SystemClock::new();
    let ticks = run_until_idle(&mut s, &mut clock, |_, _| ControlFlow::Continue(()));
    assert_eq!(ticks, 4);
    assert!(s.is_empty());
}
