// Host-side tests for teardown, the frame loop guard and theme notification.

use std::cell::RefCell;
use std::rc::Rc;
use zellige_backdrop::core::{FrameLoop, Teardown, Theme, ThemeSignal};

#[test]
fn teardown_runs_in_reverse_exactly_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut t = Teardown::new();
    for name in ["scroll", "resize", "frame"] {
        let log = log.clone();
        t.defer(name, move || log.borrow_mut().push(name));
    }
    assert_eq!(t.pending(), 3);
    assert!(!t.is_done());

    assert_eq!(t.run(), 3);
    assert!(t.is_done());
    assert_eq!(*log.borrow(), vec!["frame", "resize", "scroll"]);

    assert_eq!(t.run(), 0);
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn late_registration_runs_immediately() {
    let hits = Rc::new(RefCell::new(0));
    let mut t = Teardown::new();
    t.run();
    let h = hits.clone();
    t.defer("late", move || *h.borrow_mut() += 1);
    assert_eq!(*hits.borrow(), 1);
    assert_eq!(t.pending(), 0);
    assert_eq!(t.run(), 0);
}

#[test]
fn frame_loop_counts_frames_until_stopped() {
    let mut l = FrameLoop::new();
    assert!(l.can_arm());
    l.armed(1);
    assert!(l.begin_frame());
    l.armed(2);
    assert!(l.begin_frame());
    assert_eq!(l.frames(), 2);

    l.armed(3);
    assert_eq!(l.stop(), Some(3));
    assert!(l.is_stopped());
    assert!(!l.can_arm());
    // Nothing left to cancel the second time
    assert_eq!(l.stop(), None);
}

#[test]
fn frame_after_stop_does_nothing() {
    let mut l = FrameLoop::new();
    l.armed(7);
    assert!(l.begin_frame());
    assert_eq!(l.stop(), None);
    // A callback already queued by the host still fires once
    assert!(!l.begin_frame());
    l.armed(8);
    assert_eq!(l.stop(), None);
    assert_eq!(l.frames(), 1);
}

#[test]
fn theme_signal_notifies_only_on_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut signal = ThemeSignal::new(Theme::Light);
    let s = seen.clone();
    let id = signal.subscribe(move |t| s.borrow_mut().push(t));
    assert_eq!(signal.subscriber_count(), 1);

    assert!(!signal.set(Theme::Light));
    assert!(seen.borrow().is_empty());
    assert!(signal.set(Theme::Dark));
    assert_eq!(signal.get(), Theme::Dark);
    assert_eq!(*seen.borrow(), vec![Theme::Dark]);

    assert!(signal.unsubscribe(id));
    assert!(!signal.unsubscribe(id));
    assert!(signal.set(Theme::Light));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn theme_signal_fans_out_in_subscription_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut signal = ThemeSignal::default();
    assert_eq!(signal.get(), Theme::Light);
    let ids: Vec<_> = (0..3)
        .map(|i| {
            let o = order.clone();
            signal.subscribe(move |_| o.borrow_mut().push(i))
        })
        .collect();
    assert_ne!(ids[0], ids[1]);
    signal.set(Theme::Dark);
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn teardown_unsubscribes_theme_listener() {
    let signal = Rc::new(RefCell::new(ThemeSignal::new(Theme::Light)));
    let hits = Rc::new(RefCell::new(0));
    let h = hits.clone();
    let id = signal.borrow_mut().subscribe(move |_| *h.borrow_mut() += 1);
    let mut t = Teardown::new();
    let sig = signal.clone();
    t.defer("theme", move || {
        sig.borrow_mut().unsubscribe(id);
    });
    signal.borrow_mut().set(Theme::Dark);
    t.run();
    signal.borrow_mut().set(Theme::Light);
    assert_eq!(*hits.borrow(), 1);
    assert_eq!(signal.borrow().subscriber_count(), 0);
}
