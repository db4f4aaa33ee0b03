use super::*;
use std::{cell::RefCell, rc::Rc};

use crate::utils::Size;
use crate::{bound_slot, slot};

fn on_resize(_args: &Size) {}
fn on_resize_alt(_args: &Size) {}

#[derive(Default)]
struct Counter {
    hits: i32,
}

impl Counter {
    fn on_event(&mut self, _args: &Size) {
        self.hits += 1;
    }

    fn on_event_noisy(&mut self, _args: &Size) {
        self.hits += 100;
    }
}

// Closure slot that appends `label` to a shared invocation log.
fn record(order: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> Slot<i32> {
    let order = Rc::clone(order);
    Slot::closure(move |_args: &i32| order.borrow_mut().push(label)).with_name(label)
}

#[test]
fn test_invocation_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut signal: Signal<i32> = Signal::with_name("order");

    // An empty signal emits successfully:
    assert!(signal.is_empty());
    assert!(signal.emit(0));

    let h0 = signal.connect(record(&order, "h0")).unwrap();
    let h1 = signal.connect(record(&order, "h1")).unwrap();
    let h2 = signal.connect(record(&order, "h2")).unwrap();
    let h3 = signal.connect_after(&h1, record(&order, "h3")).unwrap();
    let h4 = signal.connect_after(&h3, record(&order, "h4")).unwrap();

    assert!(signal.is_connected(&h0));
    assert_eq!(signal.count(), 5);
    assert!(signal.emit(0));
    assert_eq!(*order.borrow(), ["h0", "h1", "h3", "h4", "h2"]);

    // connect_first goes ahead of everything already connected:
    order.borrow_mut().clear();
    let front = signal.connect_first(record(&order, "front")).unwrap();
    assert!(signal.emit(0));
    assert_eq!(*order.borrow(), ["front", "h0", "h1", "h3", "h4", "h2"]);

    // A missing anchor is no error for connect_after; the slot lands at the front:
    order.borrow_mut().clear();
    let stray = record(&order, "stray");
    let loose = signal.connect_after(&stray, record(&order, "loose")).unwrap();
    assert!(signal.is_connected(&loose));
    assert!(!signal.is_connected(&stray));
    assert!(signal.emit(0));
    assert_eq!(*order.borrow(), ["loose", "front", "h0", "h1", "h3", "h4", "h2"]);

    // connect_before splices in right before its anchor:
    order.borrow_mut().clear();
    let h5 = signal.connect_before(&h2, record(&order, "h5")).unwrap();
    assert!(signal.is_connected(&h5));
    assert!(signal.emit(0));
    assert_eq!(*order.borrow(), ["loose", "front", "h0", "h1", "h3", "h4", "h5", "h2"]);

    // A missing anchor is a hard error for connect_before and the list is untouched:
    let count = signal.count();
    let err = signal.connect_before(&stray, record(&order, "nope")).unwrap_err();
    assert_eq!(err, SignalError::AnchorNotConnected { anchor: "stray" });
    assert_eq!(err.to_string(), "anchor slot 'stray' is not connected");
    assert_eq!(signal.count(), count);

    // Disconnecting preserves the order of the remaining slots:
    order.borrow_mut().clear();
    signal.disconnect(&front).unwrap();
    assert!(signal.emit(0));
    assert_eq!(*order.borrow(), ["loose", "h0", "h1", "h3", "h4", "h5", "h2"]);

    signal.clear();
    assert!(signal.is_empty());
    assert!(!signal.is_connected(&h4));
}

#[test]
fn test_duplicate_slots() {
    let mut signal: Signal<Size> = Signal::with_name("dup");

    // Free functions are identified by address:
    let resize = signal.connect(slot!(on_resize)).unwrap();
    let err = signal.connect(slot!(on_resize)).unwrap_err();
    assert_eq!(err, SignalError::DuplicateSlot { slot: "on_resize" });
    assert_eq!(err.to_string(), "slot 'on_resize' is already connected");
    assert_eq!(signal.count(), 1);
    assert!(signal.is_connected(&Slot::function(on_resize)));
    signal.connect(slot!(on_resize_alt)).unwrap();

    // The clone returned by connect shares the identity of the original:
    match signal.connect(resize.clone()) {
        Err(SignalError::DuplicateSlot { .. }) => {}
        _ => panic!("Expected a duplicate!"),
    }

    // Bound methods are identified by receiver and method together:
    let mut first  = Counter::default();
    let mut second = Counter::default();

    signal.connect(bound_slot!(&mut first, Counter::on_event)).unwrap();
    match signal.connect(bound_slot!(&mut first, Counter::on_event)) {
        Err(SignalError::DuplicateSlot { .. }) => {}
        _ => panic!("Expected a duplicate!"),
    }

    // Same method on another receiver and another method on the same
    // receiver are both distinct:
    signal.connect(bound_slot!(&mut second, Counter::on_event)).unwrap();
    signal.connect(bound_slot!(&mut first, Counter::on_event_noisy)).unwrap();

    // Closures are always distinct, even with identical bodies:
    signal.connect(Slot::closure(|_args: &Size| {})).unwrap();
    signal.connect(Slot::closure(|_args: &Size| {})).unwrap();

    assert_eq!(signal.count(), 7);
}

#[test]
fn test_early_stop() {
    let calls = Rc::new(RefCell::new(0));
    let mut signal: Signal<i32> = Signal::with_name("stop");

    let counting = |calls: &Rc<RefCell<i32>>| {
        let calls = Rc::clone(calls);
        Slot::closure(move |_args: &i32| *calls.borrow_mut() += 1)
    };

    signal.connect(counting(&calls)).unwrap();
    let gate = signal.connect(Slot::closure(|args: &i32| *args >= 0).with_name("gate")).unwrap();
    signal.connect(counting(&calls)).unwrap();

    // A true return keeps the emission going:
    assert!(signal.emit(1));
    assert_eq!(*calls.borrow(), 2);

    // A false return stops it before the remaining slots run:
    assert!(!signal.emit(-1));
    assert_eq!(*calls.borrow(), 3);

    signal.disconnect(&gate).unwrap();
    assert!(signal.emit(-1));
    assert_eq!(*calls.borrow(), 5);
}

#[test]
fn test_enable_disable() {
    let calls = Rc::new(RefCell::new(0));
    let mut signal: Signal<i32> = Signal::with_name("mute");

    {
        let calls = Rc::clone(&calls);
        signal.connect(Slot::closure(move |_args: &i32| *calls.borrow_mut() += 1)).unwrap();
    }

    assert!(signal.is_enabled());
    assert!(signal.emit(0));
    assert_eq!(*calls.borrow(), 1);

    // Disabling suppresses emission but keeps the connections:
    signal.set_enabled(false);
    assert!(!signal.is_enabled());
    assert!(!signal.emit(0));
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(signal.count(), 1);

    signal.set_enabled(true);
    assert!(signal.emit(0));
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn test_disconnect_and_reconnect() {
    let mut signal: Signal<Size> = Signal::with_name("disc");

    // Disconnecting a slot that was never connected fails:
    let err = signal.disconnect(&slot!(on_resize_alt)).unwrap_err();
    assert_eq!(err, SignalError::SlotNotConnected { slot: "on_resize_alt" });

    let resize = signal.connect(slot!(on_resize)).unwrap();
    let stored = signal.disconnect(&resize).unwrap();
    assert!(!signal.is_connected(&resize));
    assert!(signal.is_empty());

    // Disconnecting twice fails:
    let err = signal.disconnect(&resize).unwrap_err();
    assert_eq!(err, SignalError::SlotNotConnected { slot: "on_resize" });
    assert_eq!(err.to_string(), "slot 'on_resize' is not connected");

    // The returned slot can be connected again:
    signal.connect(stored).unwrap();
    assert_eq!(signal.count(), 1);
}

#[test]
fn test_bound_methods() {
    let mut first  = Counter::default();
    let mut second = Counter::default();

    let mut signal: Signal<Size> = Signal::with_name("bound");
    signal.connect(bound_slot!(&mut first, Counter::on_event)).unwrap();
    signal.connect(bound_slot!(&mut second, Counter::on_event)).unwrap();
    signal.connect(bound_slot!(&mut second, Counter::on_event_noisy)).unwrap();

    assert!(signal.emit(Size::new(16, 16)));
    assert_eq!(first.hits, 1);
    assert_eq!(second.hits, 101);

    assert!(signal.emit(Size::new(32, 32)));
    assert_eq!(first.hits, 2);
    assert_eq!(second.hits, 202);
}

#[test]
fn test_slot_results() {
    assert_eq!(SlotResult::from(()), SlotResult::Continue);
    assert_eq!(SlotResult::from(true), SlotResult::Continue);
    assert_eq!(SlotResult::from(false), SlotResult::Stop);

    assert!(SlotResult::Continue.continues());
    assert!(SlotResult::Stop.stops());
    assert!(!SlotResult::Stop.continues());
}
