use std::collections::hash_map::Entry;

use super::{WindowEvent, WindowSignals};
use crate::utils::{
    hash::{self, PreHashedKeyMap},
    mem::{RawPtr, SingleThreadStatic}
};

// ----------------------------------------------
// NativeHandle
// ----------------------------------------------

// Opaque id for a native window, typically the integer value of the
// underlying window pointer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NativeHandle(usize);

impl NativeHandle {
    #[inline]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

// ----------------------------------------------
// WindowRegistry
// ----------------------------------------------

// Maps native window handles to their event hubs, so the native layer's
// C callback trampolines can reach the right WindowSignals. Holds
// non-owning pointers; a hub must be unregistered before it is dropped.
struct WindowRegistry {
    lookup: PreHashedKeyMap<NativeHandle, RawPtr<WindowSignals>>,
}

impl WindowRegistry {
    const fn new() -> Self {
        Self { lookup: hash::new_const_hash_map() }
    }

    fn register(&'static mut self, handle: NativeHandle, signals: &WindowSignals) {
        debug_assert!(handle.is_valid(), "Cannot register a null window handle!");

        match self.lookup.entry(handle) {
            Entry::Occupied(_) => {
                panic!("Window handle {:#x} is already registered.", handle.raw());
            },
            Entry::Vacant(entry) => {
                entry.insert(RawPtr::from_ref(signals));
            },
        }
    }

    fn unregister(&'static mut self, handle: NativeHandle) -> bool {
        self.lookup.remove(&handle).is_some()
    }

    fn find(&'static self, handle: NativeHandle) -> Option<RawPtr<WindowSignals>> {
        self.lookup.get(&handle).copied()
    }

    fn count(&'static self) -> usize {
        self.lookup.len()
    }
}

// ----------------------------------------------
// Global Registry
// ----------------------------------------------

static REGISTRY: SingleThreadStatic<WindowRegistry> = SingleThreadStatic::new(WindowRegistry::new());

// Registers the event hub for a native window handle.
// Panics if the handle is already registered.
#[inline]
pub fn register(handle: NativeHandle, signals: &WindowSignals) {
    log::debug!("Registering window handle {:#x}.", handle.raw());
    REGISTRY.as_mut().register(handle, signals);
}

#[inline]
pub fn unregister(handle: NativeHandle) -> bool {
    log::debug!("Unregistering window handle {:#x}.", handle.raw());
    REGISTRY.as_mut().unregister(handle)
}

#[inline]
pub fn find(handle: NativeHandle) -> Option<RawPtr<WindowSignals>> {
    REGISTRY.as_ref().find(handle)
}

// Routes a translated event to the hub registered for `handle`.
// Events for unknown handles are dropped.
pub fn dispatch_to(handle: NativeHandle, event: WindowEvent) -> bool {
    match REGISTRY.as_ref().find(handle) {
        Some(signals) => signals.dispatch(event),
        None => {
            log::trace!("No window registered for handle {:#x}; event dropped.", handle.raw());
            false
        }
    }
}

#[inline]
pub fn registered_count() -> usize {
    REGISTRY.as_ref().count()
}

// ----------------------------------------------
// Unit Tests
// ----------------------------------------------

#[test]
fn test_window_registry() {
    use std::{cell::RefCell, rc::Rc};
    use crate::signal::Slot;
    use crate::utils::Size;

    let resizes = Rc::new(RefCell::new(0));
    let mut signals = WindowSignals::new();

    {
        let resizes = Rc::clone(&resizes);
        signals.resize.connect(Slot::closure(move |_args: &Size| *resizes.borrow_mut() += 1)).unwrap();
    }
    signals.close.connect(Slot::closure(|_args: &()| false).with_name("veto_close")).unwrap();

    let handle  = NativeHandle::new(0x1000);
    let unknown = NativeHandle::new(0x2000);
    assert!(handle.is_valid());
    assert_eq!(handle.raw(), 0x1000);

    assert_eq!(registered_count(), 0);
    register(handle, &signals);
    assert_eq!(registered_count(), 1);

    assert!(find(handle).is_some());
    assert!(find(unknown).is_none());

    // Dispatch through the handle:
    assert!(dispatch_to(handle, WindowEvent::Resize(Size::new(800, 600))));
    assert_eq!(*resizes.borrow(), 1);

    // The close handler vetoes:
    assert!(!dispatch_to(handle, WindowEvent::Close));

    // Unknown handles drop the event:
    assert!(!dispatch_to(unknown, WindowEvent::Resize(Size::new(1, 1))));
    assert_eq!(*resizes.borrow(), 1);

    assert!(unregister(handle));
    assert!(!unregister(handle));
    assert_eq!(registered_count(), 0);
    assert!(find(handle).is_none());
}
