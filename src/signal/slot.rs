use std::rc::Rc;

use crate::utils::mem::RawPtr;

// ----------------------------------------------
// SlotResult
// ----------------------------------------------

// Result of invoking a single slot during an emission.
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SlotResult {
    Continue, // Keep invoking the remaining slots in order.
    Stop,     // Consume the event; slots after this one are skipped.
}

impl SlotResult {
    #[inline]
    pub fn continues(self) -> bool {
        self == SlotResult::Continue
    }

    #[inline]
    pub fn stops(self) -> bool {
        self == SlotResult::Stop
    }
}

// Unit-returning slots never stop an emission.
impl From<()> for SlotResult {
    #[inline]
    fn from(_: ()) -> Self {
        SlotResult::Continue
    }
}

// Bool-returning slots: true keeps the emission going, false stops it.
impl From<bool> for SlotResult {
    #[inline]
    fn from(keep_going: bool) -> Self {
        if keep_going { SlotResult::Continue } else { SlotResult::Stop }
    }
}

// ----------------------------------------------
// SlotKey
// ----------------------------------------------

// Identity of a slot, computed once at construction. Two slots are
// duplicates if and only if their keys compare equal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SlotKey {
    // Address of a free function. Building a slot twice from the same
    // named function yields the same key.
    Function { callback: usize },

    // Receiver object address plus method address. The same method bound
    // to two different receivers yields two distinct keys.
    Method { receiver: usize, callback: usize },

    // Address of the closure's shared allocation. Every Slot::closure()
    // call creates a fresh key; only clones of the resulting slot share it.
    Closure { cell: usize },
}

impl SlotKey {
    #[inline]
    pub fn is_valid(self) -> bool {
        match self {
            SlotKey::Function { callback } => callback != 0,
            SlotKey::Method { receiver, callback } => receiver != 0 && callback != 0,
            SlotKey::Closure { cell } => cell != 0,
        }
    }
}

// ----------------------------------------------
// Slot
// ----------------------------------------------

pub(crate) const UNNAMED: &str = "<unnamed>";

type SlotThunk<Args> = dyn Fn(&Args) -> SlotResult;

// A single registered handler: identity key plus the normalized invocation
// thunk. All handler shapes (free function, bound method, capturing
// closure) and all accepted return types (`()`, `bool`, `SlotResult`) are
// erased to the same thunk signature here, so the signal stores and
// invokes every slot uniformly.
pub struct Slot<Args: 'static> {
    key: SlotKey,
    name: &'static str,
    thunk: Rc<SlotThunk<Args>>,
}

impl<Args: 'static> Slot<Args> {
    // Wraps a free function.
    pub fn function<R>(callback: fn(&Args) -> R) -> Self
        where R: 'static + Into<SlotResult>
    {
        Self {
            key: SlotKey::Function { callback: callback as usize },
            name: UNNAMED,
            thunk: Rc::new(move |args: &Args| callback(args).into()),
        }
    }

    // Wraps a method bound to a receiver that is held by non-owning
    // pointer. The receiver must outlive the connection; disconnect the
    // slot before dropping it.
    pub fn method<T, R>(receiver: &mut T, callback: fn(&mut T, &Args) -> R) -> Self
        where T: 'static,
              R: 'static + Into<SlotResult>
    {
        let receiver_ptr = RawPtr::from_mut(receiver);
        Self {
            key: SlotKey::Method { receiver: receiver_ptr.addr(), callback: callback as usize },
            name: UNNAMED,
            thunk: Rc::new(move |args: &Args| callback(receiver_ptr.mut_ref_cast(), args).into()),
        }
    }

    // Wraps a capturing closure. Every call creates a distinct identity,
    // even for the same closure body; keep a clone of the returned slot if
    // it needs to be disconnected later.
    pub fn closure<F, R>(callback: F) -> Self
        where F: 'static + Fn(&Args) -> R,
              R: 'static + Into<SlotResult>
    {
        let thunk: Rc<SlotThunk<Args>> = Rc::new(move |args: &Args| callback(args).into());
        let key = SlotKey::Closure { cell: Rc::as_ptr(&thunk) as *const () as usize };
        Self { key, name: UNNAMED, thunk }
    }

    #[inline]
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    #[inline]
    pub fn key(&self) -> SlotKey {
        self.key
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.key.is_valid()
    }

    #[inline]
    pub fn invoke(&self, args: &Args) -> SlotResult {
        (self.thunk)(args)
    }
}

// A clone shares the identity key and thunk with the original, so it can
// stand in for it in is_connected/disconnect lookups.
impl<Args: 'static> Clone for Slot<Args> {
    #[inline]
    fn clone(&self) -> Self {
        Self { key: self.key, name: self.name, thunk: Rc::clone(&self.thunk) }
    }
}

impl<Args: 'static> std::fmt::Debug for Slot<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("name", &self.name)
            .field("key", &self.key)
            .finish()
    }
}

// ----------------------------------------------
// Public Macros
// ----------------------------------------------

// Builds a named slot from a free function, capturing the function's own
// name for logs and error messages.
#[macro_export]
macro_rules! slot {
    ($func:expr) => {
        $crate::signal::Slot::function($func).with_name(stringify!($func))
    };
}

// Builds a named slot from a receiver and a method path.
#[macro_export]
macro_rules! bound_slot {
    ($receiver:expr, $method:expr) => {
        $crate::signal::Slot::method($receiver, $method).with_name(stringify!($method))
    };
}
