use smallvec::SmallVec;
use thiserror::Error;

pub mod slot;

#[cfg(test)]
mod tests;

pub use slot::{Slot, SlotKey, SlotResult};
use slot::UNNAMED;

// ----------------------------------------------
// SignalError
// ----------------------------------------------

// Recoverable misuse of the connection surface. Carries the slot debug
// names for context in logs and messages.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SignalError {
    #[error("slot '{slot}' is already connected")]
    DuplicateSlot { slot: &'static str },

    #[error("slot '{slot}' is not connected")]
    SlotNotConnected { slot: &'static str },

    #[error("anchor slot '{anchor}' is not connected")]
    AnchorNotConnected { anchor: &'static str },
}

// ----------------------------------------------
// Signal
// ----------------------------------------------

// Grow past the inline capacity and the slot list spills to the heap.
// Typical signals hold a handful of slots at most.
type SlotList<Args> = SmallVec<[Slot<Args>; 4]>;

// An ordered list of slots sharing one payload type. Emitting invokes
// every connected slot front to back until one of them stops the event.
//
// Single-threaded: the signal holds non-owning pointers to bound-slot
// receivers and performs no synchronization. Callers must disconnect a
// slot before its receiver is dropped.
pub struct Signal<Args: 'static> {
    slots: SlotList<Args>,
    name: &'static str,
    enabled: bool,
}

impl<Args: 'static> Signal<Args> {
    #[inline]
    pub fn new() -> Self {
        Self::with_name(UNNAMED)
    }

    #[inline]
    pub fn with_name(name: &'static str) -> Self {
        Self { slots: SlotList::new(), name, enabled: true }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    // Number of slots the next emit would consider.
    #[inline]
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // A disabled signal keeps its connections but emits nothing.
    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn is_connected(&self, slot: &Slot<Args>) -> bool {
        self.position(slot.key()).is_some()
    }

    // Appends at the end of the invocation order. Returns a clone sharing
    // the slot's identity, for a later disconnect.
    pub fn connect(&mut self, slot: Slot<Args>) -> Result<Slot<Args>, SignalError> {
        self.check_duplicate(&slot)?;

        log::debug!("Signal '{}': connect slot '{}'.", self.name, slot.name());
        self.slots.push(slot.clone());
        Ok(slot)
    }

    // Inserts at the front of the invocation order.
    pub fn connect_first(&mut self, slot: Slot<Args>) -> Result<Slot<Args>, SignalError> {
        self.check_duplicate(&slot)?;

        log::debug!("Signal '{}': connect slot '{}' at front.", self.name, slot.name());
        self.slots.insert(0, slot.clone());
        Ok(slot)
    }

    // Inserts immediately after `anchor`. An anchor that is not connected
    // is not an error: the slot is inserted at the front instead.
    pub fn connect_after(&mut self, anchor: &Slot<Args>, slot: Slot<Args>) -> Result<Slot<Args>, SignalError> {
        self.check_duplicate(&slot)?;

        let index = match self.position(anchor.key()) {
            Some(anchor_index) => anchor_index + 1,
            None => 0,
        };

        log::debug!("Signal '{}': connect slot '{}' after '{}'.", self.name, slot.name(), anchor.name());
        self.slots.insert(index, slot.clone());
        Ok(slot)
    }

    // Inserts immediately before `anchor`. A missing anchor is an error
    // here, and the list is left unchanged.
    pub fn connect_before(&mut self, anchor: &Slot<Args>, slot: Slot<Args>) -> Result<Slot<Args>, SignalError> {
        self.check_duplicate(&slot)?;

        match self.position(anchor.key()) {
            Some(index) => {
                log::debug!("Signal '{}': connect slot '{}' before '{}'.", self.name, slot.name(), anchor.name());
                self.slots.insert(index, slot.clone());
                Ok(slot)
            }
            None => Err(SignalError::AnchorNotConnected { anchor: anchor.name() }),
        }
    }

    // Removes the slot and returns the stored entry. The remaining entries
    // keep their relative order.
    pub fn disconnect(&mut self, slot: &Slot<Args>) -> Result<Slot<Args>, SignalError> {
        match self.position(slot.key()) {
            Some(index) => {
                log::debug!("Signal '{}': disconnect slot '{}'.", self.name, slot.name());
                Ok(self.slots.remove(index))
            }
            None => Err(SignalError::SlotNotConnected { slot: slot.name() }),
        }
    }

    pub fn clear(&mut self) {
        if !self.slots.is_empty() {
            log::debug!("Signal '{}': clearing {} slot(s).", self.name, self.slots.len());
            self.slots.clear();
        }
    }

    // Invokes every slot in order with a shared borrow of `args`. Returns
    // false if the signal is disabled or a slot stopped the emission, true
    // otherwise (including for an empty slot list).
    pub fn emit(&self, args: Args) -> bool {
        if !self.enabled {
            log::trace!("Signal '{}': emit ignored, signal is disabled.", self.name);
            return false;
        }

        log::trace!("Signal '{}': emitting to {} slot(s).", self.name, self.slots.len());

        for slot in &self.slots {
            if slot.invoke(&args).stops() {
                return false;
            }
        }

        true
    }

    #[inline]
    fn position(&self, key: SlotKey) -> Option<usize> {
        self.slots.iter().position(|entry| entry.key() == key)
    }

    fn check_duplicate(&self, slot: &Slot<Args>) -> Result<(), SignalError> {
        debug_assert!(slot.is_valid(), "Slot '{}' has no invocable target!", slot.name());

        if self.is_connected(slot) {
            return Err(SignalError::DuplicateSlot { slot: slot.name() });
        }
        Ok(())
    }
}

impl<Args: 'static> Default for Signal<Args> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
