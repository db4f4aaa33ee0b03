pub mod events;
pub mod input;
pub mod signal;
pub mod utils;

pub use events::{EventKind, WindowEvent, WindowSignals};
pub use signal::{Signal, SignalError, Slot, SlotKey, SlotResult};
pub use utils::version;
