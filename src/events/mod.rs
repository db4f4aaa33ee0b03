use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

use crate::{
    input::{InputAction, InputKey, InputModifiers, MouseButton},
    signal::Signal,
    utils::{Size, Vec2}
};

pub mod registry;


// ----------------------------------------------
// WindowEvent
// ----------------------------------------------

// A translated native window event. Raw callback arguments are converted
// into the crate's input types before they reach the hub.
#[derive(Copy, Clone, Debug)]
pub enum WindowEvent {
    Resize(Size),
    Close,
    Refresh,
    Key(InputKey, InputAction, InputModifiers),
    MouseButton(MouseButton, InputAction, InputModifiers),
    CursorMove(Vec2),
    Scroll(Vec2),
    Focus(bool),
    Iconify(bool),
}

impl WindowEvent {
    // Stream this event routes to. Press and repeat resolve to the down
    // stream, release to the up stream.
    pub fn kind(self) -> EventKind {
        match self {
            WindowEvent::Resize(_) => EventKind::Resize,
            WindowEvent::Close => EventKind::Close,
            WindowEvent::Refresh => EventKind::Refresh,
            WindowEvent::Key(_, InputAction::Release, _) => EventKind::KeyUp,
            WindowEvent::Key(..) => EventKind::KeyDown,
            WindowEvent::MouseButton(_, InputAction::Release, _) => EventKind::MouseUp,
            WindowEvent::MouseButton(..) => EventKind::MouseDown,
            WindowEvent::CursorMove(_) => EventKind::CursorMove,
            WindowEvent::Scroll(_) => EventKind::Scroll,
            WindowEvent::Focus(_) => EventKind::Focus,
            WindowEvent::Iconify(_) => EventKind::Iconify,
        }
    }
}

// ----------------------------------------------
// EventKind
// ----------------------------------------------

#[derive(Copy, Clone, PartialEq, Eq, Debug, EnumCount, EnumIter)]
pub enum EventKind {
    Resize,
    Close,
    Refresh,
    KeyDown,
    KeyUp,
    MouseDown,
    MouseUp,
    CursorMove,
    Scroll,
    Focus,
    Iconify,
}

// ----------------------------------------------
// SignalOps
// ----------------------------------------------

// Payload-erased view over a single stream, so the hub can manage all of
// its signals uniformly when keyed by EventKind.
trait SignalOps {
    fn set_enabled(&mut self, enabled: bool);
    fn is_enabled(&self) -> bool;
    fn count(&self) -> usize;
    fn clear(&mut self);
}

impl<Args: 'static> SignalOps for Signal<Args> {
    #[inline]
    fn set_enabled(&mut self, enabled: bool) {
        Signal::set_enabled(self, enabled);
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        Signal::is_enabled(self)
    }

    #[inline]
    fn count(&self) -> usize {
        Signal::count(self)
    }

    #[inline]
    fn clear(&mut self) {
        Signal::clear(self);
    }
}

// ----------------------------------------------
// WindowSignals
// ----------------------------------------------

// Per-window set of dispatch streams, one signal per event kind. Fields
// are public so handlers connect directly to the stream they care about.
pub struct WindowSignals {
    pub resize:      Signal<Size>,
    pub close:       Signal<()>,
    pub refresh:     Signal<()>,
    pub key_down:    Signal<(InputKey, InputModifiers)>,
    pub key_up:      Signal<(InputKey, InputModifiers)>,
    pub mouse_down:  Signal<(MouseButton, InputModifiers)>,
    pub mouse_up:    Signal<(MouseButton, InputModifiers)>,
    pub cursor_move: Signal<Vec2>,
    pub scroll:      Signal<Vec2>,
    pub focus:       Signal<bool>,
    pub iconify:     Signal<bool>,
}

impl WindowSignals {
    pub fn new() -> Self {
        Self {
            resize:      Signal::with_name("resize"),
            close:       Signal::with_name("close"),
            refresh:     Signal::with_name("refresh"),
            key_down:    Signal::with_name("key_down"),
            key_up:      Signal::with_name("key_up"),
            mouse_down:  Signal::with_name("mouse_down"),
            mouse_up:    Signal::with_name("mouse_up"),
            cursor_move: Signal::with_name("cursor_move"),
            scroll:      Signal::with_name("scroll"),
            focus:       Signal::with_name("focus"),
            iconify:     Signal::with_name("iconify"),
        }
    }

    // Routes the event to its stream and returns the emit result. A false
    // return means the stream is disabled or a handler stopped the event,
    // which the window layer can treat as a veto (e.g. for Close).
    pub fn dispatch(&self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::Resize(size) => self.resize.emit(size),
            WindowEvent::Close => self.close.emit(()),
            WindowEvent::Refresh => self.refresh.emit(()),
            WindowEvent::Key(key, InputAction::Release, modifiers) => self.key_up.emit((key, modifiers)),
            WindowEvent::Key(key, _, modifiers) => self.key_down.emit((key, modifiers)),
            WindowEvent::MouseButton(button, InputAction::Release, modifiers) => self.mouse_up.emit((button, modifiers)),
            WindowEvent::MouseButton(button, _, modifiers) => self.mouse_down.emit((button, modifiers)),
            WindowEvent::CursorMove(position) => self.cursor_move.emit(position),
            WindowEvent::Scroll(offset) => self.scroll.emit(offset),
            WindowEvent::Focus(focused) => self.focus.emit(focused),
            WindowEvent::Iconify(iconified) => self.iconify.emit(iconified),
        }
    }

    #[inline]
    pub fn set_enabled(&mut self, kind: EventKind, enabled: bool) {
        self.stream_mut(kind).set_enabled(enabled);
    }

    #[inline]
    pub fn is_enabled(&self, kind: EventKind) -> bool {
        self.stream(kind).is_enabled()
    }

    #[inline]
    pub fn count(&self, kind: EventKind) -> usize {
        self.stream(kind).count()
    }

    #[inline]
    pub fn clear(&mut self, kind: EventKind) {
        self.stream_mut(kind).clear();
    }

    pub fn set_all_enabled(&mut self, enabled: bool) {
        for kind in EventKind::iter() {
            self.stream_mut(kind).set_enabled(enabled);
        }
    }

    pub fn clear_all(&mut self) {
        for kind in EventKind::iter() {
            self.stream_mut(kind).clear();
        }
    }

    pub fn total_count(&self) -> usize {
        EventKind::iter().map(|kind| self.stream(kind).count()).sum()
    }

    fn stream(&self, kind: EventKind) -> &dyn SignalOps {
        match kind {
            EventKind::Resize     => &self.resize,
            EventKind::Close      => &self.close,
            EventKind::Refresh    => &self.refresh,
            EventKind::KeyDown    => &self.key_down,
            EventKind::KeyUp      => &self.key_up,
            EventKind::MouseDown  => &self.mouse_down,
            EventKind::MouseUp    => &self.mouse_up,
            EventKind::CursorMove => &self.cursor_move,
            EventKind::Scroll     => &self.scroll,
            EventKind::Focus      => &self.focus,
            EventKind::Iconify    => &self.iconify,
        }
    }

    fn stream_mut(&mut self, kind: EventKind) -> &mut dyn SignalOps {
        match kind {
            EventKind::Resize     => &mut self.resize,
            EventKind::Close      => &mut self.close,
            EventKind::Refresh    => &mut self.refresh,
            EventKind::KeyDown    => &mut self.key_down,
            EventKind::KeyUp      => &mut self.key_up,
            EventKind::MouseDown  => &mut self.mouse_down,
            EventKind::MouseUp    => &mut self.mouse_up,
            EventKind::CursorMove => &mut self.cursor_move,
            EventKind::Scroll     => &mut self.scroll,
            EventKind::Focus      => &mut self.focus,
            EventKind::Iconify    => &mut self.iconify,
        }
    }
}

impl Default for WindowSignals {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
