use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::bitflags_with_display;

// Raw values follow the GLFW numeric conventions, so events sourced from
// a native window layer convert without a translation table.

// ----------------------------------------------
// InputAction
// ----------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum InputAction {
    Release = 0,
    Press   = 1,
    Repeat  = 2,
}

impl InputAction {
    // Unknown native action values fall back to Release.
    #[inline]
    pub fn from_raw(raw: i32) -> Self {
        Self::try_from_primitive(raw).unwrap_or(Self::Release)
    }
}

// ----------------------------------------------
// MouseButton
// ----------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum MouseButton {
    Button1 = 0,
    Button2 = 1,
    Button3 = 2,
    Button4 = 3,
    Button5 = 4,
    Button6 = 5,
    Button7 = 6,
    Button8 = 7,
}

#[allow(non_upper_case_globals)]
impl MouseButton {
    pub const Left:   MouseButton = MouseButton::Button1;
    pub const Right:  MouseButton = MouseButton::Button2;
    pub const Middle: MouseButton = MouseButton::Button3;

    // Buttons outside the supported range are dropped.
    #[inline]
    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::try_from_primitive(raw).ok()
    }
}

// ----------------------------------------------
// InputKey
// ----------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum InputKey {
    Unknown = -1,

    // Printable keys:
    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    Num0 = 48,
    Num1 = 49,
    Num2 = 50,
    Num3 = 51,
    Num4 = 52,
    Num5 = 53,
    Num6 = 54,
    Num7 = 55,
    Num8 = 56,
    Num9 = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    GraveAccent = 96,
    World1 = 161,
    World2 = 162,

    // Navigation and editing keys:
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,

    // Function keys:
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    F13 = 302,
    F14 = 303,
    F15 = 304,
    F16 = 305,
    F17 = 306,
    F18 = 307,
    F19 = 308,
    F20 = 309,
    F21 = 310,
    F22 = 311,
    F23 = 312,
    F24 = 313,
    F25 = 314,

    // Keypad:
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,

    // Modifier keys:
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    Menu = 348,
}

impl InputKey {
    // Unmapped native key values fall back to Unknown.
    #[inline]
    pub fn from_raw(raw: i32) -> Self {
        Self::try_from_primitive(raw).unwrap_or(Self::Unknown)
    }
}

// ----------------------------------------------
// InputModifiers
// ----------------------------------------------

bitflags_with_display! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct InputModifiers: i32 {
        const Shift    = 0x0001;
        const Control  = 0x0002;
        const Alt      = 0x0004;
        const Super    = 0x0008;
        const CapsLock = 0x0010;
        const NumLock  = 0x0020;
    }
}

impl InputModifiers {
    // Unknown native modifier bits are dropped.
    #[inline]
    pub fn from_raw(raw: i32) -> Self {
        Self::from_bits_truncate(raw)
    }
}

// ----------------------------------------------
// Unit Tests
// ----------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_conversions() {
        assert_eq!(InputAction::from_raw(0), InputAction::Release);
        assert_eq!(InputAction::from_raw(1), InputAction::Press);
        assert_eq!(InputAction::from_raw(2), InputAction::Repeat);
        assert_eq!(InputAction::from_raw(99), InputAction::Release);

        assert_eq!(InputKey::from_raw(32), InputKey::Space);
        assert_eq!(InputKey::from_raw(290), InputKey::F1);
        assert_eq!(InputKey::from_raw(348), InputKey::Menu);
        assert_eq!(InputKey::from_raw(-7), InputKey::Unknown);
        assert_eq!(InputKey::from_raw(1000), InputKey::Unknown);

        let raw: i32 = InputKey::Escape.into();
        assert_eq!(raw, 256);

        assert_eq!(MouseButton::from_raw(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_raw(2), Some(MouseButton::Middle));
        assert_eq!(MouseButton::from_raw(7), Some(MouseButton::Button8));
        assert_eq!(MouseButton::from_raw(8), None);

        let modifiers = InputModifiers::from_raw(0x0001 | 0x0002 | 0x4000);
        assert_eq!(modifiers, InputModifiers::Shift | InputModifiers::Control);
        assert_eq!(modifiers.to_string(), "Shift | Control");
        assert_eq!(InputModifiers::from_raw(0), InputModifiers::empty());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&InputKey::Space).unwrap(), "\"Space\"");
        assert_eq!(serde_json::from_str::<InputKey>("\"F12\"").unwrap(), InputKey::F12);
        assert_eq!(serde_json::to_string(&InputAction::Press).unwrap(), "\"Press\"");
        assert_eq!(serde_json::to_string(&MouseButton::Left).unwrap(), "\"Button1\"");

        let modifiers = InputModifiers::Shift | InputModifiers::NumLock;
        let json = serde_json::to_string(&modifiers).unwrap();
        assert_eq!(serde_json::from_str::<InputModifiers>(&json).unwrap(), modifiers);
    }
}
