//! HID keyboard usage codes.
//!
//! Only the keyboard/keypad usage page is covered: tap-dance actions only ever
//! press and release plain keys and modifiers, so consumer, system and mouse
//! usages are not represented here.

use serde::{Deserialize, Serialize};
use strum::FromRepr;

use crate::modifier::HidModifiers;

/// Key codes defined in the HID keyboard/keypad usage page
#[repr(u8)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    #[default]
    No = 0x0000,
    /// Keyboard roll over error, too many keys are pressed simultaneously, not a physical key.
    ErrorRollover = 0x0001,
    /// Keyboard post fail error, not a physical key.
    PostFail = 0x0002,
    /// An undefined error, not a physical key.
    ErrorUndefined = 0x0003,
    /// `a` and `A`
    A = 0x0004,
    /// `b` and `B`
    B = 0x0005,
    /// `c` and `C`
    C = 0x0006,
    /// `d` and `D`
    D = 0x0007,
    /// `e` and `E`
    E = 0x0008,
    /// `f` and `F`
    F = 0x0009,
    /// `g` and `G`
    G = 0x000A,
    /// `h` and `H`
    H = 0x000B,
    /// `i` and `I`
    I = 0x000C,
    /// `j` and `J`
    J = 0x000D,
    /// `k` and `K`
    K = 0x000E,
    /// `l` and `L`
    L = 0x000F,
    /// `m` and `M`
    M = 0x0010,
    /// `n` and `N`
    N = 0x0011,
    /// `o` and `O`
    O = 0x0012,
    /// `p` and `P`
    P = 0x0013,
    /// `q` and `Q`
    Q = 0x0014,
    /// `r` and `R`
    R = 0x0015,
    /// `s` and `S`
    S = 0x0016,
    /// `t` and `T`
    T = 0x0017,
    /// `u` and `U`
    U = 0x0018,
    /// `v` and `V`
    V = 0x0019,
    /// `w` and `W`
    W = 0x001A,
    /// `x` and `X`
    X = 0x001B,
    /// `y` and `Y`
    Y = 0x001C,
    /// `z` and `Z`
    Z = 0x001D,
    /// `1` and `!`
    Kc1 = 0x001E,
    /// `2` and `@`
    Kc2 = 0x001F,
    /// `3` and `#`
    Kc3 = 0x0020,
    /// `4` and `$`
    Kc4 = 0x0021,
    /// `5` and `%`
    Kc5 = 0x0022,
    /// `6` and `^`
    Kc6 = 0x0023,
    /// `7` and `&`
    Kc7 = 0x0024,
    /// `8` and `*`
    Kc8 = 0x0025,
    /// `9` and `(`
    Kc9 = 0x0026,
    /// `0` and `)`
    Kc0 = 0x0027,
    /// `Enter`
    Enter = 0x0028,
    /// `Esc`
    Escape = 0x0029,
    /// `Backspace`
    Backspace = 0x002A,
    /// `Tab`
    Tab = 0x002B,
    /// `Space`
    Space = 0x002C,
    /// `-` and `_`
    Minus = 0x002D,
    /// `=` and `+`
    Equal = 0x002E,
    /// `[` and `{`
    LeftBracket = 0x002F,
    /// `]` and `}`
    RightBracket = 0x0030,
    /// `\` and `|`
    Backslash = 0x0031,
    /// Non-US `#` and `~`
    NonusHash = 0x0032,
    /// `;` and `:`
    Semicolon = 0x0033,
    /// `'` and `"`
    Quote = 0x0034,
    /// `` ` `` and `~`
    Grave = 0x0035,
    /// `,` and `<`
    Comma = 0x0036,
    /// `.` and `>`
    Dot = 0x0037,
    /// `/` and `?`
    Slash = 0x0038,
    /// `CapsLock`
    CapsLock = 0x0039,
    /// `F1`
    F1 = 0x003A,
    /// `F2`
    F2 = 0x003B,
    /// `F3`
    F3 = 0x003C,
    /// `F4`
    F4 = 0x003D,
    /// `F5`
    F5 = 0x003E,
    /// `F6`
    F6 = 0x003F,
    /// `F7`
    F7 = 0x0040,
    /// `F8`
    F8 = 0x0041,
    /// `F9`
    F9 = 0x0042,
    /// `F10`
    F10 = 0x0043,
    /// `F11`
    F11 = 0x0044,
    /// `F12`
    F12 = 0x0045,
    /// `PrintScreen`
    PrintScreen = 0x0046,
    /// `ScrollLock`
    ScrollLock = 0x0047,
    /// `Pause`
    Pause = 0x0048,
    /// `Insert`
    Insert = 0x0049,
    /// `Home`
    Home = 0x004A,
    /// `PageUp`
    PageUp = 0x004B,
    /// `Delete`
    Delete = 0x004C,
    /// `End`
    End = 0x004D,
    /// `PageDown`
    PageDown = 0x004E,
    /// `Right`
    Right = 0x004F,
    /// `Left`
    Left = 0x0050,
    /// `Down`
    Down = 0x0051,
    /// `Up`
    Up = 0x0052,
    /// `NumLock`
    NumLock = 0x0053,
    /// Keypad `/`
    KpSlash = 0x0054,
    /// Keypad `*`
    KpAsterisk = 0x0055,
    /// Keypad `-`
    KpMinus = 0x0056,
    /// Keypad `+`
    KpPlus = 0x0057,
    /// Keypad `Enter`
    KpEnter = 0x0058,
    /// Keypad `1` and `End`
    Kp1 = 0x0059,
    /// Keypad `2` and `Down`
    Kp2 = 0x005A,
    /// Keypad `3` and `PageDown`
    Kp3 = 0x005B,
    /// Keypad `4` and `Left`
    Kp4 = 0x005C,
    /// Keypad `5`
    Kp5 = 0x005D,
    /// Keypad `6` and `Right`
    Kp6 = 0x005E,
    /// Keypad `7` and `Home`
    Kp7 = 0x005F,
    /// Keypad `8` and `Up`
    Kp8 = 0x0060,
    /// Keypad `9` and `PageUp`
    Kp9 = 0x0061,
    /// Keypad `0` and `Insert`
    Kp0 = 0x0062,
    /// Keypad `.` and `Delete`
    KpDot = 0x0063,
    /// Non-US `\` and `|`
    NonusBackslash = 0x0064,
    /// `Application`
    Application = 0x0065,
    /// Left Control
    LCtrl = 0x00E0,
    /// Left Shift
    LShift = 0x00E1,
    /// Left Alt
    LAlt = 0x00E2,
    /// Left GUI
    LGui = 0x00E3,
    /// Right Control
    RCtrl = 0x00E4,
    /// Right Shift
    RShift = 0x00E5,
    /// Right Alt
    RAlt = 0x00E6,
    /// Right GUI
    RGui = 0x00E7,
}

impl KeyCode {
    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        KeyCode::LCtrl <= self && self <= KeyCode::RGui
    }

    /// Returns `true` if the keycode occupies one of the six key slots of a boot keyboard report
    pub fn is_basic(self) -> bool {
        KeyCode::A <= self && self <= KeyCode::Application
    }

    /// Returns the modifier bit of the keycode, or an empty set for non-modifier keys
    pub fn to_hid_modifiers(self) -> HidModifiers {
        match self {
            KeyCode::LCtrl => HidModifiers::new().with_left_ctrl(true),
            KeyCode::LShift => HidModifiers::new().with_left_shift(true),
            KeyCode::LAlt => HidModifiers::new().with_left_alt(true),
            KeyCode::LGui => HidModifiers::new().with_left_gui(true),
            KeyCode::RCtrl => HidModifiers::new().with_right_ctrl(true),
            KeyCode::RShift => HidModifiers::new().with_right_shift(true),
            KeyCode::RAlt => HidModifiers::new().with_right_alt(true),
            KeyCode::RGui => HidModifiers::new().with_right_gui(true),
            _ => HidModifiers::new(),
        }
    }
}

impl From<u8> for KeyCode {
    fn from(value: u8) -> Self {
        KeyCode::from_repr(value).unwrap_or(KeyCode::No)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_range() {
        assert!(KeyCode::LShift.is_modifier());
        assert!(KeyCode::RGui.is_modifier());
        assert!(!KeyCode::Kc7.is_modifier());
        assert!(!KeyCode::LShift.is_basic());
        assert!(KeyCode::Backslash.is_basic());
        assert!(!KeyCode::No.is_basic());
    }

    #[test]
    fn test_modifier_bits() {
        assert_eq!(KeyCode::LShift.to_hid_modifiers().into_bits(), 0b0000_0010);
        assert_eq!(KeyCode::RGui.to_hid_modifiers().into_bits(), 0b1000_0000);
        assert_eq!(KeyCode::Slash.to_hid_modifiers().into_bits(), 0);
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(KeyCode::from(0x24), KeyCode::Kc7);
        assert_eq!(KeyCode::from(0xE1), KeyCode::LShift);
        // Outside of the keyboard page subset
        assert_eq!(KeyCode::from(0xA8), KeyCode::No);
    }
}
