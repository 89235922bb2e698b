//! Names of key codes in configuration files.
//!
//! Every key code is reachable by its lowercase variant name, plus the usual
//! QMK style shorthands and the printed character for symbol keys.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;
use serde::de::IntoDeserializer;
use serde::de::value::Error as ValueError;
use tapdance_types::keycode::KeyCode;

pub static KEYCODE_ALIAS: Lazy<HashMap<&str, &str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    macro_rules! add_alias {
        ($keycode:tt) => {
            m.insert(paste::paste!{ stringify!([<$keycode:lower>]) }, $keycode);
        };
        ($keycode:tt = $( $alias:expr),*) => {
            add_alias!($keycode);
            $(
                m.insert($alias, $keycode);
            )*
        };
    }

    add_alias!("No");
    add_alias!("A");
    add_alias!("B");
    add_alias!("C");
    add_alias!("D");
    add_alias!("E");
    add_alias!("F");
    add_alias!("G");
    add_alias!("H");
    add_alias!("I");
    add_alias!("J");
    add_alias!("K");
    add_alias!("L");
    add_alias!("M");
    add_alias!("N");
    add_alias!("O");
    add_alias!("P");
    add_alias!("Q");
    add_alias!("R");
    add_alias!("S");
    add_alias!("T");
    add_alias!("U");
    add_alias!("V");
    add_alias!("W");
    add_alias!("X");
    add_alias!("Y");
    add_alias!("Z");
    add_alias!("Kc1" = "1");
    add_alias!("Kc2" = "2");
    add_alias!("Kc3" = "3");
    add_alias!("Kc4" = "4");
    add_alias!("Kc5" = "5");
    add_alias!("Kc6" = "6");
    add_alias!("Kc7" = "7");
    add_alias!("Kc8" = "8");
    add_alias!("Kc9" = "9");
    add_alias!("Kc0" = "0");
    add_alias!("Enter" = "ent");
    add_alias!("Escape" = "esc");
    add_alias!("Backspace" = "bspc");
    add_alias!("Tab");
    add_alias!("Space" = "spc");
    add_alias!("Minus" = "mins", "-");
    add_alias!("Equal" = "eql", "=");
    add_alias!("LeftBracket" = "left_bracket", "lbrc", "[");
    add_alias!("RightBracket" = "right_bracket", "rbrc", "]");
    add_alias!("Backslash" = "bsls", "\\");
    add_alias!("NonusHash" = "nonus_hash", "nuhs");
    add_alias!("Semicolon" = "scln", ";");
    add_alias!("Quote" = "quot", "'");
    add_alias!("Grave" = "grv", "`");
    add_alias!("Comma" = "comm", ",");
    add_alias!("Dot" = ".");
    add_alias!("Slash" = "slsh", "/");
    add_alias!("CapsLock" = "caps_lock", "caps");
    add_alias!("F1");
    add_alias!("F2");
    add_alias!("F3");
    add_alias!("F4");
    add_alias!("F5");
    add_alias!("F6");
    add_alias!("F7");
    add_alias!("F8");
    add_alias!("F9");
    add_alias!("F10");
    add_alias!("F11");
    add_alias!("F12");
    add_alias!("PrintScreen" = "print_screen", "pscr");
    add_alias!("ScrollLock" = "scroll_lock", "scrl", "brmd");
    add_alias!("Pause" = "paus", "brk", "brmu");
    add_alias!("Insert" = "ins");
    add_alias!("Home");
    add_alias!("PageUp" = "page_up", "pgup");
    add_alias!("Delete" = "del");
    add_alias!("End");
    add_alias!("PageDown" = "page_down", "pgdn");
    add_alias!("Right" = "rght");
    add_alias!("Left");
    add_alias!("Down");
    add_alias!("Up");
    add_alias!("NumLock" = "num_lock", "num");
    add_alias!("KpSlash" = "kp_slash", "psls");
    add_alias!("KpAsterisk" = "kp_asterisk", "past");
    add_alias!("KpMinus" = "kp_minus", "pmns");
    add_alias!("KpPlus" = "kp_plus", "ppls");
    add_alias!("KpEnter" = "kp_enter", "pent");
    add_alias!("Kp1" = "kp_1");
    add_alias!("Kp2" = "kp_2");
    add_alias!("Kp3" = "kp_3");
    add_alias!("Kp4" = "kp_4");
    add_alias!("Kp5" = "kp_5");
    add_alias!("Kp6" = "kp_6");
    add_alias!("Kp7" = "kp_7");
    add_alias!("Kp8" = "kp_8");
    add_alias!("Kp9" = "kp_9");
    add_alias!("Kp0" = "kp_0");
    add_alias!("KpDot" = "kp_dot", "pdot");
    add_alias!("NonusBackslash" = "nonus_backslash", "nubs");
    add_alias!("Application" = "app");
    add_alias!("LCtrl" = "l_ctrl", "leftctrl", "left_ctrl", "lctl");
    add_alias!("LShift" = "l_shift", "leftshift", "left_shift", "lsft");
    add_alias!("LAlt" = "l_alt", "leftalt", "left_alt", "lopt");
    add_alias!("LGui" = "l_gui", "leftgui", "left_gui", "lcmd", "lwin");
    add_alias!("RCtrl" = "r_ctrl", "rightctrl", "right_ctrl", "rctl");
    add_alias!("RShift" = "r_shift", "rightshift", "right_shift", "rsft");
    add_alias!("RAlt" = "r_alt", "rightalt", "right_alt", "ropt", "algr");
    add_alias!("RGui" = "r_gui", "rightgui", "right_gui", "rcmd", "rwin");

    m
});

/// Look up a key code by name, case-insensitively
pub fn parse_keycode(name: &str) -> Option<KeyCode> {
    let canonical = KEYCODE_ALIAS.get(name.to_lowercase().as_str())?;
    let deserializer: serde::de::value::StrDeserializer<'_, ValueError> = (*canonical).into_deserializer();
    KeyCode::deserialize(deserializer).ok()
}
