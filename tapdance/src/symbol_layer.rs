//! The symbol layer: fifteen tap-dance keys, each carrying two symbols.
//!
//! The first symbol is sent on a single tap, the second one on a hold or a
//! double tap. Typing the first symbol twice in a row is a double single tap,
//! which some keys send as a tap followed by a held key and others as two
//! complete taps.

use strum::{EnumCount, FromRepr};
use tapdance_types::action::KeyStep;
use tapdance_types::dance::DanceOutcome;
use tapdance_types::keycode::KeyCode;

use crate::error::TapDanceError;
use crate::registry::TapDances;
use crate::tap_dance::{ActionTable, DanceActions, TapDanceId};

/// Tap-dance keys of the symbol layer, in keymap order
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumCount, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SymbolDance {
    /// `&` / `|`
    AmpersandPipe,
    /// `*` / `^`
    AsteriskCircle,
    /// `[` / `]`
    Braces,
    /// `{` / `}`
    CurlyBraces,
    /// `=` / `+`
    EqualPlus,
    /// `` ` `` / `~`
    GraveTilde,
    /// `<` / `>`
    LessthanGreaterthan,
    /// `(` / `)`
    Parenthesis,
    /// `q` / Escape
    QEscape,
    /// `?` / `!`
    QuestionExclamation,
    /// `'` / `"`
    QuoteDoublequote,
    /// `;` / `:`
    SemicolonColon,
    /// `/` / `\`
    SlashBackslash,
    /// `_` / `-`
    UnderscoreMinus,
    /// `z` / Caps Lock
    ZCapslock,
}

impl SymbolDance {
    pub fn id(self) -> TapDanceId {
        TapDanceId(self as u8)
    }

    pub fn iter() -> impl Iterator<Item = SymbolDance> {
        (0..Self::COUNT as u8).filter_map(Self::from_repr)
    }

    /// Action table of the key
    pub fn table(self) -> Result<ActionTable, TapDanceError> {
        use SymbolDance::*;
        match self {
            AmpersandPipe => symbols(hold!(LShift, Kc7)?, hold!(LShift, Backslash)?, shifted_tap_then_hold(KeyCode::Kc7)?),
            AsteriskCircle => symbols(hold!(LShift, Kc8)?, hold!(LShift, Kc6)?, shifted_tap_then_hold(KeyCode::Kc8)?),
            Braces => symbols(hold!(LeftBracket)?, hold!(RightBracket)?, two_taps!(LeftBracket)),
            CurlyBraces => symbols(
                hold!(LShift, LeftBracket)?,
                hold!(LShift, RightBracket)?,
                shifted_tap_then_hold(KeyCode::LeftBracket)?,
            ),
            EqualPlus => symbols(hold!(Equal)?, hold!(LShift, Equal)?, two_taps!(Equal)),
            GraveTilde => symbols(hold!(Grave)?, hold!(LShift, Grave)?, two_taps!(Grave)),
            LessthanGreaterthan => symbols(hold!(LShift, Comma)?, hold!(LShift, Dot)?, shifted_two_taps(KeyCode::Comma)?),
            Parenthesis => symbols(hold!(LShift, Kc9)?, hold!(LShift, Kc0)?, shifted_tap_then_hold(KeyCode::Kc9)?),
            QEscape => symbols(hold!(Q)?, hold!(Escape)?, tap_then_hold!(Q)),
            QuestionExclamation => symbols(hold!(LShift, Slash)?, hold!(LShift, Kc1)?, shifted_two_taps(KeyCode::Slash)?),
            QuoteDoublequote => symbols(hold!(Quote)?, hold!(LShift, Quote)?, two_taps!(Quote)),
            SemicolonColon => symbols(hold!(Semicolon)?, hold!(LShift, Semicolon)?, tap_then_hold!(Semicolon)),
            SlashBackslash => symbols(hold!(Slash)?, hold!(Backslash)?, tap_then_hold!(Slash)),
            UnderscoreMinus => symbols(hold!(LShift, Minus)?, hold!(Minus)?, shifted_two_taps(KeyCode::Minus)?),
            ZCapslock => symbols(hold!(Z)?, hold!(CapsLock)?, tap_then_hold!(Z)),
        }
    }
}

impl From<SymbolDance> for TapDanceId {
    fn from(value: SymbolDance) -> Self {
        value.id()
    }
}

/// Registry with every key of the symbol layer
pub fn symbol_tap_dances() -> Result<TapDances, TapDanceError> {
    let mut dances = TapDances::new();
    for dance in SymbolDance::iter() {
        dances.add(dance.id(), dance.table()?)?;
    }
    Ok(dances)
}

fn symbols(first: DanceActions, second: DanceActions, double_single: DanceActions) -> Result<ActionTable, TapDanceError> {
    ActionTable::new()
        .with(DanceOutcome::SingleTap, first)?
        .with(DanceOutcome::SingleHold, second.clone())?
        .with(DanceOutcome::DoubleTap, second)?
        .with(DanceOutcome::DoubleSingleTap, double_single)
}

fn shifted_tap_then_hold(key: KeyCode) -> Result<DanceActions, TapDanceError> {
    DanceActions::new(
        &[press!(LShift), KeyStep::press(key), KeyStep::release(key), KeyStep::press(key)],
        &[KeyStep::release(key), release!(LShift)],
    )
}

fn shifted_two_taps(key: KeyCode) -> Result<DanceActions, TapDanceError> {
    DanceActions::new(
        &[
            press!(LShift),
            KeyStep::press(key),
            KeyStep::release(key),
            KeyStep::press(key),
            KeyStep::release(key),
            release!(LShift),
        ],
        &[],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities_are_dense() {
        assert_eq!(SymbolDance::COUNT, 15);
        for (i, dance) in SymbolDance::iter().enumerate() {
            assert_eq!(dance.id(), TapDanceId(i as u8));
        }
    }

    #[test]
    fn test_every_key_binds_four_outcomes() {
        for dance in SymbolDance::iter() {
            let table = dance.table().unwrap();
            for outcome in [
                DanceOutcome::SingleTap,
                DanceOutcome::SingleHold,
                DanceOutcome::DoubleTap,
                DanceOutcome::DoubleSingleTap,
            ] {
                assert!(table.get(outcome).is_some(), "{:?} misses {:?}", dance, outcome);
            }
            assert!(table.get(DanceOutcome::TripleTap).is_none());
        }
    }

    #[test]
    fn test_registry() {
        let dances = symbol_tap_dances().unwrap();
        assert_eq!(dances.len(), SymbolDance::COUNT);
    }
}
