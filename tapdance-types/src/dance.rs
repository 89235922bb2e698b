//! Tap-dance observations and outcomes.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, FromRepr};

/// What the dispatcher saw when the tap-dance window of one key closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Observation {
    /// Number of presses counted within the window
    pub count: u8,
    /// Another key was pressed before the window closed
    pub interrupted: bool,
    /// The key is still held when the window closes
    pub pressed: bool,
}

impl Observation {
    pub const fn new(count: u8, interrupted: bool, pressed: bool) -> Self {
        Self {
            count,
            interrupted,
            pressed,
        }
    }
}

/// The decision made for one tap-dance interaction.
///
/// `None` is the idle value of an instance, `Unknown` is returned for tap
/// counts which can't be classified.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, EnumCount, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DanceOutcome {
    #[default]
    None,
    Unknown,
    SingleTap,
    SingleHold,
    DoubleTap,
    DoubleHold,
    /// Two quick taps interrupted by another key, sent as two plain keystrokes
    DoubleSingleTap,
    TripleTap,
    TripleHold,
}

impl DanceOutcome {
    /// All outcomes which can be bound to actions, in declaration order
    pub const BINDABLE: [DanceOutcome; 7] = [
        DanceOutcome::SingleTap,
        DanceOutcome::SingleHold,
        DanceOutcome::DoubleTap,
        DanceOutcome::DoubleHold,
        DanceOutcome::DoubleSingleTap,
        DanceOutcome::TripleTap,
        DanceOutcome::TripleHold,
    ];

    /// `None` and `Unknown` never carry actions
    pub fn is_bindable(self) -> bool {
        !matches!(self, DanceOutcome::None | DanceOutcome::Unknown)
    }
}
