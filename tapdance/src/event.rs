use embassy_time::Instant;

use crate::tap_dance::TapDanceId;

/// Which key an event comes from, as far as tap dances are concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DanceKey {
    /// A key bound to a tap-dance instance
    TapDance(TapDanceId),
    /// Any other key
    Other,
}

/// A debounced key change with the time it happened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardEvent {
    pub key: DanceKey,
    pub pressed: bool,
    pub time: Instant,
}

impl KeyboardEvent {
    pub fn tap_dance(id: TapDanceId, pressed: bool, time: Instant) -> Self {
        Self {
            key: DanceKey::TapDance(id),
            pressed,
            time,
        }
    }

    pub fn other(pressed: bool, time: Instant) -> Self {
        Self {
            key: DanceKey::Other,
            pressed,
            time,
        }
    }
}
