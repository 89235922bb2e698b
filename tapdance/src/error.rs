//! Errors of the tap-dance engine.
//!
//! Classification and dispatch never fail: unclassifiable interactions and
//! outcomes without actions are silent no-ops. The errors here are raised when
//! building the instance set or when an instance is addressed by an identity
//! which was never registered.

use core::fmt;

use tapdance_types::dance::DanceOutcome;

use crate::tap_dance::TapDanceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapDanceError {
    /// No instance is registered with this identity
    UnknownInstance(TapDanceId),
    /// An instance with this identity is already registered
    DuplicateInstance(TapDanceId),
    /// The registry is full
    TooManyInstances,
    /// An action has more key steps than `TAP_DANCE_MAX_STEPS`
    TooManySteps,
    /// `None` and `Unknown` can't carry actions
    NotBindable(DanceOutcome),
}

impl fmt::Display for TapDanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TapDanceError::UnknownInstance(id) => write!(f, "no tap dance registered as {}", id.0),
            TapDanceError::DuplicateInstance(id) => write!(f, "tap dance {} is registered twice", id.0),
            TapDanceError::TooManyInstances => write!(f, "too many tap dances"),
            TapDanceError::TooManySteps => write!(f, "too many key steps in one tap dance action"),
            TapDanceError::NotBindable(outcome) => write!(f, "{:?} can't be bound to an action", outcome),
        }
    }
}

impl core::error::Error for TapDanceError {}
