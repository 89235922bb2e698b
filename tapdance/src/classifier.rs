//! Classification of a closed tap-dance window.
//!
//! Two flags of the observation decide between tap and hold:
//!
//! - `interrupted`: another key was hit within the tapping term, which usually
//!   means the user is typing and wants a tap.
//! - `pressed`: the key is still held when the tapping term ends, which
//!   usually means the user wants a hold.
//!
//! Tap-dance keys work best on keys which are rarely doubled in normal text.
//! `DoubleSingleTap` covers the case of typing the same symbol twice quickly
//! ("pepper"). There is no triple single tap: hitting the same tap-dance key
//! three times in quick succession is always classified as a triple tap.

use tapdance_types::dance::{DanceOutcome, Observation};

/// Map an observation to a dance outcome.
///
/// Counts other than 1, 2 and 3 are `Unknown`, which is never bound to actions.
pub fn classify(observation: Observation) -> DanceOutcome {
    let Observation {
        count,
        interrupted,
        pressed,
    } = observation;

    match count {
        1 => {
            if interrupted || !pressed {
                DanceOutcome::SingleTap
            } else {
                // Not interrupted and still held
                DanceOutcome::SingleHold
            }
        }
        2 => {
            if interrupted {
                DanceOutcome::DoubleSingleTap
            } else if pressed {
                DanceOutcome::DoubleHold
            } else {
                DanceOutcome::DoubleTap
            }
        }
        3 => {
            if interrupted || !pressed {
                DanceOutcome::TripleTap
            } else {
                DanceOutcome::TripleHold
            }
        }
        _ => DanceOutcome::Unknown,
    }
}
