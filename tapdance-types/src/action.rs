//! Key steps emitted by tap-dance actions.
//!
//! A tap-dance action is an authored, ordered list of [`KeyStep`]s. Each step
//! presses or releases exactly one key. The executor receiving the steps
//! decides how they reach the host.

use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;

/// Edge of a key step
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEdge {
    /// Key goes down and stays down
    Press,
    /// Key goes up
    Release,
}

/// A single press or release of one key
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyStep {
    pub key: KeyCode,
    pub edge: KeyEdge,
}

impl KeyStep {
    pub const fn press(key: KeyCode) -> Self {
        Self {
            key,
            edge: KeyEdge::Press,
        }
    }

    pub const fn release(key: KeyCode) -> Self {
        Self {
            key,
            edge: KeyEdge::Release,
        }
    }

    pub fn is_press(&self) -> bool {
        self.edge == KeyEdge::Press
    }
}
