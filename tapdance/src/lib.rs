//! Tap dances for keyboard firmware.
//!
//! A tap-dance key sends different keys depending on how it was used within
//! one interaction: tapped once, held, tapped twice, etc. This crate contains
//! the classification of an interaction, the per-key controllers which apply
//! the authored actions, and a reference dispatcher which counts presses under
//! a tapping term and writes HID keyboard reports.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;
#[macro_use]
pub mod layout_macro;

use embassy_time::Duration;
pub use tapdance_types::{action, dance, keycode, modifier};

pub mod channel;
pub mod classifier;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod event;
pub mod executor;
pub mod registry;
pub mod report;
pub mod runner;
pub mod symbol_layer;
pub mod tap_dance;
pub mod tracker;

pub use classifier::classify;
pub use config::TapDanceConfig;
pub use error::TapDanceError;
pub use executor::{KeyExecutor, RecordingExecutor};
pub use registry::TapDances;
pub use tap_dance::{ActionTable, DanceActions, DanceState, TapDance, TapDanceId};
pub use tracker::TapDanceTracker;

/// Mutex used by the exposed channels
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Max number of tap-dance instances in a registry
pub const TAP_DANCE_MAX_NUM: usize = 16;
/// Max number of key steps of one action list
pub const TAP_DANCE_MAX_STEPS: usize = 8;
/// Default window for counting presses of the same key
pub const DEFAULT_TAPPING_TERM: Duration = Duration::from_millis(200);

pub(crate) const EVENT_CHANNEL_SIZE: usize = 16;
pub(crate) const REPORT_CHANNEL_SIZE: usize = 16;
