//! Exposed channels which can be used to share data across tasks

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};

use crate::descriptor::KeyboardReport;
use crate::event::KeyboardEvent;
use crate::{EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, RawMutex};

/// Timed key events, to be filled by the matrix scanner
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyboardEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Reports emitted by tap dances, to be drained by the USB or BLE writer
pub static KEYBOARD_REPORT_CHANNEL: Channel<RawMutex, KeyboardReport, REPORT_CHANNEL_SIZE> = Channel::new();
