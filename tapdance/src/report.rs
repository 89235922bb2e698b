//! An executor which turns key commands into HID keyboard reports.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use tapdance_types::keycode::KeyCode;
use tapdance_types::modifier::HidModifiers;

use crate::descriptor::KeyboardReport;
use crate::executor::KeyExecutor;

/// Keeps the held keys of a 6KRO keyboard report.
///
/// Every accepted press or release sends the whole report. The channel is
/// written with `try_send`, a full channel drops the report.
pub struct ReportExecutor<'ch, M: RawMutex, const N: usize> {
    channel: &'ch Channel<M, KeyboardReport, N>,
    held_modifiers: HidModifiers,
    held_keycodes: [KeyCode; 6],
}

impl<'ch, M: RawMutex, const N: usize> ReportExecutor<'ch, M, N> {
    pub fn new(channel: &'ch Channel<M, KeyboardReport, N>) -> Self {
        Self {
            channel,
            held_modifiers: HidModifiers::default(),
            held_keycodes: [KeyCode::No; 6],
        }
    }

    pub fn held_modifiers(&self) -> HidModifiers {
        self.held_modifiers
    }

    pub fn held_keycodes(&self) -> &[KeyCode; 6] {
        &self.held_keycodes
    }

    /// The report describing the currently held keys
    pub fn report(&self) -> KeyboardReport {
        KeyboardReport {
            modifier: self.held_modifiers.into_bits(),
            reserved: 0,
            leds: 0,
            keycodes: self.held_keycodes.map(|k| k as u8),
        }
    }

    fn send_report(&self) {
        if self.channel.try_send(self.report()).is_err() {
            warn!("Keyboard report channel is full, report dropped");
        }
    }

    fn register_keycode(&mut self, key: KeyCode) {
        if self.held_keycodes.contains(&key) {
            return;
        }
        if let Some(index) = self.held_keycodes.iter().position(|&k| k == KeyCode::No) {
            self.held_keycodes[index] = key;
        } else {
            warn!("No free slot in keyboard report for {:?}", key);
        }
    }

    fn unregister_keycode(&mut self, key: KeyCode) {
        // Release the first same key
        if let Some(index) = self.held_keycodes.iter().position(|&k| k == key) {
            self.held_keycodes[index] = KeyCode::No;
        }
    }
}

impl<M: RawMutex, const N: usize> KeyExecutor for ReportExecutor<'_, M, N> {
    fn press(&mut self, key: KeyCode) {
        if key.is_modifier() {
            self.held_modifiers |= key.to_hid_modifiers();
        } else if key.is_basic() {
            self.register_keycode(key);
        } else {
            debug!("Ignore press of {:?}", key);
            return;
        }
        self.send_report();
    }

    fn release(&mut self, key: KeyCode) {
        if key.is_modifier() {
            self.held_modifiers &= !key.to_hid_modifiers();
        } else if key.is_basic() {
            self.unregister_keycode(key);
        } else {
            debug!("Ignore release of {:?}", key);
            return;
        }
        self.send_report();
    }
}
