//! Receivers of the key commands decided by tap dances.

use heapless::Vec;
use tapdance_types::action::{KeyEdge, KeyStep};
use tapdance_types::keycode::KeyCode;

/// The action executor.
///
/// Called synchronously from the scan loop, implementations must not block.
pub trait KeyExecutor {
    /// Press a virtual key and keep it pressed
    fn press(&mut self, key: KeyCode);

    /// Release a virtual key
    fn release(&mut self, key: KeyCode);

    /// Apply one key step
    fn apply(&mut self, step: KeyStep) {
        match step.edge {
            KeyEdge::Press => self.press(step.key),
            KeyEdge::Release => self.release(step.key),
        }
    }
}

impl<E: KeyExecutor + ?Sized> KeyExecutor for &mut E {
    fn press(&mut self, key: KeyCode) {
        (**self).press(key)
    }

    fn release(&mut self, key: KeyCode) {
        (**self).release(key)
    }
}

/// An executor which only records the steps it receives.
///
/// Steps beyond the capacity `N` are dropped.
#[derive(Debug, Default)]
pub struct RecordingExecutor<const N: usize = 32> {
    steps: Vec<KeyStep, N>,
}

impl<const N: usize> RecordingExecutor<N> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// All recorded steps, in the order they were applied
    pub fn steps(&self) -> &[KeyStep] {
        &self.steps
    }

    /// Take the recorded steps, leaving the recorder empty
    pub fn take(&mut self) -> Vec<KeyStep, N> {
        core::mem::take(&mut self.steps)
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    fn record(&mut self, step: KeyStep) {
        if self.steps.push(step).is_err() {
            warn!("Recording executor is full, dropping {:?}", step);
        }
    }
}

impl<const N: usize> KeyExecutor for RecordingExecutor<N> {
    fn press(&mut self, key: KeyCode) {
        self.record(KeyStep::press(key));
    }

    fn release(&mut self, key: KeyCode) {
        self.record(KeyStep::release(key));
    }
}
