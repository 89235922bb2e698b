//! Counting of key presses into tap-dance interactions.
//!
//! The tracker turns timed key events into observations and decides when an
//! interaction window closes:
//!
//! - every press of a tap-dance key restarts its tapping term
//! - a press of any other key interrupts and closes all counting windows
//! - a window whose tapping term elapses is closed by [`TapDanceTracker::tick`]
//!
//! When the key is already up at that point the instance is released right
//! away, otherwise the release follows the physical release of the key.

use embassy_time::{Duration, Instant};
use heapless::Vec;
use tapdance_types::dance::Observation;

use crate::TAP_DANCE_MAX_NUM;
use crate::config::TapDanceConfig;
use crate::error::TapDanceError;
use crate::event::{DanceKey, KeyboardEvent};
use crate::executor::KeyExecutor;
use crate::registry::TapDances;
use crate::tap_dance::TapDanceId;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowPhase {
    /// Counting presses, waiting for the tapping term or an interruption
    Counting,
    /// Resolved while the key is held, waiting for its release
    Finished,
}

/// The interaction in flight of one tap-dance instance
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceWindow {
    pub id: TapDanceId,
    pub count: u8,
    pub pressed: bool,
    pub interrupted: bool,
    pub deadline: Instant,
    pub phase: WindowPhase,
}

impl DanceWindow {
    fn observation(&self) -> Observation {
        Observation::new(self.count, self.interrupted, self.pressed)
    }
}

/// Reference dispatcher of tap dances.
///
/// Instances without a window are idle. `N` bounds the number of instances
/// interacting at the same time.
#[derive(Debug, Clone)]
pub struct TapDanceTracker<const N: usize = TAP_DANCE_MAX_NUM> {
    tapping_term: Duration,
    windows: Vec<DanceWindow, N>,
}

impl<const N: usize> Default for TapDanceTracker<N> {
    fn default() -> Self {
        Self::new(&TapDanceConfig::default())
    }
}

impl<const N: usize> TapDanceTracker<N> {
    pub fn new(config: &TapDanceConfig) -> Self {
        Self {
            tapping_term: config.tapping_term,
            windows: Vec::new(),
        }
    }

    pub fn tapping_term(&self) -> Duration {
        self.tapping_term
    }

    /// Window of instance `id`, `None` when the instance is idle
    pub fn window(&self, id: TapDanceId) -> Option<&DanceWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Returns `true` if no interaction is in flight
    pub fn is_idle(&self) -> bool {
        self.windows.is_empty()
    }

    /// The earliest time at which [`TapDanceTracker::tick`] has something to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.windows
            .iter()
            .filter(|w| w.phase == WindowPhase::Counting)
            .map(|w| w.deadline)
            .min()
    }

    /// Feed one key event.
    ///
    /// Timeouts are not checked here, call [`TapDanceTracker::tick`] before
    /// processing an event to close the windows which expired in between.
    pub fn process_event<E: KeyExecutor, const M: usize>(
        &mut self,
        event: KeyboardEvent,
        dances: &mut TapDances<M>,
        executor: &mut E,
    ) -> Result<(), TapDanceError> {
        match (event.key, event.pressed) {
            (DanceKey::TapDance(id), true) => {
                if dances.get(id).is_none() {
                    return Err(TapDanceError::UnknownInstance(id));
                }
                // Another tap-dance key interrupts like any other key
                self.interrupt(Some(id), dances, executor)?;
                self.press(id, event.time)
            }
            (DanceKey::TapDance(id), false) => self.release(id, dances, executor),
            (DanceKey::Other, true) => self.interrupt(None, dances, executor),
            (DanceKey::Other, false) => Ok(()),
        }
    }

    /// Close every counting window whose tapping term has elapsed at `now`
    pub fn tick<E: KeyExecutor, const M: usize>(
        &mut self,
        now: Instant,
        dances: &mut TapDances<M>,
        executor: &mut E,
    ) -> Result<(), TapDanceError> {
        self.close_windows(dances, executor, |w| {
            w.phase == WindowPhase::Counting && w.deadline <= now
        })
    }

    /// [`TapDanceTracker::tick`] using the current time of the time driver
    pub fn poll<E: KeyExecutor, const M: usize>(
        &mut self,
        dances: &mut TapDances<M>,
        executor: &mut E,
    ) -> Result<(), TapDanceError> {
        self.tick(Instant::now(), dances, executor)
    }

    fn press(&mut self, id: TapDanceId, time: Instant) -> Result<(), TapDanceError> {
        let deadline = time.checked_add(self.tapping_term).unwrap_or(Instant::MAX);
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == id) {
            match window.phase {
                WindowPhase::Counting => {
                    window.count = window.count.saturating_add(1);
                    window.pressed = true;
                    window.deadline = deadline;
                    debug!("Tap dance {} pressed, count {}", id.0, window.count);
                }
                WindowPhase::Finished => {
                    warn!("Tap dance {} pressed again before its release", id.0);
                }
            }
            return Ok(());
        }

        debug!("Tap dance {} starts counting", id.0);
        self.windows
            .push(DanceWindow {
                id,
                count: 1,
                pressed: true,
                interrupted: false,
                deadline,
                phase: WindowPhase::Counting,
            })
            .map_err(|_| TapDanceError::TooManyInstances)
    }

    fn release<E: KeyExecutor, const M: usize>(
        &mut self,
        id: TapDanceId,
        dances: &mut TapDances<M>,
        executor: &mut E,
    ) -> Result<(), TapDanceError> {
        let Some(index) = self.windows.iter().position(|w| w.id == id) else {
            debug!("Tap dance {} released while idle", id.0);
            return Ok(());
        };
        match self.windows[index].phase {
            WindowPhase::Counting => {
                self.windows[index].pressed = false;
                Ok(())
            }
            WindowPhase::Finished => {
                self.windows.swap_remove(index);
                dances.release(id, executor)
            }
        }
    }

    /// Interrupt and close all counting windows except the one of `except`
    fn interrupt<E: KeyExecutor, const M: usize>(
        &mut self,
        except: Option<TapDanceId>,
        dances: &mut TapDances<M>,
        executor: &mut E,
    ) -> Result<(), TapDanceError> {
        for window in self.windows.iter_mut() {
            if window.phase == WindowPhase::Counting && Some(window.id) != except {
                window.interrupted = true;
            }
        }
        self.close_windows(dances, executor, |w| {
            w.phase == WindowPhase::Counting && w.interrupted
        })
    }

    /// Resolve the windows matching `should_close`.
    ///
    /// Windows whose key is up are released at once and dropped, the others
    /// wait for the key release.
    fn close_windows<E, F, const M: usize>(
        &mut self,
        dances: &mut TapDances<M>,
        executor: &mut E,
        should_close: F,
    ) -> Result<(), TapDanceError>
    where
        E: KeyExecutor,
        F: Fn(&DanceWindow) -> bool,
    {
        let mut i = 0;
        while i < self.windows.len() {
            let window = self.windows[i];
            if !should_close(&window) {
                i += 1;
                continue;
            }

            dances.resolve(window.id, window.observation(), executor)?;
            if window.pressed {
                self.windows[i].phase = WindowPhase::Finished;
                i += 1;
            } else {
                self.windows.swap_remove(i);
                dances.release(window.id, executor)?;
            }
        }
        Ok(())
    }
}
