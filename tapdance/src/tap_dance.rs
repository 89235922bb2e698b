use heapless::Vec;
use tapdance_types::action::KeyStep;
use tapdance_types::dance::{DanceOutcome, Observation};
use tapdance_types::keycode::KeyCode;

use crate::TAP_DANCE_MAX_STEPS;
use crate::classifier::classify;
use crate::error::TapDanceError;
use crate::executor::KeyExecutor;

// `tap_then_hold` and `two_taps` fill at most four steps
const _: () = assert!(TAP_DANCE_MAX_STEPS >= 4);

/// Max number of outcomes a single action table can bind
pub(crate) const BINDABLE_OUTCOME_NUM: usize = DanceOutcome::BINDABLE.len();

/// Identity of a tap-dance instance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceId(pub u8);

impl From<u8> for TapDanceId {
    fn from(value: u8) -> Self {
        TapDanceId(value)
    }
}

/// Key steps of one dance outcome.
///
/// `on_resolve` is applied when the interaction window closes, `on_release`
/// when the key is finally released. Both lists are literal: the release list
/// is not derived from the resolve list, so authored orders are kept as is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceActions {
    pub(crate) on_resolve: Vec<KeyStep, TAP_DANCE_MAX_STEPS>,
    pub(crate) on_release: Vec<KeyStep, TAP_DANCE_MAX_STEPS>,
}

impl DanceActions {
    pub fn new(on_resolve: &[KeyStep], on_release: &[KeyStep]) -> Result<Self, TapDanceError> {
        Ok(Self {
            on_resolve: Vec::from_slice(on_resolve).map_err(|_| TapDanceError::TooManySteps)?,
            on_release: Vec::from_slice(on_release).map_err(|_| TapDanceError::TooManySteps)?,
        })
    }

    /// Press all keys in order when resolved, release them in the same order afterwards.
    ///
    /// `hold(&[KeyCode::LShift, KeyCode::Kc7])` sends `&` for as long as the key is held.
    pub fn hold(keys: &[KeyCode]) -> Result<Self, TapDanceError> {
        let mut actions = Self::default();
        for &key in keys {
            actions
                .on_resolve
                .push(KeyStep::press(key))
                .map_err(|_| TapDanceError::TooManySteps)?;
            actions
                .on_release
                .push(KeyStep::release(key))
                .map_err(|_| TapDanceError::TooManySteps)?;
        }
        Ok(actions)
    }

    /// Send one complete tap of `key`, then press it again and keep it held until release.
    pub fn tap_then_hold(key: KeyCode) -> Self {
        let mut actions = Self::default();
        let _ = actions.on_resolve.extend_from_slice(&[
            KeyStep::press(key),
            KeyStep::release(key),
            KeyStep::press(key),
        ]);
        let _ = actions.on_release.push(KeyStep::release(key));
        actions
    }

    /// Send two complete taps of `key` when resolved, nothing on release.
    pub fn two_taps(key: KeyCode) -> Self {
        let mut actions = Self::default();
        let _ = actions.on_resolve.extend_from_slice(&[
            KeyStep::press(key),
            KeyStep::release(key),
            KeyStep::press(key),
            KeyStep::release(key),
        ]);
        actions
    }

    pub fn on_resolve(&self) -> &[KeyStep] {
        &self.on_resolve
    }

    pub fn on_release(&self) -> &[KeyStep] {
        &self.on_release
    }
}

/// Sparse mapping from dance outcomes to their actions.
///
/// Outcomes without an entry do nothing, which is a valid configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActionTable {
    actions: Vec<(DanceOutcome, DanceActions), BINDABLE_OUTCOME_NUM>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `actions` to `outcome`, replacing the previous binding
    pub fn insert(&mut self, outcome: DanceOutcome, actions: DanceActions) -> Result<(), TapDanceError> {
        if !outcome.is_bindable() {
            return Err(TapDanceError::NotBindable(outcome));
        }
        if let Some(slot) = self.actions.iter_mut().find(|(o, _)| *o == outcome) {
            slot.1 = actions;
            return Ok(());
        }
        // Every bindable outcome fits, so this can't overflow
        self.actions
            .push((outcome, actions))
            .map_err(|_| TapDanceError::NotBindable(outcome))
    }

    /// Builder style [`ActionTable::insert`]
    pub fn with(mut self, outcome: DanceOutcome, actions: DanceActions) -> Result<Self, TapDanceError> {
        self.insert(outcome, actions)?;
        Ok(self)
    }

    pub fn get(&self, outcome: DanceOutcome) -> Option<&DanceActions> {
        self.actions.iter().find(|(o, _)| *o == outcome).map(|(_, a)| a)
    }

    /// Bound outcomes, in binding order
    pub fn outcomes(&self) -> impl Iterator<Item = DanceOutcome> + '_ {
        self.actions.iter().map(|(o, _)| *o)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// State of one tap-dance instance
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DanceState {
    /// Waiting for a new interaction
    Idle,
    /// Resolved, waiting for the final release of the key
    Resolved(DanceOutcome),
}

/// One tap-dance instance: its identity, its action table and the outcome of the
/// interaction in flight.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDance {
    id: TapDanceId,
    table: ActionTable,
    current: DanceOutcome,
}

impl TapDance {
    pub fn new(id: TapDanceId, table: ActionTable) -> Self {
        Self {
            id,
            table,
            current: DanceOutcome::None,
        }
    }

    pub fn id(&self) -> TapDanceId {
        self.id
    }

    pub fn table(&self) -> &ActionTable {
        &self.table
    }

    pub fn current_outcome(&self) -> DanceOutcome {
        self.current
    }

    pub fn state(&self) -> DanceState {
        match self.current {
            DanceOutcome::None => DanceState::Idle,
            outcome => DanceState::Resolved(outcome),
        }
    }

    /// Classify the closed window, store the outcome and apply its resolve steps.
    ///
    /// Resolving twice without a release in between is a caller error and isn't checked.
    pub fn resolve<E: KeyExecutor>(&mut self, observation: Observation, executor: &mut E) -> DanceOutcome {
        self.current = classify(observation);
        debug!(
            "Tap dance {} resolved as {:?} from {:?}",
            self.id.0, self.current, observation
        );
        if let Some(actions) = self.table.get(self.current) {
            for step in actions.on_resolve.iter() {
                executor.apply(*step);
            }
        }
        self.current
    }

    /// Apply the release steps of the stored outcome and go back to idle.
    pub fn release<E: KeyExecutor>(&mut self, executor: &mut E) {
        if let Some(actions) = self.table.get(self.current) {
            debug!("Tap dance {} releasing {:?}", self.id.0, self.current);
            for step in actions.on_release.iter() {
                executor.apply(*step);
            }
        }
        self.current = DanceOutcome::None;
    }
}
