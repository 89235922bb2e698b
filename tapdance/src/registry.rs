//! The set of tap-dance instances of a keyboard.
//!
//! Built once at startup. Each instance owns its state, the registry only
//! routes calls by identity.

use heapless::Vec;
use tapdance_types::dance::{DanceOutcome, Observation};

use crate::TAP_DANCE_MAX_NUM;
use crate::error::TapDanceError;
use crate::executor::KeyExecutor;
use crate::tap_dance::{ActionTable, DanceState, TapDance, TapDanceId};

#[derive(Clone, Debug, Default)]
pub struct TapDances<const N: usize = TAP_DANCE_MAX_NUM> {
    dances: Vec<TapDance, N>,
}

impl<const N: usize> TapDances<N> {
    pub fn new() -> Self {
        Self { dances: Vec::new() }
    }

    /// Build the registry from `(identity, table)` pairs
    pub fn from_tables<I>(tables: I) -> Result<Self, TapDanceError>
    where
        I: IntoIterator<Item = (TapDanceId, ActionTable)>,
    {
        let mut dances = Self::new();
        for (id, table) in tables {
            dances.add(id, table)?;
        }
        Ok(dances)
    }

    /// Register a new instance
    pub fn add(&mut self, id: TapDanceId, table: ActionTable) -> Result<(), TapDanceError> {
        if self.get(id).is_some() {
            return Err(TapDanceError::DuplicateInstance(id));
        }
        self.dances
            .push(TapDance::new(id, table))
            .map_err(|_| TapDanceError::TooManyInstances)
    }

    pub fn get(&self, id: TapDanceId) -> Option<&TapDance> {
        self.dances.iter().find(|td| td.id() == id)
    }

    fn get_mut(&mut self, id: TapDanceId) -> Result<&mut TapDance, TapDanceError> {
        self.dances
            .iter_mut()
            .find(|td| td.id() == id)
            .ok_or(TapDanceError::UnknownInstance(id))
    }

    /// Resolve the interaction of instance `id`, see [`TapDance::resolve`]
    pub fn resolve<E: KeyExecutor>(
        &mut self,
        id: TapDanceId,
        observation: Observation,
        executor: &mut E,
    ) -> Result<DanceOutcome, TapDanceError> {
        Ok(self.get_mut(id)?.resolve(observation, executor))
    }

    /// Release instance `id`, see [`TapDance::release`]
    pub fn release<E: KeyExecutor>(&mut self, id: TapDanceId, executor: &mut E) -> Result<(), TapDanceError> {
        self.get_mut(id)?.release(executor);
        Ok(())
    }

    pub fn state(&self, id: TapDanceId) -> Result<DanceState, TapDanceError> {
        self.get(id)
            .map(|td| td.state())
            .ok_or(TapDanceError::UnknownInstance(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TapDance> {
        self.dances.iter()
    }

    pub fn len(&self) -> usize {
        self.dances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dances.is_empty()
    }
}
