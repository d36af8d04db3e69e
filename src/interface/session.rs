//! Imperative shell owning one vehicle session.

use crate::checkpoint::{CheckpointError, SessionCheckpoint};
use crate::core::{CanonicalState, PersistedCycleState, RawSignalSnapshot};
use crate::interface::car::CarInterface;
use crate::interface::controller::{ControlCommand, Controller};
use crate::translate::VehicleModel;

/// Owns the persisted state of one vehicle and threads it through the
/// pure [`CarInterface`] calls.
///
/// Calls must be serialized per vehicle; a session is never shared.
pub struct Session<M, C> {
    car: CarInterface<M, C>,
    persisted: PersistedCycleState,
    last_state: CanonicalState,
}

impl<M: VehicleModel, C: Controller> Session<M, C> {
    pub fn new(car: CarInterface<M, C>) -> Self {
        Self::with_persisted(car, PersistedCycleState::default())
    }

    pub fn with_persisted(car: CarInterface<M, C>, persisted: PersistedCycleState) -> Self {
        Self {
            car,
            persisted,
            last_state: CanonicalState::default(),
        }
    }

    /// Resume from a checkpoint taken on the same variant.
    pub fn resume(
        car: CarInterface<M, C>,
        checkpoint: SessionCheckpoint,
    ) -> Result<Self, CheckpointError> {
        let persisted = checkpoint.restore(car.params().variant)?;
        Ok(Self::with_persisted(car, persisted))
    }

    /// Ingest one signal snapshot.
    pub fn step(&mut self, raw: &RawSignalSnapshot, hud_set_speed: f64) -> &CanonicalState {
        let (state, next) = self.car.update(&self.persisted, raw, hud_set_speed);
        self.persisted = next;
        self.last_state = state;
        &self.last_state
    }

    /// Send an actuator request against the most recent state.
    pub fn actuate(&mut self, command: &ControlCommand) -> Vec<C::Command> {
        let (commands, next) = self.car.apply(command, &self.last_state, &self.persisted);
        self.persisted = next;
        commands
    }

    pub fn persisted(&self) -> &PersistedCycleState {
        &self.persisted
    }

    pub fn last_state(&self) -> &CanonicalState {
        &self.last_state
    }

    pub fn car(&self) -> &CarInterface<M, C> {
        &self.car
    }

    pub fn checkpoint(&self) -> SessionCheckpoint {
        SessionCheckpoint::capture(self.car.params().variant, &self.persisted)
    }
}
