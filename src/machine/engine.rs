//! The table-driven state machine.

use crate::config::{MachineConfig, UnresolvedInputPolicy};
use crate::core::{InputToken, Payload, Schema, StateId};
use crate::error::{FsmError, FsmResult};
use crate::machine::table::TransitionTable;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// Result of feeding one input to the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult<Id> {
    /// A transition fired
    Transitioned { from: Id, to: Id },

    /// No transition matched and the policy absorbed the input
    Ignored { state: Id },
}

impl<Id> StepResult<Id> {
    /// The state the machine is in after the step.
    pub fn state(&self) -> &Id {
        match self {
            Self::Transitioned { to, .. } => to,
            Self::Ignored { state } => state,
        }
    }
}

/// Deterministic finite state machine built by hand from states and
/// transitions.
///
/// States are identified by `Id` and carry a [`Payload`] that must match the
/// machine's [`Schema`] exactly. Transitions map `(state, input)` to a single
/// destination. Every mutator validates all of its arguments before touching
/// any table, so a failed call leaves the machine unchanged.
///
/// The machine is not synchronized. Callers sharing one across threads must
/// serialize access themselves.
///
/// # Example
///
/// ```rust
/// use tabular_fsm::core::{Payload, Schema, ValueKind};
/// use tabular_fsm::Machine;
///
/// let schema = Schema::new().variable("count", ValueKind::Integer);
/// let mut machine: Machine<&str, &str> = Machine::new(schema, true);
///
/// machine.add_state("A", Payload::new().with("count", 0)).unwrap();
/// machine.add_state("B", Payload::new().with("count", 1)).unwrap();
/// machine.add_state_transition("A", "B", "go").unwrap();
/// machine.set_initial_state("A").unwrap();
///
/// machine.input("go").unwrap();
/// assert_eq!(machine.current_state(), Some(&"B"));
/// assert!(machine.input("go").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Machine<Id: StateId, In: InputToken> {
    pub(crate) schema: Schema,
    pub(crate) config: MachineConfig,
    pub(crate) states: BTreeMap<Id, Payload>,
    pub(crate) table: TransitionTable<Id, In>,
    initial: Option<Id>,
    current: Option<Id>,
}

impl<Id: StateId, In: InputToken> Machine<Id, In> {
    /// Create an empty machine. `error_on_unresolved_input` selects between
    /// rejecting and silently ignoring inputs with no transition.
    pub fn new(schema: Schema, error_on_unresolved_input: bool) -> Self {
        Self::with_config(
            schema,
            MachineConfig::default().with_unresolved_input(UnresolvedInputPolicy::from_strict(
                error_on_unresolved_input,
            )),
        )
    }

    /// Create an empty machine with an explicit configuration.
    pub fn with_config(schema: Schema, config: MachineConfig) -> Self {
        Self {
            schema,
            config,
            states: BTreeMap::new(),
            table: TransitionTable::new(),
            initial: None,
            current: None,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Declare a new state.
    ///
    /// Fails with `DuplicateState` if `id` is taken, otherwise with
    /// `InvalidPayload` or `TypeMismatch` if `payload` does not satisfy the
    /// schema.
    pub fn add_state(&mut self, id: Id, payload: Payload) -> FsmResult<()> {
        if self.states.contains_key(&id) {
            return Err(FsmError::DuplicateState {
                state: id.state_label(),
            });
        }
        self.schema.validate(&payload)?;

        debug!(state = %id.state_label(), "state added");
        self.states.insert(id, payload);
        Ok(())
    }

    /// Replace the payload of an existing state, returning the old one.
    ///
    /// Transitions into and out of `id` are untouched.
    pub fn change_state(&mut self, id: &Id, payload: Payload) -> FsmResult<Payload> {
        let slot = self
            .states
            .get_mut(id)
            .ok_or_else(|| Self::unknown_state(id))?;
        self.schema.validate(&payload)?;

        debug!(state = %id.state_label(), "state payload replaced");
        Ok(std::mem::replace(slot, payload))
    }

    /// Delete a state along with every transition into or out of it,
    /// returning its payload.
    ///
    /// If the initial or current state is `id`, it is cleared.
    pub fn remove_state(&mut self, id: &Id) -> FsmResult<Payload> {
        let payload = self
            .states
            .remove(id)
            .ok_or_else(|| Self::unknown_state(id))?;
        let pruned = self.table.remove_state(id);

        if self.initial.as_ref() == Some(id) {
            debug!(state = %id.state_label(), "initial state cleared");
            self.initial = None;
        }
        if self.current.as_ref() == Some(id) {
            debug!(state = %id.state_label(), "current state cleared");
            self.current = None;
        }

        debug!(state = %id.state_label(), pruned, "state removed");
        Ok(payload)
    }

    /// Map `(from, input)` to `to`.
    pub fn add_state_transition(&mut self, from: Id, to: Id, input: In) -> FsmResult<()> {
        self.ensure_state(&from)?;
        self.ensure_state(&to)?;
        if self.table.lookup(&from, &input).is_some() {
            return Err(FsmError::DuplicateTransition {
                from: from.state_label(),
                input: input.input_label(),
            });
        }

        debug!(
            from = %from.state_label(),
            to = %to.state_label(),
            input = %input.input_label(),
            "transition added"
        );
        self.table.insert(from, input, to);
        Ok(())
    }

    /// Remove the transition `from --input--> to`.
    ///
    /// Fails with `TransitionNotFound` if `(from, input)` is unmapped or
    /// leads somewhere other than `to`.
    pub fn remove_state_transition(&mut self, from: &Id, to: &Id, input: &In) -> FsmResult<()> {
        self.ensure_state(from)?;
        self.ensure_state(to)?;
        if !self.table.remove(from, input, to) {
            return Err(FsmError::TransitionNotFound {
                from: from.state_label(),
                input: input.input_label(),
                to: to.state_label(),
            });
        }

        debug!(
            from = %from.state_label(),
            to = %to.state_label(),
            input = %input.input_label(),
            "transition removed"
        );
        Ok(())
    }

    /// Set (or move) the state the machine starts from.
    pub fn set_initial_state(&mut self, id: Id) -> FsmResult<()> {
        self.ensure_state(&id)?;
        debug!(state = %id.state_label(), "initial state set");
        self.initial = Some(id);
        Ok(())
    }

    pub fn initial_state(&self) -> Option<&Id> {
        self.initial.as_ref()
    }

    /// The current state, or `None` before the machine is first driven.
    pub fn current_state(&self) -> Option<&Id> {
        self.current.as_ref()
    }

    /// Feed one input.
    ///
    /// An undriven machine starts from its initial state. If the current
    /// state has no transition for `input`, the configured policy either
    /// rejects the input with `UnresolvedInput` (leaving the machine
    /// untouched) or absorbs it without changing state.
    pub fn input(&mut self, input: In) -> FsmResult<StepResult<Id>> {
        let from = match (&self.current, &self.initial) {
            (Some(current), _) => current.clone(),
            (None, Some(initial)) => initial.clone(),
            (None, None) => return Err(FsmError::NoInitialState),
        };

        if let Some(to) = self.table.lookup(&from, &input).cloned() {
            trace!(
                from = %from.state_label(),
                to = %to.state_label(),
                input = %input.input_label(),
                "transition fired"
            );
            self.current = Some(to.clone());
            return Ok(StepResult::Transitioned { from, to });
        }

        match self.config.unresolved_input {
            UnresolvedInputPolicy::Reject => {
                return Err(FsmError::UnresolvedInput {
                    state: from.state_label(),
                    input: input.input_label(),
                });
            }
            UnresolvedInputPolicy::Ignore => {
                trace!(
                    state = %from.state_label(),
                    input = %input.input_label(),
                    "unresolved input ignored"
                );
            }
            UnresolvedInputPolicy::IgnoreAndLog => {
                warn!(
                    state = %from.state_label(),
                    input = %input.input_label(),
                    "unresolved input ignored"
                );
            }
        }

        self.current = Some(from.clone());
        Ok(StepResult::Ignored { state: from })
    }

    /// Return to the initial state.
    ///
    /// Works whether or not the machine has been driven; fails with
    /// `NoInitialState` only when no initial state is set.
    pub fn restart(&mut self) -> FsmResult<&Id> {
        let initial = self.initial.clone().ok_or(FsmError::NoInitialState)?;
        debug!(state = %initial.state_label(), "machine restarted");
        let current: &Id = self.current.insert(initial);
        Ok(current)
    }

    pub fn contains_state(&self, id: &Id) -> bool {
        self.states.contains_key(id)
    }

    pub fn payload(&self, id: &Id) -> Option<&Payload> {
        self.states.get(id)
    }

    /// Declared state ids in order.
    pub fn states(&self) -> impl Iterator<Item = &Id> {
        self.states.keys()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.table.len()
    }

    /// True for a declared state with no outgoing transitions.
    pub fn is_terminal(&self, id: &Id) -> FsmResult<bool> {
        self.ensure_state(id)?;
        Ok(self.table.row(id).is_empty())
    }

    /// The `(source, input)` pairs that lead to `id`, in insertion order.
    pub fn transitions_into(&self, id: &Id) -> FsmResult<Vec<(Id, In)>> {
        self.ensure_state(id)?;
        Ok(self.table.incoming(id).to_vec())
    }

    pub(crate) fn ensure_state(&self, id: &Id) -> FsmResult<()> {
        if self.states.contains_key(id) {
            Ok(())
        } else {
            Err(Self::unknown_state(id))
        }
    }

    fn unknown_state(id: &Id) -> FsmError {
        FsmError::UnknownState {
            state: id.state_label(),
        }
    }
}
