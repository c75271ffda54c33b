//! Read-only descriptions of a machine for diagnostics.

use super::engine::Machine;
use crate::core::{InputToken, StateId, Value};
use crate::error::FsmResult;
use serde::Serialize;
use std::fmt;

/// One state and its variables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateDump {
    pub id: String,
    pub variables: Vec<(String, Value)>,
}

/// Outgoing transitions of one state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransitionRowDump {
    pub source: String,
    /// `(input, destination)` pairs in insertion order
    pub transitions: Vec<(String, String)>,
}

/// Full dump of a machine: every state, then the transition table.
///
/// Ids and inputs are rendered with their `Debug` form. `Display` produces
/// the human-readable listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MachineDump {
    pub states: Vec<StateDump>,
    pub transitions: Vec<TransitionRowDump>,
    pub initial_state: Option<String>,
    pub current_state: Option<String>,
}

impl fmt::Display for MachineDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "States:")?;
        for state in &self.states {
            writeln!(f, "State ID: {}", state.id)?;
            for (variable, value) in &state.variables {
                writeln!(f, "|-->{variable}={value}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Transition table:")?;
        for row in &self.transitions {
            writeln!(f, "State ID: {}", row.source)?;
            for (input, destination) in &row.transitions {
                writeln!(f, "|-->Input={input}->State={destination}")?;
            }
        }

        if let Some(initial) = &self.initial_state {
            writeln!(f)?;
            writeln!(f, "Initial state: {initial}")?;
        }
        if let Some(current) = &self.current_state {
            writeln!(f, "Current state: {current}")?;
        }
        Ok(())
    }
}

impl<Id: StateId, In: InputToken> Machine<Id, In> {
    /// The `(variable, value)` pairs of a state, in variable-name order.
    pub fn describe_state(&self, id: &Id) -> FsmResult<Vec<(String, Value)>> {
        self.ensure_state(id)?;
        Ok(self
            .payload(id)
            .map(|payload| payload.to_pairs())
            .unwrap_or_default())
    }

    /// The `(input, destination)` pairs leaving a state, in insertion order.
    /// Empty for a state with no outgoing transitions.
    pub fn describe_transitions(&self, id: &Id) -> FsmResult<Vec<(In, Id)>> {
        self.ensure_state(id)?;
        Ok(self.table.row(id).to_vec())
    }

    /// Dump every state and the whole transition table.
    pub fn describe_all(&self) -> MachineDump {
        let states = self
            .states
            .iter()
            .map(|(id, payload)| StateDump {
                id: id.state_label(),
                variables: payload.to_pairs(),
            })
            .collect();

        let transitions = self
            .table
            .sources()
            .map(|source| TransitionRowDump {
                source: source.state_label(),
                transitions: self
                    .table
                    .row(source)
                    .iter()
                    .map(|(input, to)| (input.input_label(), to.state_label()))
                    .collect(),
            })
            .collect();

        MachineDump {
            states,
            transitions,
            initial_state: self.initial_state().map(StateId::state_label),
            current_state: self.current_state().map(StateId::state_label),
        }
    }
}
