//! Builder for constructing machines.

use crate::config::{MachineConfig, UnresolvedInputPolicy};
use crate::core::{InputToken, Payload, Schema, StateId};
use crate::error::FsmResult;
use crate::machine::Machine;

/// Builder for constructing machines with a fluent API.
///
/// `build` replays states, then transitions, then the initial state through
/// the machine's own mutators, so it fails with exactly the error the
/// equivalent sequence of manual calls would raise.
///
/// # Example
///
/// ```rust
/// use tabular_fsm::builder::MachineBuilder;
/// use tabular_fsm::core::{Payload, Schema, ValueKind};
///
/// let machine = MachineBuilder::<&str, char>::new()
///     .schema(Schema::new().variable("lit", ValueKind::Bool))
///     .state("off", Payload::new().with("lit", false))
///     .state("on", Payload::new().with("lit", true))
///     .transition("off", "on", 't')
///     .transition("on", "off", 't')
///     .initial("off")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.transition_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct MachineBuilder<Id: StateId, In: InputToken> {
    schema: Schema,
    config: MachineConfig,
    states: Vec<(Id, Payload)>,
    transitions: Vec<(Id, Id, In)>,
    initial: Option<Id>,
}

impl<Id: StateId, In: InputToken> MachineBuilder<Id, In> {
    /// Create a builder with an empty schema and the default configuration.
    pub fn new() -> Self {
        Self {
            schema: Schema::new(),
            config: MachineConfig::default(),
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
        }
    }

    /// Set the payload schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Set the full configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Reject (`true`) or ignore (`false`) unresolved inputs.
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.unresolved_input = UnresolvedInputPolicy::from_strict(strict);
        self
    }

    /// Declare a state.
    pub fn state(mut self, id: Id, payload: Payload) -> Self {
        self.states.push((id, payload));
        self
    }

    /// Declare several states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = (Id, Payload)>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare `from --input--> to`.
    pub fn transition(mut self, from: Id, to: Id, input: In) -> Self {
        self.transitions.push((from, to, input));
        self
    }

    /// Set the initial state (optional).
    pub fn initial(mut self, id: Id) -> Self {
        self.initial = Some(id);
        self
    }

    /// Build the machine.
    pub fn build(self) -> FsmResult<Machine<Id, In>> {
        let mut machine = Machine::with_config(self.schema, self.config);

        for (id, payload) in self.states {
            machine.add_state(id, payload)?;
        }
        for (from, to, input) in self.transitions {
            machine.add_state_transition(from, to, input)?;
        }
        if let Some(initial) = self.initial {
            machine.set_initial_state(initial)?;
        }

        Ok(machine)
    }
}

impl<Id: StateId, In: InputToken> Default for MachineBuilder<Id, In> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValueKind;
    use crate::error::FsmError;

    #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
    enum Door {
        Open,
        Closed,
        Locked,
    }

    #[derive(Clone, PartialEq, Eq, Debug)]
    enum Action {
        Push,
        Pull,
        Lock,
    }

    fn door_builder() -> MachineBuilder<Door, Action> {
        MachineBuilder::new()
            .schema(Schema::new().variable("label", ValueKind::Text))
            .state(Door::Open, Payload::new().with("label", "open"))
            .state(Door::Closed, Payload::new().with("label", "closed"))
            .state(Door::Locked, Payload::new().with("label", "locked"))
            .transition(Door::Open, Door::Closed, Action::Push)
            .transition(Door::Closed, Door::Open, Action::Pull)
            .transition(Door::Closed, Door::Locked, Action::Lock)
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = door_builder().initial(Door::Open).build().unwrap();

        assert_eq!(machine.state_count(), 3);
        assert_eq!(machine.transition_count(), 3);
        assert_eq!(machine.initial_state(), Some(&Door::Open));

        machine.input(Action::Push).unwrap();
        machine.input(Action::Lock).unwrap();
        assert_eq!(machine.current_state(), Some(&Door::Locked));
    }

    #[test]
    fn builder_defaults_to_strict() {
        let mut machine = door_builder().initial(Door::Locked).build().unwrap();
        assert!(matches!(
            machine.input(Action::Pull),
            Err(FsmError::UnresolvedInput { .. })
        ));
    }

    #[test]
    fn lenient_builder_ignores_unresolved_input() {
        let mut machine = door_builder()
            .strict(false)
            .initial(Door::Locked)
            .build()
            .unwrap();
        assert!(machine.input(Action::Pull).is_ok());
        assert_eq!(machine.current_state(), Some(&Door::Locked));
    }

    #[test]
    fn build_surfaces_duplicate_state() {
        let result = door_builder()
            .state(Door::Open, Payload::new().with("label", "again"))
            .build();
        assert!(matches!(result, Err(FsmError::DuplicateState { .. })));
    }

    #[test]
    fn build_surfaces_transition_to_undeclared_state() {
        let result = MachineBuilder::<Door, Action>::new()
            .state(Door::Open, Payload::new())
            .transition(Door::Open, Door::Closed, Action::Push)
            .build();
        assert!(matches!(result, Err(FsmError::UnknownState { .. })));
    }

    #[test]
    fn build_without_initial_state_is_undriven() {
        let mut machine = door_builder().build().unwrap();
        assert_eq!(machine.initial_state(), None);
        assert_eq!(machine.input(Action::Push), Err(FsmError::NoInitialState));
    }

    #[test]
    fn states_accepts_iterators() {
        let machine = MachineBuilder::<u8, u8>::new()
            .states((0..4).map(|id| (id, Payload::new())))
            .build()
            .unwrap();
        assert_eq!(machine.states().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
}
