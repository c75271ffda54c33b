//! Tabular FSM: an explicitly typed, table-driven finite state machine
//!
//! The caller declares states, wires transitions between them keyed by input
//! tokens, and then drives the machine one input at a time. The engine owns
//! no I/O and no scheduling; every call runs synchronously to completion.
//!
//! # Core Concepts
//!
//! - **Schema**: The exact set of variables, and their kinds, every state payload carries
//! - **States**: Unique ids of a caller-chosen type, each with a schema-conformant payload
//! - **Transitions**: At most one destination per `(state, input)` pair
//! - **Reverse index**: Per-destination record of incoming transitions, kept
//!   consistent so removing a state removes everything that referenced it
//! - **Cursor**: The initial state and the current state
//!
//! # Example
//!
//! ```rust
//! use tabular_fsm::{payload, schema, FsmError, Machine};
//!
//! let mut machine: Machine<&str, &str> = Machine::new(schema! { "count" => Integer }, true);
//!
//! machine.add_state("A", payload! { "count" => 0 }).unwrap();
//! machine.add_state("B", payload! { "count" => 1 }).unwrap();
//! machine.add_state_transition("A", "B", "go").unwrap();
//! machine.set_initial_state("A").unwrap();
//!
//! machine.input("go").unwrap();
//! assert_eq!(machine.current_state(), Some(&"B"));
//!
//! let err = machine.input("go").unwrap_err();
//! assert!(matches!(err, FsmError::UnresolvedInput { .. }));
//!
//! machine.remove_state(&"B").unwrap();
//! assert!(machine.describe_transitions(&"A").unwrap().is_empty());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use config::{MachineConfig, UnresolvedInputPolicy};
pub use crate::core::{InputToken, Payload, Schema, StateId, Value, ValueKind};
pub use error::{FsmError, FsmResult, PayloadViolation};
pub use machine::{Machine, MachineDump, StepResult};
