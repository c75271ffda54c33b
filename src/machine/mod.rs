//! The state machine engine.
//!
//! # Key Concepts
//!
//! - **States**: Unique ids, each with a payload matching the schema
//! - **Transitions**: A partial function from `(state, input)` to state,
//!   stored as a forward table plus a reverse index kept in lockstep
//! - **Cursor**: The initial state set by the caller and the current state
//!   advanced by `input`
//!
//! Every operation is synchronous and runs to completion; nothing here
//! blocks, spawns or performs I/O.

mod describe;
mod engine;
mod table;

pub use describe::{MachineDump, StateDump, TransitionRowDump};
pub use engine::{Machine, StepResult};
