//! Core data types of the machine.
//!
//! This module contains the building blocks the engine validates against:
//! - State id and input token bounds (`StateId`, `InputToken`)
//! - Dynamic payload values (`Value`, `ValueKind`)
//! - State payloads and the schema they must satisfy (`Payload`, `Schema`)
//!
//! Nothing here holds machine state; the tables live in `machine`.

mod ids;
mod payload;
mod schema;
mod value;

pub use ids::{InputToken, StateId};
pub use payload::Payload;
pub use schema::Schema;
pub use value::{Value, ValueKind};
