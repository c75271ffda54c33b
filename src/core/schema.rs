//! Payload schemas and validation.
//!
//! A schema fixes the exact set of variables every state payload carries
//! and the kind of each one. Validation uses Stillwater's `Validation` to
//! collect every violation in a payload rather than stopping at the first.

use super::payload::Payload;
use super::value::ValueKind;
use crate::error::{FsmError, FsmResult, PayloadViolation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single schema check.
type Check = Validation<(), NonEmptyVec<PayloadViolation>>;

/// The declared shape of every state payload. Immutable once a machine
/// is constructed.
///
/// # Example
///
/// ```rust
/// use tabular_fsm::core::{Payload, Schema, ValueKind};
///
/// let schema = Schema::new().variable("count", ValueKind::Integer);
///
/// assert!(schema.validate(&Payload::new().with("count", 0)).is_ok());
/// assert!(schema.validate(&Payload::new().with("count", "zero")).is_err());
/// assert!(schema.validate(&Payload::new()).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    variables: BTreeMap<String, ValueKind>,
}

impl Schema {
    /// Create a schema with no variables. Only empty payloads satisfy it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable, returning the schema.
    pub fn variable(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.variables.insert(name.into(), kind);
        self
    }

    pub fn kind_of(&self, name: &str) -> Option<ValueKind> {
        self.variables.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Declared variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ValueKind)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Collect every violation of this schema in `payload`.
    pub fn check(&self, payload: &Payload) -> Check {
        let mut checks: Vec<Check> = Vec::new();

        for (name, value) in payload.iter() {
            let check = match self.kind_of(name) {
                None => Validation::fail(PayloadViolation::UnexpectedVariable {
                    variable: name.to_string(),
                }),
                Some(expected) if expected != value.kind() => {
                    Validation::fail(PayloadViolation::KindMismatch {
                        variable: name.to_string(),
                        expected,
                        found: value.kind(),
                    })
                }
                Some(_) => Validation::success(()),
            };
            checks.push(check);
        }

        for (name, _) in self.iter() {
            if !payload.contains(name) {
                checks.push(Validation::fail(PayloadViolation::MissingVariable {
                    variable: name.to_string(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate `payload`, mapping violations onto the machine's errors.
    ///
    /// Any key-set violation yields `InvalidPayload`; a payload with the
    /// right keys but mistyped values yields `TypeMismatch`. Both carry the
    /// complete violation list.
    pub fn validate(&self, payload: &Payload) -> FsmResult<()> {
        match self.check(payload) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                let violations: Vec<PayloadViolation> = errors.iter().cloned().collect();
                if violations.iter().any(PayloadViolation::is_key_set_violation) {
                    Err(FsmError::InvalidPayload { violations })
                } else {
                    Err(FsmError::TypeMismatch { violations })
                }
            }
        }
    }
}
