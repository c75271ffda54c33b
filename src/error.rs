//! Error types for machine construction and driving.

use crate::core::ValueKind;
use thiserror::Error;

/// A single way in which a payload fails to satisfy the schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadViolation {
    #[error("variable '{variable}' is declared in the schema but missing from the payload")]
    MissingVariable { variable: String },

    #[error("variable '{variable}' is not declared in the schema")]
    UnexpectedVariable { variable: String },

    #[error("variable '{variable}' is of kind {found}, expected {expected}")]
    KindMismatch {
        variable: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl PayloadViolation {
    /// True for violations of the exact key set, as opposed to value kinds.
    pub fn is_key_set_violation(&self) -> bool {
        !matches!(self, Self::KindMismatch { .. })
    }
}

/// Errors raised by machine operations.
///
/// Every error is caused by caller input. A failed operation leaves the
/// machine exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("payload values do not match the schema: {}", join(.violations))]
    TypeMismatch { violations: Vec<PayloadViolation> },

    #[error("state {state} was not added to the state machine")]
    UnknownState { state: String },

    #[error("state id {state} has already been used")]
    DuplicateState { state: String },

    #[error("input {input} already has a transition from state {from}")]
    DuplicateTransition { from: String, input: String },

    #[error("payload does not match the schema: {}", join(.violations))]
    InvalidPayload { violations: Vec<PayloadViolation> },

    #[error("no transition from state {from} on input {input} to state {to}")]
    TransitionNotFound {
        from: String,
        input: String,
        to: String,
    },

    #[error("initial state not set")]
    NoInitialState,

    #[error("unresolved input {input} for state {state}")]
    UnresolvedInput { state: String, input: String },
}

/// Result alias used throughout the crate.
pub type FsmResult<T> = Result<T, FsmError>;

fn join(violations: &[PayloadViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_errors_list_every_violation() {
        let err = FsmError::InvalidPayload {
            violations: vec![
                PayloadViolation::MissingVariable {
                    variable: "count".to_string(),
                },
                PayloadViolation::UnexpectedVariable {
                    variable: "extra".to_string(),
                },
            ],
        };

        let message = err.to_string();
        assert!(message.contains("'count' is declared in the schema but missing"));
        assert!(message.contains("'extra' is not declared"));
    }

    #[test]
    fn kind_mismatch_is_not_a_key_set_violation() {
        let mismatch = PayloadViolation::KindMismatch {
            variable: "count".to_string(),
            expected: ValueKind::Integer,
            found: ValueKind::Text,
        };
        assert!(!mismatch.is_key_set_violation());
        assert_eq!(
            mismatch.to_string(),
            "variable 'count' is of kind text, expected integer"
        );

        let missing = PayloadViolation::MissingVariable {
            variable: "count".to_string(),
        };
        assert!(missing.is_key_set_violation());
    }

    #[test]
    fn unresolved_input_names_state_and_input() {
        let err = FsmError::UnresolvedInput {
            state: "\"B\"".to_string(),
            input: "\"go\"".to_string(),
        };
        assert_eq!(err.to_string(), "unresolved input \"go\" for state \"B\"");
    }
}
