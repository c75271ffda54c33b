//! Identifier and input token bounds.
//!
//! State identifiers and input tokens are compile-time type parameters of
//! the machine, so a token of the wrong type cannot reach the engine at all.

use std::fmt::Debug;

/// Trait for state identifiers.
///
/// # Required Traits
///
/// - `Clone`: Ids are stored in the forward table, the reverse index and the cursor
/// - `Ord`: Ids key ordered maps, which keeps enumeration deterministic
/// - `Debug`: Ids are rendered into errors and log events
///
/// Implemented for every type meeting the bounds.
///
/// # Example
///
/// ```rust
/// use tabular_fsm::core::StateId;
///
/// #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_state_id<T: StateId>() {}
/// assert_state_id::<Door>();
/// assert_state_id::<&'static str>();
/// assert_state_id::<u32>();
/// ```
pub trait StateId: Clone + Ord + Debug {
    /// Render the id for errors and logs.
    fn state_label(&self) -> String {
        format!("{self:?}")
    }
}

impl<T: Clone + Ord + Debug> StateId for T {}

/// Trait for input tokens that drive transitions.
///
/// Tokens only need equality; rows are small and searched in insertion order.
pub trait InputToken: Clone + Eq + Debug {
    /// Render the token for errors and logs.
    fn input_label(&self) -> String {
        format!("{self:?}")
    }
}

impl<T: Clone + Eq + Debug> InputToken for T {}
