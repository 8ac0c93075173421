//! A single transition rule.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// Every state directly reachable from `from`.
///
/// A rule with no destinations marks `from` as terminal. Terminal states still
/// need a rule; a state without one is unknown to the table.
///
/// # Example
///
/// ```rust
/// use statusgate::table::TransitionRule;
///
/// let rule = TransitionRule::new("draft".to_string(), ["active".to_string()]);
/// assert!(rule.allows(&"active".to_string()));
///
/// let terminal = TransitionRule::terminal("inactive".to_string());
/// assert!(terminal.is_terminal());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRule<S: State> {
    pub from: S,
    pub to: Vec<S>,
}

impl<S: State> TransitionRule<S> {
    /// Repeated destinations are dropped, keeping the first occurrence.
    pub fn new(from: S, to: impl IntoIterator<Item = S>) -> Self {
        let mut destinations: Vec<S> = Vec::new();
        for state in to {
            if !destinations.contains(&state) {
                destinations.push(state);
            }
        }
        Self {
            from,
            to: destinations,
        }
    }

    pub fn terminal(from: S) -> Self {
        Self {
            from,
            to: Vec::new(),
        }
    }

    pub fn allows(&self, to: &S) -> bool {
        self.to.contains(to)
    }

    pub fn is_terminal(&self) -> bool {
        self.to.is_empty()
    }
}
