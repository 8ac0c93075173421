//! Transition tables.
//!
//! A table is the complete set of [`TransitionRule`]s for one entity type. It
//! keeps the rules in declaration order and indexes them by source state, so a
//! lookup never scans the rule list.
//!
//! Two rules for the same source state are rejected when the table is built:
//! there is no "first match" or "last match" to fall back on.

mod rule;

pub use rule::TransitionRule;

use crate::builder::BuildError;
use crate::core::State;
use std::collections::HashMap;

/// Immutable, hash-indexed set of transition rules.
///
/// # Example
///
/// ```rust
/// use statusgate::table::{TransitionRule, TransitionTable};
///
/// let s = |label: &str| label.to_string();
/// let table = TransitionTable::new(vec![
///     TransitionRule::new(s("draft"), [s("active")]),
///     TransitionRule::new(s("active"), [s("inactive")]),
///     TransitionRule::terminal(s("inactive")),
/// ])
/// .unwrap();
///
/// assert_eq!(table.successors(&s("draft")), Some(&[s("active")][..]));
/// assert!(table.is_terminal(&s("inactive")));
/// assert!(!table.contains(&s("archived")));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State> {
    rules: Vec<TransitionRule<S>>,
    index: HashMap<S, usize>,
}

impl<S: State> TransitionTable<S> {
    /// Build a table, rejecting a second rule for any source state.
    ///
    /// Rules are normalized through [`TransitionRule::new`], so destinations
    /// are unique even for rules deserialized from a document.
    pub fn new(rules: Vec<TransitionRule<S>>) -> Result<Self, BuildError> {
        let mut normalized = Vec::with_capacity(rules.len());
        let mut index = HashMap::with_capacity(rules.len());
        for (position, rule) in rules.into_iter().enumerate() {
            if index.insert(rule.from.clone(), position).is_some() {
                return Err(BuildError::DuplicateRule {
                    state: rule.from.name().to_string(),
                });
            }
            normalized.push(TransitionRule::new(rule.from, rule.to));
        }
        Ok(Self {
            rules: normalized,
            index,
        })
    }

    /// Build one rule per state from a successor function.
    ///
    /// Intended for closed enums: a `match` inside `successors` is checked for
    /// exhaustiveness by the compiler, so adding a variant without deciding its
    /// successors fails to build. Repeated entries in `states` are collapsed.
    ///
    /// ```rust
    /// use statusgate::state_enum;
    /// use statusgate::table::TransitionTable;
    ///
    /// state_enum! {
    ///     pub enum LabelStatus {
    ///         Printed => "printed",
    ///         Installed => "installed",
    ///         Removed => "removed",
    ///     }
    /// }
    ///
    /// let table = TransitionTable::from_successors(LabelStatus::ALL, |status| match status {
    ///     LabelStatus::Printed => vec![LabelStatus::Installed],
    ///     LabelStatus::Installed => vec![LabelStatus::Removed],
    ///     LabelStatus::Removed => vec![],
    /// });
    ///
    /// assert_eq!(table.len(), 3);
    /// assert!(table.is_terminal(&LabelStatus::Removed));
    /// ```
    pub fn from_successors<F>(states: &[S], successors: F) -> Self
    where
        F: Fn(&S) -> Vec<S>,
    {
        let mut rules = Vec::with_capacity(states.len());
        let mut index = HashMap::with_capacity(states.len());
        for state in states {
            if index.contains_key(state) {
                continue;
            }
            index.insert(state.clone(), rules.len());
            rules.push(TransitionRule::new(state.clone(), successors(state)));
        }
        Self { rules, index }
    }

    pub fn rule_for(&self, state: &S) -> Option<&TransitionRule<S>> {
        self.index.get(state).map(|&position| &self.rules[position])
    }

    /// Destinations of `state`, or `None` when the table has no rule for it.
    pub fn successors(&self, state: &S) -> Option<&[S]> {
        self.rule_for(state).map(|rule| rule.to.as_slice())
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// True only for states that have a rule with no destinations.
    pub fn is_terminal(&self, state: &S) -> bool {
        self.rule_for(state).is_some_and(TransitionRule::is_terminal)
    }

    /// Source states in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.rules.iter().map(|rule| &rule.from)
    }

    pub fn rules(&self) -> &[TransitionRule<S>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
