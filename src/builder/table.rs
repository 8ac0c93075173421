//! Builder for constructing validators rule by rule.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::table::{TransitionRule, TransitionTable};
use crate::validator::StateMachineValidator;

/// Builder for transition tables with a fluent API.
pub struct TableBuilder<S: State> {
    entity: Option<String>,
    rules: Vec<TransitionRule<S>>,
}

impl<S: State> TableBuilder<S> {
    pub fn new() -> Self {
        Self {
            entity: None,
            rules: Vec::new(),
        }
    }

    /// Set the entity name used in error messages (required).
    pub fn entity(mut self, name: impl Into<String>) -> Self {
        self.entity = Some(name.into());
        self
    }

    /// Add a rule listing every state reachable from `from`.
    pub fn rule(mut self, from: S, to: impl IntoIterator<Item = S>) -> Self {
        self.rules.push(TransitionRule::new(from, to));
        self
    }

    /// Add a rule with no destinations.
    pub fn terminal(mut self, from: S) -> Self {
        self.rules.push(TransitionRule::terminal(from));
        self
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: TransitionRule<S>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: Vec<TransitionRule<S>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the table alone.
    pub fn build_table(self) -> Result<TransitionTable<S>, BuildError> {
        if self.rules.is_empty() {
            return Err(BuildError::NoRules);
        }
        TransitionTable::new(self.rules)
    }

    /// Build the validator.
    /// Returns an error if the entity name or rules are missing, or a source
    /// state is declared twice.
    pub fn build(mut self) -> Result<StateMachineValidator<S>, BuildError> {
        let entity = self.entity.take().ok_or(BuildError::MissingEntityName)?;
        let table = self.build_table()?;
        Ok(StateMachineValidator::from_table(table, entity))
    }
}

impl<S: State> Default for TableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(label: &str) -> String {
        label.to_string()
    }

    #[test]
    fn builder_requires_entity_name() {
        let result = TableBuilder::new()
            .rule(s("draft"), [s("active")])
            .build();

        assert!(matches!(result, Err(BuildError::MissingEntityName)));
    }

    #[test]
    fn builder_requires_rules() {
        let result = TableBuilder::<String>::new().entity("Route").build();

        assert!(matches!(result, Err(BuildError::NoRules)));
    }

    #[test]
    fn builder_rejects_duplicate_sources() {
        let result = TableBuilder::new()
            .entity("Route")
            .rule(s("draft"), [s("active")])
            .terminal(s("draft"))
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateRule {
                state: "draft".to_string()
            }
        );
    }

    #[test]
    fn fluent_api_builds_validator() {
        let validator = TableBuilder::new()
            .entity("Route")
            .rule(s("draft"), [s("active")])
            .rule(s("active"), [s("inactive")])
            .add_rule(TransitionRule::new(s("inactive"), [s("active")]))
            .build()
            .unwrap();

        assert_eq!(validator.entity(), "Route");
        assert!(validator.can_transition(&s("inactive"), &s("active")));
        assert_eq!(validator.table().len(), 3);
    }

    #[test]
    fn rules_can_be_added_in_bulk() {
        let table = TableBuilder::new()
            .rules(vec![
                TransitionRule::new(s("pending"), [s("approved"), s("rejected")]),
                TransitionRule::terminal(s("approved")),
            ])
            .terminal(s("rejected"))
            .build_table()
            .unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.is_terminal(&s("rejected")));
    }
}
