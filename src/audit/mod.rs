//! Whole-table audit using accumulating validation.
//!
//! The validator only looks one hop ahead, so a table can be internally
//! inconsistent and still answer every question asked of it. The audit walks
//! the whole table once and reports every problem it finds rather than the
//! first one, using Stillwater's `Validation`.
//!
//! # Example
//!
//! ```rust
//! use statusgate::audit::{audit_table, TableIssue};
//! use statusgate::table::{TransitionRule, TransitionTable};
//! use stillwater::validation::Validation;
//!
//! let s = |label: &str| label.to_string();
//! let table = TransitionTable::new(vec![
//!     TransitionRule::new(s("draft"), [s("active")]),
//!     TransitionRule::new(s("active"), [s("archived")]),
//! ])
//! .unwrap();
//!
//! match audit_table(&table, &[s("draft")]) {
//!     Validation::Failure(issues) => {
//!         assert!(issues.iter().any(|i| matches!(i, TableIssue::DanglingDestination { .. })));
//!     }
//!     Validation::Success(_) => panic!("expected issues"),
//! }
//! ```

mod issues;

pub use issues::TableIssue;

use crate::core::State;
use crate::table::TransitionTable;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Check a table against the states new records may start in.
///
/// Returns `Validation::Success(())` if the table is consistent, otherwise
/// `Validation::Failure` with every issue found.
pub fn audit_table<S: State>(
    table: &TransitionTable<S>,
    initial_states: &[S],
) -> Validation<(), NonEmptyVec<TableIssue>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<TableIssue>>> = Vec::new();

    if initial_states.is_empty() {
        checks.push(Validation::fail(TableIssue::NoInitialStates));
    }

    for state in initial_states {
        let check = if table.contains(state) {
            Validation::success(())
        } else {
            Validation::fail(TableIssue::InitialStateWithoutRule {
                state: state.name().to_string(),
            })
        };
        checks.push(check);
    }

    let mut reachable: HashSet<&S> = initial_states.iter().collect();
    for rule in table.rules() {
        for to in &rule.to {
            if to != &rule.from {
                reachable.insert(to);
            }
            let check = if table.contains(to) {
                Validation::success(())
            } else {
                Validation::fail(TableIssue::DanglingDestination {
                    from: rule.from.name().to_string(),
                    to: to.name().to_string(),
                })
            };
            checks.push(check);
        }
    }

    for state in table.states() {
        let check = if reachable.contains(state) {
            Validation::success(())
        } else {
            Validation::fail(TableIssue::UnreachableState {
                state: state.name().to_string(),
            })
        };
        checks.push(check);
    }

    debug!(
        rules = table.len(),
        checks = checks.len(),
        "audited transition table"
    );
    Validation::all_vec(checks).map(|_| ())
}
