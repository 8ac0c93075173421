//! Rolling plan version lifecycle.
//!
//! ```text
//! draft ──▶ active ──▶ inactive (terminal)
//! ```

use crate::table::TransitionTable;
use crate::validator::StateMachineValidator;

crate::state_enum! {
    /// Status of one version of a rolling plan.
    pub enum PlanVersionStatus {
        Draft => "draft",
        Active => "active",
        Inactive => "inactive",
    }
}

/// New versions always start as drafts.
pub const INITIAL_STATES: &[PlanVersionStatus] = &[PlanVersionStatus::Draft];

pub fn validator() -> StateMachineValidator<PlanVersionStatus> {
    let table = TransitionTable::from_successors(PlanVersionStatus::ALL, |status| match status {
        PlanVersionStatus::Draft => vec![PlanVersionStatus::Active],
        PlanVersionStatus::Active => vec![PlanVersionStatus::Inactive],
        PlanVersionStatus::Inactive => vec![],
    });
    StateMachineValidator::from_table(table, "Version")
}
