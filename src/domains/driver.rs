//! Driver onboarding and employment lifecycle.
//!
//! ```text
//! pending ──▶ approved ──▶ suspended ──▶ approved (reinstatement)
//!    │            │            │
//!    │            └──▶ inactive ◀──┘
//!    └──▶ rejected (terminal)
//! ```

use crate::table::TransitionTable;
use crate::validator::StateMachineValidator;

crate::state_enum! {
    /// Status of a driver record.
    pub enum DriverStatus {
        Pending => "pending",
        Approved => "approved",
        Suspended => "suspended",
        Rejected => "rejected",
        Inactive => "inactive",
    }
}

/// Drivers are registered pending approval.
pub const INITIAL_STATES: &[DriverStatus] = &[DriverStatus::Pending];

pub fn validator() -> StateMachineValidator<DriverStatus> {
    let table = TransitionTable::from_successors(DriverStatus::ALL, |status| match status {
        DriverStatus::Pending => vec![DriverStatus::Approved, DriverStatus::Rejected],
        DriverStatus::Approved => vec![DriverStatus::Suspended, DriverStatus::Inactive],
        DriverStatus::Suspended => vec![DriverStatus::Approved, DriverStatus::Inactive],
        DriverStatus::Rejected | DriverStatus::Inactive => vec![],
    });
    StateMachineValidator::from_table(table, "Driver")
}
