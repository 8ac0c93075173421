//! Route lifecycle. Deactivated routes may be put back into service.

use crate::table::TransitionTable;
use crate::validator::StateMachineValidator;

crate::state_enum! {
    /// Status of a bus route.
    pub enum RouteStatus {
        Draft => "draft",
        Active => "active",
        Inactive => "inactive",
    }
}

pub const INITIAL_STATES: &[RouteStatus] = &[RouteStatus::Draft];

pub fn validator() -> StateMachineValidator<RouteStatus> {
    let table = TransitionTable::from_successors(RouteStatus::ALL, |status| match status {
        RouteStatus::Draft => vec![RouteStatus::Active],
        RouteStatus::Active => vec![RouteStatus::Inactive],
        RouteStatus::Inactive => vec![RouteStatus::Active],
    });
    StateMachineValidator::from_table(table, "Route")
}
