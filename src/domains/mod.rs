//! Status lifecycles of the fleet inventory entities.
//!
//! Each module declares its alphabet with [`state_enum!`](crate::state_enum),
//! builds its table from an exhaustive `match`, and exposes the statuses a new
//! record may start in.

pub mod driver;
pub mod route;
pub mod version;

pub use driver::DriverStatus;
pub use route::RouteStatus;
pub use version::PlanVersionStatus;
