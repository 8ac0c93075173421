//! Statusgate: declarative status lifecycles for fleet inventory records
//!
//! Buses, drivers, routes and rolling plan versions all carry a status column.
//! Statusgate guards writes to that column: each entity type declares a
//! transition table once, and every status change is checked against it
//! before it is persisted.
//!
//! # Core Concepts
//!
//! - **State**: a status label, via the `State` trait (enums or plain strings)
//! - **Transition table**: one rule per status listing its legal successors
//! - **Validator**: pure one-hop checks over a table
//! - **Repository**: read-validate-write of a stored status as one operation
//!
//! # Example
//!
//! ```rust
//! use statusgate::builder::TableBuilder;
//! use statusgate::validator::TransitionError;
//!
//! let s = |label: &str| label.to_string();
//! let versions = TableBuilder::new()
//!     .entity("Version")
//!     .rule(s("draft"), [s("active")])
//!     .rule(s("active"), [s("inactive")])
//!     .terminal(s("inactive"))
//!     .build()
//!     .unwrap();
//!
//! assert!(versions.validate_transition(&s("draft"), &s("active")).is_ok());
//! assert!(matches!(
//!     versions.validate_transition(&s("draft"), &s("inactive")),
//!     Err(TransitionError::InvalidTransition { .. })
//! ));
//! assert!(versions.validate_initial_state(&s("draft"), &[s("draft")]).is_ok());
//! assert_eq!(versions.possible_next_states(&s("active")), vec![s("inactive")]);
//! assert!(!versions.can_transition(&s("archived"), &s("draft")));
//! ```

pub mod audit;
pub mod builder;
pub mod core;
pub mod document;
pub mod domains;
pub mod repository;
pub mod table;
pub mod validator;

// Re-export commonly used types
pub use builder::{BuildError, TableBuilder};
pub use self::core::{State, StatusChange, StatusHistory};
pub use table::{TransitionRule, TransitionTable};
pub use validator::{StateMachineValidator, TransitionError};
