//! Macros for declaring status alphabets and transition tables.

/// Declare a closed status alphabet.
///
/// Each variant is paired with the label stored in the database column. The
/// macro derives [`State`](crate::core::State), `Display`, `FromStr` and serde
/// support using those labels, and adds an `ALL` constant listing the variants
/// in declaration order.
///
/// # Example
///
/// ```
/// use statusgate::core::State;
/// use statusgate::state_enum;
///
/// state_enum! {
///     pub enum InstallationStatus {
///         Scheduled => "scheduled",
///         Installed => "installed",
///         Cancelled => "cancelled",
///     }
/// }
///
/// assert_eq!(InstallationStatus::Installed.name(), "installed");
/// assert_eq!("cancelled".parse::<InstallationStatus>().unwrap(), InstallationStatus::Cancelled);
/// assert_eq!(InstallationStatus::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ParseStateError;

            fn from_str(label: &str) -> ::std::result::Result<Self, Self::Err> {
                match label {
                    $($label => Ok(Self::$variant),)*
                    other => Err($crate::core::ParseStateError {
                        alphabet: stringify!($name),
                        label: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Declare transition rules as `from => [to, ...]` pairs.
///
/// Expands to a `Vec<TransitionRule<_>>` in declaration order. An empty list
/// declares a terminal state.
///
/// # Example
///
/// ```
/// use statusgate::transition_table;
/// use statusgate::validator::StateMachineValidator;
///
/// let s = |label: &str| label.to_string();
/// let rules = transition_table! {
///     s("pending") => [s("approved"), s("rejected")],
///     s("approved") => [],
///     s("rejected") => [],
/// };
///
/// let validator = StateMachineValidator::new(rules, "Request").unwrap();
/// assert!(validator.can_transition(&s("pending"), &s("rejected")));
/// ```
#[macro_export]
macro_rules! transition_table {
    ( $( $from:expr => [ $($to:expr),* $(,)? ] ),* $(,)? ) => {
        vec![
            $( $crate::table::TransitionRule::new($from, vec![$($to),*]) ),*
        ]
    };
}
