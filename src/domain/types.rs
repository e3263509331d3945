//! Strongly-typed value objects used by domain entities.
//!
//! Identifier newtypes enforce positivity at the boundary so the repository
//! layer never sees a zero or negative id.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object,
/// or when decoding a stored value back into a domain type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CustomerId, "Unique identifier for a customer.");
id_newtype!(ProductId, "Unique identifier for a catalog product.");
id_newtype!(BudgetId, "Unique identifier for a budget.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_rejects_non_positive_values() {
        assert!(CustomerId::new(1).is_ok());
        assert_eq!(CustomerId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ProductId::new(-5), Err(TypeConstraintError::NonPositiveId));
    }

    #[test]
    fn id_round_trips_through_i32() {
        let id = BudgetId::try_from(7).unwrap();
        assert_eq!(i32::from(id), 7);
        assert_eq!(id.get(), 7);
        assert_eq!(id.to_string(), "7");
    }
}
