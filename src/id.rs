//! Typed identifiers for each record kind.
//!
//! Every id wraps the integer key assigned by whatever layer persists the
//! record. Ids of different kinds do not mix: a `BookId` can't be passed where a
//! `ReaderId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn raw(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of an [`Author`](crate::Author).
    AuthorId
);
define_id!(
    /// Identifier of a [`Book`](crate::Book).
    BookId
);
define_id!(
    /// Identifier of a [`Loan`](crate::Loan).
    LoanId
);
define_id!(
    /// Identifier of a [`Reader`](crate::Reader).
    ReaderId
);
define_id!(
    /// Identifier of a [`Reservation`](crate::Reservation).
    ReservationId
);
