use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;
use crate::id::{BookId, LoanId, ReaderId};

/// A book checked out by a reader.
///
/// `book_id` and `reader_id` are expected to reference existing rows; that is
/// checked by whoever persists the loan, not by the record itself. There is no
/// status field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub book_id: BookId,
    pub reader_id: ReaderId,
    pub checkout_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
}

impl Loan {
    pub fn new(
        id: LoanId,
        book_id: BookId,
        reader_id: ReaderId,
        checkout_date: DateTime<Utc>,
        return_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            book_id,
            reader_id,
            checkout_date,
            return_date,
        }
    }
}

impl Record for Loan {
    const COLLECTION: &'static str = "loans";
    type Id = LoanId;

    fn id(&self) -> LoanId {
        self.id
    }
}
