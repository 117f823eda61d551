use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Book, Reader, Record};
use crate::error::{RecordError, RecordResult};
use crate::id::{BookId, ReaderId, ReservationId};
use crate::status::ReservationStatus;

/// A reader's claim on a book for a given date.
///
/// `book` and `reader` borrow records owned elsewhere and are only set when the
/// caller joins them in. They are never serialized, so a decoded reservation is
/// always shallow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation<'a> {
    pub id: ReservationId,
    pub book_id: BookId,
    pub reader_id: ReaderId,
    /// When the reservation was registered.
    pub created_at: DateTime<Utc>,
    /// The date the reservation is for.
    pub reserved_for: DateTime<Utc>,
    /// Free text. See [`Reservation::known_status`] for the recognised values.
    pub status: String,
    #[serde(skip)]
    pub book: Option<&'a Book>,
    #[serde(skip)]
    pub reader: Option<&'a Reader>,
}

impl<'a> Reservation<'a> {
    /// Builds a shallow reservation. Both joined references start out absent.
    pub fn new(
        id: ReservationId,
        book_id: BookId,
        reader_id: ReaderId,
        created_at: DateTime<Utc>,
        reserved_for: DateTime<Utc>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            book_id,
            reader_id,
            created_at,
            reserved_for,
            status: status.into(),
            book: None,
            reader: None,
        }
    }

    /// Joins the reserved book in. Fails if `book.id` is not `book_id`.
    pub fn with_book(mut self, book: &'a Book) -> RecordResult<Self> {
        check_reference("reservation.book", self.book_id.raw(), book.id.raw())?;
        self.book = Some(book);
        Ok(self)
    }

    /// Joins the reserving reader in. Fails if `reader.id` is not `reader_id`.
    pub fn with_reader(mut self, reader: &'a Reader) -> RecordResult<Self> {
        check_reference("reservation.reader", self.reader_id.raw(), reader.id.raw())?;
        self.reader = Some(reader);
        Ok(self)
    }

    /// Verifies that whichever references are present agree with the ids.
    ///
    /// Useful when `book`/`reader` were assigned directly through the public
    /// fields instead of via [`with_book`](Self::with_book) and
    /// [`with_reader`](Self::with_reader).
    pub fn check_references(&self) -> RecordResult<()> {
        if let Some(book) = self.book {
            check_reference("reservation.book", self.book_id.raw(), book.id.raw())?;
        }
        if let Some(reader) = self.reader {
            check_reference("reservation.reader", self.reader_id.raw(), reader.id.raw())?;
        }
        Ok(())
    }

    pub fn is_book_joined(&self) -> bool {
        self.book.is_some()
    }

    pub fn is_reader_joined(&self) -> bool {
        self.reader.is_some()
    }

    /// A copy with both joined references dropped.
    pub fn shallow(&self) -> Reservation<'static> {
        Reservation {
            id: self.id,
            book_id: self.book_id,
            reader_id: self.reader_id,
            created_at: self.created_at,
            reserved_for: self.reserved_for,
            status: self.status.clone(),
            book: None,
            reader: None,
        }
    }

    /// Interprets `status` against the known states, if it matches one.
    pub fn known_status(&self) -> Option<ReservationStatus> {
        self.status.parse().ok()
    }
}

impl Record for Reservation<'_> {
    const COLLECTION: &'static str = "reservations";
    type Id = ReservationId;

    fn id(&self) -> ReservationId {
        self.id
    }
}

fn check_reference(relation: &'static str, expected: i64, actual: i64) -> RecordResult<()> {
    if expected == actual {
        return Ok(());
    }
    tracing::warn!(relation, expected, actual, "rejected mismatched reference");
    Err(RecordError::ReferenceMismatch {
        relation,
        expected,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn reservation<'a>() -> Reservation<'a> {
        Reservation::new(
            ReservationId::new(10),
            BookId::new(1),
            ReaderId::new(5),
            at(2024, 1, 1),
            at(2024, 1, 10),
            "pending",
        )
    }

    #[test]
    fn new_starts_shallow() {
        let r = reservation();
        assert!(!r.is_book_joined());
        assert!(!r.is_reader_joined());
        assert!(r.check_references().is_ok());
    }

    #[test]
    fn with_book_rejects_other_book() {
        let other = Book::new(BookId::new(2), "Emma", at(1815, 12, 23), "");
        let err = reservation().with_book(&other).unwrap_err();
        assert_eq!(
            err,
            RecordError::ReferenceMismatch {
                relation: "reservation.book",
                expected: 1,
                actual: 2,
            }
        );
    }

    #[test]
    fn with_reader_rejects_other_reader() {
        let other = Reader::new(ReaderId::new(6), "Ann");
        let err = reservation().with_reader(&other).unwrap_err();
        assert!(matches!(
            err,
            RecordError::ReferenceMismatch {
                relation: "reservation.reader",
                expected: 5,
                actual: 6,
            }
        ));
    }

    #[test]
    fn check_references_catches_hand_assigned_mismatch() {
        let other = Reader::new(ReaderId::new(9), "Bo");
        let mut r = reservation();
        r.reader = Some(&other);
        assert!(r.check_references().is_err());
    }

    #[test]
    fn shallow_drops_joins_but_keeps_scalars() {
        let book = Book::new(BookId::new(1), "Dune", at(1965, 8, 1), "...");
        let reader = Reader::new(ReaderId::new(5), "Paul");
        let joined = reservation()
            .with_book(&book)
            .unwrap()
            .with_reader(&reader)
            .unwrap();

        let shallow = joined.shallow();
        assert_eq!(shallow, reservation());
        assert_ne!(shallow, joined);
    }

    #[test]
    fn known_status_is_lenient() {
        let mut r = reservation();
        assert_eq!(r.known_status(), Some(ReservationStatus::Pending));
        r.status = "waiting on shelf".into();
        assert_eq!(r.known_status(), None);
    }
}
