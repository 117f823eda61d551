//! Shared fixtures: a small catalogue of records built the way a loader would.

use chrono::{DateTime, TimeZone, Utc};
use library_records::{
    Author, AuthorId, Book, BookId, Loan, LoanId, Reader, ReaderId, Reservation, ReservationId,
};

pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn herbert() -> Author {
    Author::new(
        AuthorId::new(1),
        "Frank Herbert",
        "American science-fiction author.",
        date(1920, 10, 8),
    )
}

pub fn dune() -> Book {
    Book::new(BookId::new(1), "Dune", date(1965, 8, 1), "...")
}

pub fn emma() -> Book {
    Book::new(
        BookId::new(2),
        "Emma",
        date(1815, 12, 23),
        "A young woman meddles in the romantic lives of her neighbours.",
    )
}

pub fn reader() -> Reader {
    Reader::new(ReaderId::new(5), "Ada")
}

pub fn loan() -> Loan {
    Loan::new(
        LoanId::new(100),
        BookId::new(2),
        ReaderId::new(5),
        date(2024, 3, 1),
        date(2024, 3, 15),
    )
}

/// Reservation 10: reader 5 wants book 1 on 2024-01-10.
pub fn pending_reservation<'a>() -> Reservation<'a> {
    Reservation::new(
        ReservationId::new(10),
        BookId::new(1),
        ReaderId::new(5),
        date(2024, 1, 1),
        date(2024, 1, 10),
        "pending",
    )
}
