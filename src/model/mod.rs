//! Records - plain data carriers for the library domain.
//!
//! Each record is a freestanding value with public fields. Nothing here loads,
//! stores or mutates records; a persistence layer is expected to build them,
//! assign ids and keep `book_id`/`reader_id` pointing at real rows.
//!
//! ## Example
//!
//! ```ignore
//! use library_records::{Book, BookId, Reader, ReaderId, Reservation, ReservationId, Record};
//!
//! let book = Book::new(BookId::new(1), "Dune", published, "Desert planet.");
//! let reservation = Reservation::new(
//!     ReservationId::new(10), BookId::new(1), ReaderId::new(5),
//!     created_at, reserved_for, "pending",
//! )
//! .with_book(&book)?;
//!
//! assert_eq!(reservation.book.map(|b| b.id), Some(reservation.book_id));
//! assert_eq!(book.key(), "books:1");
//! ```

mod author;
mod book;
mod loan;
mod reader;
mod reservation;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

/// Trait implemented by every record type.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g., "books", "loans").
    /// Maps to a table in SQL, a collection in MongoDB, a key prefix in KV stores, etc.
    const COLLECTION: &'static str;

    type Id: Copy + Eq + fmt::Display;

    /// Returns the unique identifier for this record.
    fn id(&self) -> Self::Id;

    /// Storage key in the form `"COLLECTION:id"`.
    fn key(&self) -> String {
        format!("{}:{}", Self::COLLECTION, self.id())
    }
}

pub use author::Author;
pub use book::Book;
pub use loan::Loan;
pub use reader::Reader;
pub use reservation::Reservation;
