pub mod codec;
mod error;
mod id;
mod model;
mod status;

pub use error::{RecordError, RecordResult};
pub use id::{AuthorId, BookId, LoanId, ReaderId, ReservationId};
pub use model::{Author, Book, Loan, Reader, Record, Reservation};
pub use status::ReservationStatus;
