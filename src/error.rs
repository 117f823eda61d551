use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A joined record does not carry the id its owner refers to.
    #[error("{relation} reference mismatch (expected id {expected}, got {actual})")]
    ReferenceMismatch {
        relation: &'static str,
        expected: i64,
        actual: i64,
    },
    #[error("unknown reservation status: {0:?}")]
    UnknownStatus(String),
    #[error("failed to encode {collection} record: {message}")]
    Encode {
        collection: &'static str,
        message: String,
    },
    #[error("failed to decode {collection} record: {message}")]
    Decode {
        collection: &'static str,
        message: String,
    },
}

pub type RecordResult<T> = Result<T, RecordError>;
