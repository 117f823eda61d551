use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;
use crate::id::BookId;

// No author link: books and authors are not related at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub publication_date: DateTime<Utc>,
    pub synopsis: String,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        publication_date: DateTime<Utc>,
        synopsis: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            publication_date,
            synopsis: synopsis.into(),
        }
    }
}

impl Record for Book {
    const COLLECTION: &'static str = "books";
    type Id = BookId;

    fn id(&self) -> BookId {
        self.id
    }
}
