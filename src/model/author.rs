use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;
use crate::id::AuthorId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub biography: String,
    pub birth_date: DateTime<Utc>,
}

impl Author {
    pub fn new(
        id: AuthorId,
        name: impl Into<String>,
        biography: impl Into<String>,
        birth_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            biography: biography.into(),
            birth_date,
        }
    }
}

impl Record for Author {
    const COLLECTION: &'static str = "authors";
    type Id = AuthorId;

    fn id(&self) -> AuthorId {
        self.id
    }
}
