use serde::{Deserialize, Serialize};

use super::Record;
use crate::id::ReaderId;

/// The person who borrows or reserves a book.
///
/// Only the fields loans and reservations need to point at are modelled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    pub id: ReaderId,
    pub name: String,
}

impl Reader {
    pub fn new(id: ReaderId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Record for Reader {
    const COLLECTION: &'static str = "readers";
    type Id = ReaderId;

    fn id(&self) -> ReaderId {
        self.id
    }
}
