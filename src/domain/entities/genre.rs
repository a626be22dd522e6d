//! Genre entity.

use serde::{Deserialize, Serialize};

/// A movie genre as reported by the upstream API.
///
/// Identity is the upstream `id`; genres are only ever constructed from
/// upstream payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl Genre {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}
