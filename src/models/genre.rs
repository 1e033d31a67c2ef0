//! Genre model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Genre of a book, e.g. "Fantasy". Names are unique by convention: the
/// create pipeline redirects to an existing genre with the same name
/// instead of inserting a duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Create/replace genre payload, produced by form validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewGenre {
    pub name: String,
}

impl Genre {
    /// Canonical detail URL
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}
