//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Author, Genre};

/// Full book model from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub summary: String,
    pub isbn: String,
    // Populated by the repository with follow-up queries, None/empty otherwise
    #[sqlx(skip)]
    #[serde(default)]
    pub author: Option<Author>,
    #[sqlx(skip)]
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Projection row for book listings and dependent lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
    pub summary: String,
    #[sqlx(default)]
    #[serde(default)]
    pub author_name: Option<String>,
}

/// Minimal projection for populating the copy form's book selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookTitle {
    pub id: i32,
    pub title: String,
}

/// Create/replace book payload, produced by form validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author_id: i32,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<i32>,
}

impl Book {
    /// Canonical detail URL
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

impl BookSummary {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_url() {
        let book = Book {
            id: 12,
            title: "The Name of the Wind".to_string(),
            author_id: 7,
            summary: "A tale told in taverns.".to_string(),
            isbn: "9780756404741".to_string(),
            author: None,
            genres: Vec::new(),
        };
        assert_eq!(book.url(), "/catalog/book/12");
    }
}
