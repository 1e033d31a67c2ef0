//! Entity store interface consumed by the page pipelines.
//!
//! Every handler talks to the catalog through this trait, which keeps the
//! request pipelines independent of the Postgres layer and mockable in
//! tests. [`crate::repository::Repository`] is the production
//! implementation.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::AppResult,
    models::{
        Author, Book, BookInstance, BookSummary, BookTitle, Genre, NewAuthor, NewBook,
        NewBookInstance, NewGenre,
    },
};

/// Record counts shown on the catalog home page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub books: i64,
    pub book_instances: i64,
    pub book_instances_available: i64,
    pub authors: i64,
    pub genres: i64,
}

/// Narrow persistence interface for the four catalog entity types.
///
/// Lookups by id return `None` for absent records; the caller decides
/// whether that is a not-found error or an already-deleted no-op. Replace
/// operations return `None` when the target id does not exist, delete
/// operations return whether a record was removed. Any call may fail with
/// a storage error, which aborts the calling pipeline.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // Authors
    async fn authors(&self) -> AppResult<Vec<Author>>;
    async fn author(&self, id: i32) -> AppResult<Option<Author>>;
    async fn create_author(&self, author: &NewAuthor) -> AppResult<Author>;
    async fn replace_author(&self, id: i32, author: &NewAuthor) -> AppResult<Option<Author>>;
    async fn delete_author(&self, id: i32) -> AppResult<bool>;

    // Genres
    async fn genres(&self) -> AppResult<Vec<Genre>>;
    async fn genre(&self, id: i32) -> AppResult<Option<Genre>>;
    /// Case-sensitive exact-match lookup on the genre name
    async fn genre_by_name(&self, name: &str) -> AppResult<Option<Genre>>;
    async fn create_genre(&self, genre: &NewGenre) -> AppResult<Genre>;
    async fn replace_genre(&self, id: i32, genre: &NewGenre) -> AppResult<Option<Genre>>;
    async fn delete_genre(&self, id: i32) -> AppResult<bool>;

    // Books
    async fn books(&self) -> AppResult<Vec<BookSummary>>;
    async fn book(&self, id: i32) -> AppResult<Option<Book>>;
    async fn books_by_author(&self, author_id: i32) -> AppResult<Vec<BookSummary>>;
    async fn books_by_genre(&self, genre_id: i32) -> AppResult<Vec<BookSummary>>;
    async fn book_titles(&self) -> AppResult<Vec<BookTitle>>;
    async fn create_book(&self, book: &NewBook) -> AppResult<Book>;
    async fn replace_book(&self, id: i32, book: &NewBook) -> AppResult<Option<Book>>;
    async fn delete_book(&self, id: i32) -> AppResult<bool>;

    // Book instances
    async fn book_instances(&self) -> AppResult<Vec<BookInstance>>;
    async fn book_instance(&self, id: i32) -> AppResult<Option<BookInstance>>;
    async fn instances_of_book(&self, book_id: i32) -> AppResult<Vec<BookInstance>>;
    async fn create_book_instance(&self, instance: &NewBookInstance) -> AppResult<BookInstance>;
    async fn replace_book_instance(
        &self,
        id: i32,
        instance: &NewBookInstance,
    ) -> AppResult<Option<BookInstance>>;
    async fn delete_book_instance(&self, id: i32) -> AppResult<bool>;

    /// Record counts for the home page
    async fn counts(&self) -> AppResult<CatalogCounts>;
}
