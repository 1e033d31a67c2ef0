//! Repository layer for database operations

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        Author, Book, BookInstance, BookSummary, BookTitle, Genre, NewAuthor, NewBook,
        NewBookInstance, NewGenre,
    },
    store::{CatalogCounts, CatalogStore},
};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub genres: genres::GenresRepository,
    pub books: books::BooksRepository,
    pub book_instances: book_instances::BookInstancesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            genres: genres::GenresRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            book_instances: book_instances::BookInstancesRepository::new(pool.clone()),
            pool,
        }
    }

    /// Record counts for the home page, gathered concurrently
    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        let books = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books");
        let instances = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM book_instances");
        let available = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM book_instances WHERE status = 'Available'",
        );
        let authors = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM authors");
        let genres = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM genres");

        let (books, book_instances, book_instances_available, authors, genres) = tokio::try_join!(
            books.fetch_one(&self.pool),
            instances.fetch_one(&self.pool),
            available.fetch_one(&self.pool),
            authors.fetch_one(&self.pool),
            genres.fetch_one(&self.pool),
        )?;

        Ok(CatalogCounts {
            books,
            book_instances,
            book_instances_available,
            authors,
            genres,
        })
    }
}

#[async_trait]
impl CatalogStore for Repository {
    async fn authors(&self) -> AppResult<Vec<Author>> {
        self.authors.list().await
    }

    async fn author(&self, id: i32) -> AppResult<Option<Author>> {
        self.authors.get(id).await
    }

    async fn create_author(&self, author: &NewAuthor) -> AppResult<Author> {
        self.authors.create(author).await
    }

    async fn replace_author(&self, id: i32, author: &NewAuthor) -> AppResult<Option<Author>> {
        self.authors.replace(id, author).await
    }

    async fn delete_author(&self, id: i32) -> AppResult<bool> {
        self.authors.delete(id).await
    }

    async fn genres(&self) -> AppResult<Vec<Genre>> {
        self.genres.list().await
    }

    async fn genre(&self, id: i32) -> AppResult<Option<Genre>> {
        self.genres.get(id).await
    }

    async fn genre_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        self.genres.get_by_name(name).await
    }

    async fn create_genre(&self, genre: &NewGenre) -> AppResult<Genre> {
        self.genres.create(genre).await
    }

    async fn replace_genre(&self, id: i32, genre: &NewGenre) -> AppResult<Option<Genre>> {
        self.genres.replace(id, genre).await
    }

    async fn delete_genre(&self, id: i32) -> AppResult<bool> {
        self.genres.delete(id).await
    }

    async fn books(&self) -> AppResult<Vec<BookSummary>> {
        self.books.list().await
    }

    async fn book(&self, id: i32) -> AppResult<Option<Book>> {
        self.books.get(id).await
    }

    async fn books_by_author(&self, author_id: i32) -> AppResult<Vec<BookSummary>> {
        self.books.list_by_author(author_id).await
    }

    async fn books_by_genre(&self, genre_id: i32) -> AppResult<Vec<BookSummary>> {
        self.books.list_by_genre(genre_id).await
    }

    async fn book_titles(&self) -> AppResult<Vec<BookTitle>> {
        self.books.titles().await
    }

    async fn create_book(&self, book: &NewBook) -> AppResult<Book> {
        self.books.create(book).await
    }

    async fn replace_book(&self, id: i32, book: &NewBook) -> AppResult<Option<Book>> {
        self.books.replace(id, book).await
    }

    async fn delete_book(&self, id: i32) -> AppResult<bool> {
        self.books.delete(id).await
    }

    async fn book_instances(&self) -> AppResult<Vec<BookInstance>> {
        self.book_instances.list().await
    }

    async fn book_instance(&self, id: i32) -> AppResult<Option<BookInstance>> {
        self.book_instances.get(id).await
    }

    async fn instances_of_book(&self, book_id: i32) -> AppResult<Vec<BookInstance>> {
        self.book_instances.list_by_book(book_id).await
    }

    async fn create_book_instance(&self, instance: &NewBookInstance) -> AppResult<BookInstance> {
        self.book_instances.create(instance).await
    }

    async fn replace_book_instance(
        &self,
        id: i32,
        instance: &NewBookInstance,
    ) -> AppResult<Option<BookInstance>> {
        self.book_instances.replace(id, instance).await
    }

    async fn delete_book_instance(&self, id: i32) -> AppResult<bool> {
        self.book_instances.delete(id).await
    }

    async fn counts(&self) -> AppResult<CatalogCounts> {
        Repository::counts(self).await
    }
}
