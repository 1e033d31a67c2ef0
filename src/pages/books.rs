//! Book page pipelines

use axum::extract::{Path, State};
use axum_extra::extract::Form;

use crate::{
    error::{AppError, AppResult},
    forms::{BookForm, DeleteForm},
    views,
    AppState,
};

use super::PageOutcome;

/// `GET /catalog/books`
pub async fn list(State(state): State<AppState>) -> AppResult<PageOutcome> {
    let books = state.store.books().await?;
    Ok(PageOutcome::render(views::books::list_page(&books)))
}

/// `GET /catalog/book/:id`
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let (book, copies) =
        tokio::try_join!(state.store.book(id), state.store.instances_of_book(id))?;

    let book = book.ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

    Ok(PageOutcome::render(views::books::detail_page(
        &book, &copies,
    )))
}

/// `GET /catalog/book/create`
pub async fn create_get(State(state): State<AppState>) -> AppResult<PageOutcome> {
    let (authors, genres) = tokio::try_join!(state.store.authors(), state.store.genres())?;

    Ok(PageOutcome::render(views::books::form_page(
        "Create Book",
        &BookForm::default(),
        &authors,
        &genres,
        &[],
    )))
}

/// `POST /catalog/book/create`
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<PageOutcome> {
    let form = form.trimmed();
    let errors = form.validate_form();
    if !errors.is_empty() {
        let (authors, genres) = tokio::try_join!(state.store.authors(), state.store.genres())?;
        return Ok(PageOutcome::render(views::books::form_page(
            "Create Book",
            &form,
            &authors,
            &genres,
            &errors,
        )));
    }

    let created = state.store.create_book(&form.payload()?).await?;
    Ok(PageOutcome::redirect(created.url()))
}

/// `GET /catalog/book/:id/update`
pub async fn update_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let (book, authors, genres) = tokio::try_join!(
        state.store.book(id),
        state.store.authors(),
        state.store.genres()
    )?;

    let book = book.ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

    Ok(PageOutcome::render(views::books::form_page(
        &format!("Update Book: {}", book.title),
        &BookForm::from_book(&book),
        &authors,
        &genres,
        &[],
    )))
}

/// `POST /catalog/book/:id/update`
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BookForm>,
) -> AppResult<PageOutcome> {
    let form = form.trimmed();
    let errors = form.validate_form();
    if !errors.is_empty() {
        let (authors, genres) = tokio::try_join!(state.store.authors(), state.store.genres())?;
        return Ok(PageOutcome::render(views::books::form_page(
            "Update Book",
            &form,
            &authors,
            &genres,
            &errors,
        )));
    }

    let updated = state
        .store
        .replace_book(id, &form.payload()?)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

    Ok(PageOutcome::redirect(updated.url()))
}

/// `GET /catalog/book/:id/delete`
pub async fn delete_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let (book, copies) =
        tokio::try_join!(state.store.book(id), state.store.instances_of_book(id))?;

    let Some(book) = book else {
        return Ok(PageOutcome::redirect("/catalog/books"));
    };

    Ok(PageOutcome::render(views::books::delete_page(
        &book, &copies,
    )))
}

/// `POST /catalog/book/:id/delete`
///
/// Deletion is refused while copies of the book still exist.
pub async fn delete_post(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> AppResult<PageOutcome> {
    let id = form.target_id()?;
    let (book, copies) =
        tokio::try_join!(state.store.book(id), state.store.instances_of_book(id))?;

    let Some(book) = book else {
        return Ok(PageOutcome::redirect("/catalog/books"));
    };

    if !copies.is_empty() {
        return Ok(PageOutcome::render(views::books::delete_page(
            &book, &copies,
        )));
    }

    state.store.delete_book(id).await?;
    Ok(PageOutcome::redirect("/catalog/books"))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::state;
    use super::*;
    use crate::models::{Author, Book, BookInstance, CopyStatus};
    use crate::store::MockCatalogStore;
    use chrono::NaiveDate;

    fn hobbit(id: i32) -> Book {
        Book {
            id,
            title: "The Hobbit".to_string(),
            author_id: 1,
            summary: "There and back again.".to_string(),
            isbn: "9780261102217".to_string(),
            author: Some(Author {
                id: 1,
                first_name: "J.R.R.".to_string(),
                family_name: "Tolkien".to_string(),
                date_of_birth: None,
                date_of_death: None,
            }),
            genres: Vec::new(),
        }
    }

    fn copy_of(book_id: i32) -> BookInstance {
        BookInstance {
            id: 8,
            book_id,
            imprint: "Allen & Unwin, 1937".to_string(),
            status: CopyStatus::Available,
            due_back: NaiveDate::from_ymd_opt(2014, 10, 6).unwrap(),
            book_title: None,
        }
    }

    fn valid_form() -> BookForm {
        BookForm {
            title: "The Hobbit".to_string(),
            author: "1".to_string(),
            summary: "There and back again.".to_string(),
            isbn: "9780261102217".to_string(),
            genre: vec!["2".to_string()],
        }
    }

    #[tokio::test]
    async fn detail_with_no_copies_renders_empty_list() {
        let mut store = MockCatalogStore::new();
        store.expect_book().returning(|id| Ok(Some(hobbit(id))));
        store
            .expect_instances_of_book()
            .returning(|_| Ok(Vec::new()));

        let outcome = detail(state(store), Path(4)).await.unwrap();
        let PageOutcome::Render(markup) = outcome else {
            panic!("expected a rendered page");
        };
        assert!(markup
            .into_string()
            .contains("This book has no copies in the library."));
    }

    #[tokio::test]
    async fn detail_with_absent_id_is_not_found() {
        let mut store = MockCatalogStore::new();
        store.expect_book().returning(|_| Ok(None));
        store
            .expect_instances_of_book()
            .returning(|_| Ok(Vec::new()));

        let result = detail(state(store), Path(404)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_with_invalid_form_refetches_reference_data_and_rerenders() {
        let mut store = MockCatalogStore::new();
        store
            .expect_authors()
            .times(1)
            .returning(|| Ok(Vec::new()));
        store.expect_genres().times(1).returning(|| Ok(Vec::new()));
        store.expect_create_book().never();

        let mut form = valid_form();
        form.title = String::new();

        let outcome = create_post(state(store), Form(form)).await.unwrap();
        let PageOutcome::Render(markup) = outcome else {
            panic!("expected the form to re-render");
        };
        assert!(markup.into_string().contains("Title must not be empty."));
    }

    #[tokio::test]
    async fn create_with_valid_form_persists_once_and_redirects() {
        let mut store = MockCatalogStore::new();
        store
            .expect_create_book()
            .withf(|b| b.author_id == 1 && b.genre_ids == vec![2])
            .times(1)
            .returning(|b| {
                Ok(Book {
                    id: 4,
                    title: b.title.clone(),
                    author_id: b.author_id,
                    summary: b.summary.clone(),
                    isbn: b.isbn.clone(),
                    author: None,
                    genres: Vec::new(),
                })
            });

        let outcome = create_post(state(store), Form(valid_form())).await.unwrap();
        assert!(matches!(outcome, PageOutcome::Redirect(ref to) if to == "/catalog/book/4"));
    }

    #[tokio::test]
    async fn delete_with_copies_refuses_and_rerenders() {
        let mut store = MockCatalogStore::new();
        store.expect_book().returning(|id| Ok(Some(hobbit(id))));
        store
            .expect_instances_of_book()
            .returning(|id| Ok(vec![copy_of(id)]));
        store.expect_delete_book().never();

        let form = DeleteForm {
            id: "4".to_string(),
        };
        let outcome = delete_post(state(store), Form(form)).await.unwrap();
        assert!(matches!(outcome, PageOutcome::Render(_)));
    }

    #[tokio::test]
    async fn delete_without_copies_deletes_and_redirects() {
        let mut store = MockCatalogStore::new();
        store.expect_book().returning(|id| Ok(Some(hobbit(id))));
        store
            .expect_instances_of_book()
            .returning(|_| Ok(Vec::new()));
        store.expect_delete_book().times(1).returning(|_| Ok(true));

        let form = DeleteForm {
            id: "4".to_string(),
        };
        let outcome = delete_post(state(store), Form(form)).await.unwrap();
        assert!(matches!(outcome, PageOutcome::Redirect(ref to) if to == "/catalog/books"));
    }
}
