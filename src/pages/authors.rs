//! Author page pipelines

use axum::{
    extract::{Path, State},
    Form,
};

use crate::{
    error::{AppError, AppResult},
    forms::{AuthorForm, DeleteForm},
    views,
    AppState,
};

use super::PageOutcome;

/// `GET /catalog/authors`
pub async fn list(State(state): State<AppState>) -> AppResult<PageOutcome> {
    let authors = state.store.authors().await?;
    Ok(PageOutcome::render(views::authors::list_page(&authors)))
}

/// `GET /catalog/author/:id`
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let (author, books) =
        tokio::try_join!(state.store.author(id), state.store.books_by_author(id))?;

    let author =
        author.ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))?;

    Ok(PageOutcome::render(views::authors::detail_page(
        &author, &books,
    )))
}

/// `GET /catalog/author/create`
pub async fn create_get() -> PageOutcome {
    PageOutcome::render(views::authors::form_page(
        "Create Author",
        &AuthorForm::default(),
        &[],
    ))
}

/// `POST /catalog/author/create`
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> AppResult<PageOutcome> {
    let form = form.trimmed();
    let errors = form.validate_form();
    if !errors.is_empty() {
        return Ok(PageOutcome::render(views::authors::form_page(
            "Create Author",
            &form,
            &errors,
        )));
    }

    let created = state.store.create_author(&form.payload()).await?;
    Ok(PageOutcome::redirect(created.url()))
}

/// `GET /catalog/author/:id/update`
pub async fn update_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let author = state
        .store
        .author(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))?;

    Ok(PageOutcome::render(views::authors::form_page(
        &format!("Update Author: {}", author.name()),
        &AuthorForm::from_author(&author),
        &[],
    )))
}

/// `POST /catalog/author/:id/update`
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<AuthorForm>,
) -> AppResult<PageOutcome> {
    let form = form.trimmed();
    let errors = form.validate_form();
    if !errors.is_empty() {
        return Ok(PageOutcome::render(views::authors::form_page(
            "Update Author",
            &form,
            &errors,
        )));
    }

    let updated = state
        .store
        .replace_author(id, &form.payload())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))?;

    Ok(PageOutcome::redirect(updated.url()))
}

/// `GET /catalog/author/:id/delete`
pub async fn delete_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let (author, books) =
        tokio::try_join!(state.store.author(id), state.store.books_by_author(id))?;

    // Already gone: back to the list rather than an error
    let Some(author) = author else {
        return Ok(PageOutcome::redirect("/catalog/authors"));
    };

    Ok(PageOutcome::render(views::authors::delete_page(
        &author, &books,
    )))
}

/// `POST /catalog/author/:id/delete`
///
/// The target id comes from the confirmation form's body, not the URL.
/// Deletion is refused while the author still has books.
pub async fn delete_post(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> AppResult<PageOutcome> {
    let id = form.target_id()?;
    let (author, books) =
        tokio::try_join!(state.store.author(id), state.store.books_by_author(id))?;

    let Some(author) = author else {
        return Ok(PageOutcome::redirect("/catalog/authors"));
    };

    if !books.is_empty() {
        return Ok(PageOutcome::render(views::authors::delete_page(
            &author, &books,
        )));
    }

    state.store.delete_author(id).await?;
    Ok(PageOutcome::redirect("/catalog/authors"))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::state;
    use super::*;
    use crate::models::{Author, BookSummary};
    use crate::store::MockCatalogStore;

    fn austen(id: i32) -> Author {
        Author {
            id,
            first_name: "Jane".to_string(),
            family_name: "Austen".to_string(),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    fn emma() -> BookSummary {
        BookSummary {
            id: 9,
            title: "Emma".to_string(),
            summary: "A novel about youthful hubris.".to_string(),
            author_name: None,
        }
    }

    fn valid_form() -> AuthorForm {
        AuthorForm {
            first_name: "Jane".to_string(),
            family_name: "Austen".to_string(),
            date_of_birth: "1775-12-16".to_string(),
            date_of_death: String::new(),
        }
    }

    #[tokio::test]
    async fn detail_with_present_id_and_no_books_renders() {
        let mut store = MockCatalogStore::new();
        store
            .expect_author()
            .times(1)
            .returning(|id| Ok(Some(austen(id))));
        store
            .expect_books_by_author()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let outcome = detail(state(store), Path(1)).await.unwrap();
        let PageOutcome::Render(markup) = outcome else {
            panic!("expected a rendered page");
        };
        assert!(markup.into_string().contains("This author has no books."));
    }

    #[tokio::test]
    async fn detail_with_absent_id_is_not_found() {
        let mut store = MockCatalogStore::new();
        store.expect_author().returning(|_| Ok(None));
        store.expect_books_by_author().returning(|_| Ok(Vec::new()));

        let result = detail(state(store), Path(404)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_with_one_invalid_field_renders_one_error_and_persists_nothing() {
        let mut store = MockCatalogStore::new();
        store.expect_create_author().never();

        let mut form = valid_form();
        form.date_of_birth = "not-a-date".to_string();

        let outcome = create_post(state(store), Form(form)).await.unwrap();
        let PageOutcome::Render(markup) = outcome else {
            panic!("expected the form to re-render");
        };
        let html = markup.into_string();
        assert!(html.contains("Invalid date of birth"));
        assert!(!html.contains("Invalid date of death"));
    }

    #[tokio::test]
    async fn create_with_valid_form_persists_once_and_redirects() {
        let mut store = MockCatalogStore::new();
        store
            .expect_create_author()
            .withf(|a| a.family_name == "Austen")
            .times(1)
            .returning(|a| {
                Ok(Author {
                    id: 42,
                    first_name: a.first_name.clone(),
                    family_name: a.family_name.clone(),
                    date_of_birth: a.date_of_birth,
                    date_of_death: a.date_of_death,
                })
            });

        let outcome = create_post(state(store), Form(valid_form())).await.unwrap();
        assert!(matches!(outcome, PageOutcome::Redirect(ref to) if to == "/catalog/author/42"));
    }

    #[tokio::test]
    async fn update_with_valid_form_replaces_once() {
        let mut store = MockCatalogStore::new();
        store
            .expect_replace_author()
            .times(1)
            .returning(|id, a| {
                Ok(Some(Author {
                    id,
                    first_name: a.first_name.clone(),
                    family_name: a.family_name.clone(),
                    date_of_birth: a.date_of_birth,
                    date_of_death: a.date_of_death,
                }))
            });

        let outcome = update_post(state(store), Path(1), Form(valid_form()))
            .await
            .unwrap();
        assert!(matches!(outcome, PageOutcome::Redirect(ref to) if to == "/catalog/author/1"));
    }

    #[tokio::test]
    async fn delete_with_books_refuses_and_rerenders() {
        let mut store = MockCatalogStore::new();
        store
            .expect_author()
            .returning(|id| Ok(Some(austen(id))));
        store
            .expect_books_by_author()
            .returning(|_| Ok(vec![emma(), emma()]));
        store.expect_delete_author().never();

        let form = DeleteForm {
            id: "1".to_string(),
        };
        let outcome = delete_post(state(store), Form(form)).await.unwrap();
        let PageOutcome::Render(markup) = outcome else {
            panic!("expected the confirmation view again");
        };
        assert!(markup.into_string().contains("Delete the following books"));
    }

    #[tokio::test]
    async fn delete_without_books_deletes_once_and_redirects() {
        let mut store = MockCatalogStore::new();
        store
            .expect_author()
            .returning(|id| Ok(Some(austen(id))));
        store
            .expect_books_by_author()
            .returning(|_| Ok(Vec::new()));
        store
            .expect_delete_author()
            .times(1)
            .returning(|_| Ok(true));

        let form = DeleteForm {
            id: "1".to_string(),
        };
        let outcome = delete_post(state(store), Form(form)).await.unwrap();
        assert!(matches!(outcome, PageOutcome::Redirect(ref to) if to == "/catalog/authors"));
    }
}
