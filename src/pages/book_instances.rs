//! Book instance (copy) page pipelines

use axum::{
    extract::{Path, State},
    Form,
};

use crate::{
    error::{AppError, AppResult},
    forms::{BookInstanceForm, DeleteForm},
    views,
    AppState,
};

use super::PageOutcome;

/// `GET /catalog/bookinstances`
pub async fn list(State(state): State<AppState>) -> AppResult<PageOutcome> {
    let instances = state.store.book_instances().await?;
    Ok(PageOutcome::render(views::book_instances::list_page(
        &instances,
    )))
}

/// `GET /catalog/bookinstance/:id`
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let instance = state
        .store
        .book_instance(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book copy with id {} not found", id)))?;

    Ok(PageOutcome::render(views::book_instances::detail_page(
        &instance,
    )))
}

/// `GET /catalog/bookinstance/create`
pub async fn create_get(State(state): State<AppState>) -> AppResult<PageOutcome> {
    let books = state.store.book_titles().await?;

    Ok(PageOutcome::render(views::book_instances::form_page(
        "Create Book Instance",
        &BookInstanceForm::default(),
        &books,
        &[],
    )))
}

/// `POST /catalog/bookinstance/create`
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<PageOutcome> {
    let form = form.trimmed();
    let errors = form.validate_form();
    if !errors.is_empty() {
        let books = state.store.book_titles().await?;
        return Ok(PageOutcome::render(views::book_instances::form_page(
            "Create Book Instance",
            &form,
            &books,
            &errors,
        )));
    }

    let created = state.store.create_book_instance(&form.payload()?).await?;
    Ok(PageOutcome::redirect(created.url()))
}

/// `GET /catalog/bookinstance/:id/update`
pub async fn update_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let (instance, books) = tokio::try_join!(
        state.store.book_instance(id),
        state.store.book_titles()
    )?;

    let instance = instance
        .ok_or_else(|| AppError::NotFound(format!("Book copy with id {} not found", id)))?;

    Ok(PageOutcome::render(views::book_instances::form_page(
        "Update Book Instance",
        &BookInstanceForm::from_instance(&instance),
        &books,
        &[],
    )))
}

/// `POST /catalog/bookinstance/:id/update`
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<PageOutcome> {
    let form = form.trimmed();
    let errors = form.validate_form();
    if !errors.is_empty() {
        let books = state.store.book_titles().await?;
        return Ok(PageOutcome::render(views::book_instances::form_page(
            "Update Book Instance",
            &form,
            &books,
            &errors,
        )));
    }

    let updated = state
        .store
        .replace_book_instance(id, &form.payload()?)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book copy with id {} not found", id)))?;

    Ok(PageOutcome::redirect(updated.url()))
}

/// `GET /catalog/bookinstance/:id/delete`
pub async fn delete_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    // A copy has no dependents, so the confirmation view needs one read
    let Some(instance) = state.store.book_instance(id).await? else {
        return Ok(PageOutcome::redirect("/catalog/bookinstances"));
    };

    Ok(PageOutcome::render(views::book_instances::delete_page(
        &instance,
    )))
}

/// `POST /catalog/bookinstance/:id/delete`
pub async fn delete_post(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> AppResult<PageOutcome> {
    let id = form.target_id()?;
    if state.store.book_instance(id).await?.is_none() {
        return Ok(PageOutcome::redirect("/catalog/bookinstances"));
    }

    state.store.delete_book_instance(id).await?;
    Ok(PageOutcome::redirect("/catalog/bookinstances"))
}
