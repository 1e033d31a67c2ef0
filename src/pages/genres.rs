//! Genre page pipelines

use axum::{
    extract::{Path, State},
    Form,
};

use crate::{
    error::{AppError, AppResult},
    forms::{DeleteForm, GenreForm},
    views,
    AppState,
};

use super::PageOutcome;

/// `GET /catalog/genres`
pub async fn list(State(state): State<AppState>) -> AppResult<PageOutcome> {
    let genres = state.store.genres().await?;
    Ok(PageOutcome::render(views::genres::list_page(&genres)))
}

/// `GET /catalog/genre/:id`
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let (genre, books) =
        tokio::try_join!(state.store.genre(id), state.store.books_by_genre(id))?;

    let genre =
        genre.ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))?;

    Ok(PageOutcome::render(views::genres::detail_page(
        &genre, &books,
    )))
}

/// `GET /catalog/genre/create`
pub async fn create_get() -> PageOutcome {
    PageOutcome::render(views::genres::form_page(
        "Create Genre",
        &GenreForm::default(),
        &[],
    ))
}

/// `POST /catalog/genre/create`
///
/// Genre names are unique by convention: when a genre with the same name
/// already exists, redirect to it instead of creating a duplicate.
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<PageOutcome> {
    let form = form.trimmed();
    let errors = form.validate_form();
    if !errors.is_empty() {
        return Ok(PageOutcome::render(views::genres::form_page(
            "Create Genre",
            &form,
            &errors,
        )));
    }

    let genre = form.payload();
    if let Some(existing) = state.store.genre_by_name(&genre.name).await? {
        return Ok(PageOutcome::redirect(existing.url()));
    }

    let created = state.store.create_genre(&genre).await?;
    Ok(PageOutcome::redirect(created.url()))
}

/// `GET /catalog/genre/:id/update`
pub async fn update_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let genre = state
        .store
        .genre(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))?;

    Ok(PageOutcome::render(views::genres::form_page(
        &format!("Update Genre: {}", genre.name),
        &GenreForm::from_genre(&genre),
        &[],
    )))
}

/// `POST /catalog/genre/:id/update`
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<GenreForm>,
) -> AppResult<PageOutcome> {
    let form = form.trimmed();
    let errors = form.validate_form();
    if !errors.is_empty() {
        return Ok(PageOutcome::render(views::genres::form_page(
            "Update Genre",
            &form,
            &errors,
        )));
    }

    let updated = state
        .store
        .replace_genre(id, &form.payload())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))?;

    Ok(PageOutcome::redirect(updated.url()))
}

/// `GET /catalog/genre/:id/delete`
pub async fn delete_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<PageOutcome> {
    let (genre, books) =
        tokio::try_join!(state.store.genre(id), state.store.books_by_genre(id))?;

    let Some(genre) = genre else {
        return Ok(PageOutcome::redirect("/catalog/genres"));
    };

    Ok(PageOutcome::render(views::genres::delete_page(
        &genre, &books,
    )))
}

/// `POST /catalog/genre/:id/delete`
///
/// Deletion is refused while books still reference the genre.
pub async fn delete_post(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> AppResult<PageOutcome> {
    let id = form.target_id()?;
    let (genre, books) =
        tokio::try_join!(state.store.genre(id), state.store.books_by_genre(id))?;

    let Some(genre) = genre else {
        return Ok(PageOutcome::redirect("/catalog/genres"));
    };

    if !books.is_empty() {
        return Ok(PageOutcome::render(views::genres::delete_page(
            &genre, &books,
        )));
    }

    state.store.delete_genre(id).await?;
    Ok(PageOutcome::redirect("/catalog/genres"))
}
