//! Request handler pipelines.
//!
//! One handler per (entity, operation) pair, each following the same shape:
//! parse the request, validate and sanitize form fields, run the dependent
//! reads (concurrently where paired), branch on existence or conflicts, and
//! finish with an explicit outcome. Handlers never mutate shared state; a
//! successful mutation always ends in a redirect so a refresh cannot
//! resubmit the form.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use maud::Markup;

use crate::{error::AppResult, views, AppState};

/// Terminal decision of a page pipeline. Errors travel separately through
/// [`crate::error::AppError`].
#[derive(Debug)]
pub enum PageOutcome {
    /// Respond 200 with a rendered page
    Render(Markup),
    /// Respond with a redirect to the given location
    Redirect(String),
}

impl PageOutcome {
    pub fn render(markup: Markup) -> Self {
        PageOutcome::Render(markup)
    }

    pub fn redirect(to: impl Into<String>) -> Self {
        PageOutcome::Redirect(to.into())
    }
}

impl IntoResponse for PageOutcome {
    fn into_response(self) -> Response {
        match self {
            PageOutcome::Render(markup) => Html(markup.into_string()).into_response(),
            PageOutcome::Redirect(to) => Redirect::to(&to).into_response(),
        }
    }
}

/// `GET /` - the site root just forwards to the catalog
pub async fn home() -> PageOutcome {
    PageOutcome::redirect("/catalog")
}

/// `GET /catalog` - home page with record counts
pub async fn index(State(state): State<AppState>) -> AppResult<PageOutcome> {
    let counts = state.store.counts().await?;
    Ok(PageOutcome::render(views::home_page(&counts)))
}


#[cfg(test)]
mod tests {
    use super::test_support::state;
    use super::*;
    use crate::store::{CatalogCounts, MockCatalogStore};

    #[tokio::test]
    async fn home_redirects_to_catalog() {
        let outcome = home().await;
        assert!(matches!(outcome, PageOutcome::Redirect(ref to) if to == "/catalog"));
    }

    #[tokio::test]
    async fn index_renders_counts() {
        let mut store = MockCatalogStore::new();
        store.expect_counts().times(1).returning(|| {
            Ok(CatalogCounts {
                books: 2,
                book_instances: 3,
                book_instances_available: 1,
                authors: 4,
                genres: 5,
            })
        });

        let outcome = index(state(store)).await.unwrap();
        let PageOutcome::Render(markup) = outcome else {
            panic!("expected a rendered page");
        };
        assert!(markup.into_string().contains("record counts"));
    }
}
