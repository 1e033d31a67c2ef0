//! HTML views.
//!
//! Every function here is a pure mapping from already-fetched values to
//! markup. Decisions about what to show live in the page pipelines; views
//! only format. Maud escapes all interpolated values.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;

use axum::http::StatusCode;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::forms::FieldError;
use crate::store::CatalogCounts;

const STYLESHEET: &str = r#"
body { font-family: sans-serif; margin: 0; }
.container { display: flex; min-height: 100vh; }
.sidebar { width: 14rem; padding: 1rem; background: #f4f4f4; }
.sidebar ul { list-style: none; padding: 0; }
.sidebar li { margin: 0.4rem 0; }
.content { flex: 1; padding: 1rem 2rem; }
.form-errors { color: #b00020; }
label { display: block; margin-top: 0.6rem; }
input, select, textarea { width: 20rem; max-width: 100%; }
"#;

/// Common page frame: sidebar navigation plus the rendered content
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div class="container" {
                    nav class="sidebar" {
                        ul {
                            li { a href="/catalog" { "Home" } }
                            li { a href="/catalog/books" { "All books" } }
                            li { a href="/catalog/authors" { "All authors" } }
                            li { a href="/catalog/genres" { "All genres" } }
                            li { a href="/catalog/bookinstances" { "All book instances" } }
                        }
                        hr;
                        ul {
                            li { a href="/catalog/author/create" { "Create new author" } }
                            li { a href="/catalog/genre/create" { "Create new genre" } }
                            li { a href="/catalog/book/create" { "Create new book" } }
                            li { a href="/catalog/bookinstance/create" { "Create new book instance" } }
                        }
                    }
                    main class="content" { (content) }
                }
            }
        }
    }
}

/// Home page with the catalog record counts
pub fn home_page(counts: &CatalogCounts) -> Markup {
    layout(
        "Local Library Home",
        html! {
            h1 { "Local Library Home" }
            p { "Welcome to the library catalog." }
            h2 { "Dynamic content" }
            p { "The library has the following record counts:" }
            ul {
                li { strong { "Books: " } (counts.books) }
                li { strong { "Copies: " } (counts.book_instances) }
                li { strong { "Copies available: " } (counts.book_instances_available) }
                li { strong { "Authors: " } (counts.authors) }
                li { strong { "Genres: " } (counts.genres) }
            }
        },
    )
}

/// Failure page rendered by the top-level error surface
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    layout(
        reason,
        html! {
            h1 { (status.as_u16()) " - " (reason) }
            p { (message) }
            p { a href="/catalog" { "Back to the catalog" } }
        },
    )
}

/// Field errors rendered above a form
pub fn errors_list(errors: &[FieldError]) -> Markup {
    html! {
        @if !errors.is_empty() {
            ul class="form-errors" {
                @for error in errors {
                    li { (error.message) }
                }
            }
        }
    }
}
