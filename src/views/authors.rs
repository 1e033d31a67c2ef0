//! Author pages

use maud::{html, Markup};

use crate::forms::{AuthorForm, FieldError};
use crate::models::{Author, BookSummary};

use super::{errors_list, layout};

pub fn list_page(authors: &[Author]) -> Markup {
    layout(
        "Author List",
        html! {
            h1 { "Author List" }
            @if authors.is_empty() {
                p { "There are no authors." }
            } @else {
                ul {
                    @for author in authors {
                        li {
                            a href=(author.url()) { (author.name()) }
                            " (" (author.lifespan()) ")"
                        }
                    }
                }
            }
        },
    )
}

pub fn detail_page(author: &Author, books: &[BookSummary]) -> Markup {
    layout(
        "Author Detail",
        html! {
            h1 { "Author: " (author.name()) }
            p { (author.lifespan()) }
            div {
                a href=(format!("{}/update", author.url())) { "Update author" }
                " | "
                a href=(format!("{}/delete", author.url())) { "Delete author" }
            }
            h2 { "Books" }
            @if books.is_empty() {
                p { "This author has no books." }
            } @else {
                dl {
                    @for book in books {
                        dt { a href=(book.url()) { (book.title) } }
                        dd { (book.summary) }
                    }
                }
            }
        },
    )
}

pub fn form_page(title: &str, form: &AuthorForm, errors: &[FieldError]) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            (errors_list(errors))
            form method="POST" {
                label for="first_name" { "First name:" }
                input id="first_name" type="text" name="first_name" value=(form.first_name);
                label for="family_name" { "Family name:" }
                input id="family_name" type="text" name="family_name" value=(form.family_name);
                label for="date_of_birth" { "Date of birth:" }
                input id="date_of_birth" type="date" name="date_of_birth" value=(form.date_of_birth);
                label for="date_of_death" { "Date of death:" }
                input id="date_of_death" type="date" name="date_of_death" value=(form.date_of_death);
                button type="submit" { "Submit" }
            }
        },
    )
}

/// Delete confirmation. When the author still has books, they are listed as
/// blockers and the pipeline refuses the deletion.
pub fn delete_page(author: &Author, books: &[BookSummary]) -> Markup {
    layout(
        "Delete Author",
        html! {
            h1 { "Delete Author: " (author.name()) }
            @if books.is_empty() {
                p { "Do you really want to delete this author?" }
                form method="POST" action=(format!("{}/delete", author.url())) {
                    input type="hidden" name="id" value=(author.id);
                    button type="submit" { "Delete" }
                }
            } @else {
                p { "Delete the following books before attempting to delete this author:" }
                dl {
                    @for book in books {
                        dt { a href=(book.url()) { (book.title) } }
                        dd { (book.summary) }
                    }
                }
            }
        },
    )
}
