//! Genre pages

use maud::{html, Markup};

use crate::forms::{FieldError, GenreForm};
use crate::models::{BookSummary, Genre};

use super::{errors_list, layout};

pub fn list_page(genres: &[Genre]) -> Markup {
    layout(
        "Genre List",
        html! {
            h1 { "Genre List" }
            @if genres.is_empty() {
                p { "There are no genres." }
            } @else {
                ul {
                    @for genre in genres {
                        li { a href=(genre.url()) { (genre.name) } }
                    }
                }
            }
        },
    )
}

pub fn detail_page(genre: &Genre, books: &[BookSummary]) -> Markup {
    layout(
        "Genre Detail",
        html! {
            h1 { "Genre: " (genre.name) }
            div {
                a href=(format!("{}/update", genre.url())) { "Update genre" }
                " | "
                a href=(format!("{}/delete", genre.url())) { "Delete genre" }
            }
            h2 { "Books" }
            @if books.is_empty() {
                p { "This genre has no books." }
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

pub fn form_page(title: &str, form: &GenreForm, errors: &[FieldError]) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            (errors_list(errors))
            form method="POST" {
                label for="name" { "Genre:" }
                input id="name" type="text" name="name" value=(form.name) placeholder="Fantasy, Poetry etc.";
                button type="submit" { "Submit" }
            }
        },
    )
}

pub fn delete_page(genre: &Genre, books: &[BookSummary]) -> Markup {
    layout(
        "Delete Genre",
        html! {
            h1 { "Delete Genre: " (genre.name) }
            @if books.is_empty() {
                p { "Do you really want to delete this genre?" }
                form method="POST" action=(format!("{}/delete", genre.url())) {
                    input type="hidden" name="id" value=(genre.id);
                    button type="submit" { "Delete" }
                }
            } @else {
                p { "Delete the following books before attempting to delete this genre:" }
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
