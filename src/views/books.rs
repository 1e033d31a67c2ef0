//! Book pages

use maud::{html, Markup};

use crate::forms::{BookForm, FieldError};
use crate::models::{Author, Book, BookInstance, BookSummary, Genre};

use super::{errors_list, layout};

pub fn list_page(books: &[BookSummary]) -> Markup {
    layout(
        "Book List",
        html! {
            h1 { "Book List" }
            @if books.is_empty() {
                p { "There are no books." }
            } @else {
                ul {
                    @for book in books {
                        li {
                            a href=(book.url()) { (book.title) }
                            @if let Some(author_name) = &book.author_name {
                                " (" (author_name) ")"
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail_page(book: &Book, copies: &[BookInstance]) -> Markup {
    layout(
        "Book Detail",
        html! {
            h1 { "Title: " (book.title) }
            @if let Some(author) = &book.author {
                p { strong { "Author: " } a href=(author.url()) { (author.name()) } }
            }
            p { strong { "Summary: " } (book.summary) }
            p { strong { "ISBN: " } (book.isbn) }
            p {
                strong { "Genre: " }
                @for (i, genre) in book.genres.iter().enumerate() {
                    @if i > 0 { ", " }
                    a href=(genre.url()) { (genre.name) }
                }
            }
            div {
                a href=(format!("{}/update", book.url())) { "Update book" }
                " | "
                a href=(format!("{}/delete", book.url())) { "Delete book" }
            }
            h2 { "Copies" }
            @if copies.is_empty() {
                p { "This book has no copies in the library." }
            } @else {
                @for copy in copies {
                    div {
                        p { (copy.status) }
                        p { strong { "Imprint: " } (copy.imprint) }
                        p { strong { "Due back: " } (copy.due_back_formatted()) }
                        p { a href=(copy.url()) { "View copy" } }
                        hr;
                    }
                }
            }
        },
    )
}

pub fn form_page(
    title: &str,
    form: &BookForm,
    authors: &[Author],
    genres: &[Genre],
    errors: &[FieldError],
) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            (errors_list(errors))
            form method="POST" {
                label for="title" { "Title:" }
                input id="title" type="text" name="title" value=(form.title);
                label for="author" { "Author:" }
                select id="author" name="author" {
                    option value="" disabled[true] selected[form.author.is_empty()] { "Select an author" }
                    @for author in authors {
                        option value=(author.id) selected[form.author == author.id.to_string()] {
                            (author.name())
                        }
                    }
                }
                label for="summary" { "Summary:" }
                textarea id="summary" name="summary" { (form.summary) }
                label for="isbn" { "ISBN:" }
                input id="isbn" type="text" name="isbn" value=(form.isbn);
                fieldset {
                    legend { "Genre" }
                    @for genre in genres {
                        label {
                            input type="checkbox" name="genre" value=(genre.id) checked[form.has_genre(genre.id)];
                            (genre.name)
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
        },
    )
}

pub fn delete_page(book: &Book, copies: &[BookInstance]) -> Markup {
    layout(
        "Delete Book",
        html! {
            h1 { "Delete Book: " (book.title) }
            @if copies.is_empty() {
                p { "Do you really want to delete this book?" }
                form method="POST" action=(format!("{}/delete", book.url())) {
                    input type="hidden" name="id" value=(book.id);
                    button type="submit" { "Delete" }
                }
            } @else {
                p { "Delete the following copies before attempting to delete this book:" }
                @for copy in copies {
                    div {
                        p { strong { "Imprint: " } (copy.imprint) }
                        p { a href=(copy.url()) { "View copy" } }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CopyStatus;
    use chrono::NaiveDate;

    fn book() -> Book {
        Book {
            id: 4,
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
            genres: vec![Genre {
                id: 2,
                name: "Fantasy".to_string(),
            }],
        }
    }

    #[test]
    fn detail_page_shows_author_and_genres() {
        let html = detail_page(&book(), &[]).into_string();
        assert!(html.contains("Tolkien, J.R.R."));
        assert!(html.contains(r#"href="/catalog/genre/2""#));
        assert!(html.contains("This book has no copies in the library."));
    }

    #[test]
    fn detail_page_lists_copies() {
        let copies = vec![BookInstance {
            id: 8,
            book_id: 4,
            imprint: "Allen & Unwin, 1937".to_string(),
            status: CopyStatus::Available,
            due_back: NaiveDate::from_ymd_opt(2014, 10, 6).unwrap(),
            book_title: None,
        }];
        let html = detail_page(&book(), &copies).into_string();
        assert!(html.contains("Available"));
        assert!(html.contains(r#"href="/catalog/bookinstance/8""#));
    }

    #[test]
    fn form_page_marks_selected_author_and_checked_genres() {
        let form = BookForm::from_book(&book());
        let authors = vec![book().author.unwrap()];
        let genres = vec![
            Genre {
                id: 2,
                name: "Fantasy".to_string(),
            },
            Genre {
                id: 3,
                name: "Poetry".to_string(),
            },
        ];
        let html = form_page("Update Book", &form, &authors, &genres, &[]).into_string();
        assert!(html.contains(r#"<option value="1" selected>"#));
        assert!(html.contains(r#"value="2" checked"#));
        assert!(!html.contains(r#"value="3" checked"#));
    }
}
