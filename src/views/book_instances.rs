//! Book instance (copy) pages

use maud::{html, Markup};

use crate::forms::{BookInstanceForm, FieldError};
use crate::models::{BookInstance, BookTitle, CopyStatus};

use super::{errors_list, layout};

pub fn list_page(instances: &[BookInstance]) -> Markup {
    layout(
        "Book Instance List",
        html! {
            h1 { "Book Instance List" }
            @if instances.is_empty() {
                p { "There are no book copies in this library." }
            } @else {
                ul {
                    @for copy in instances {
                        li {
                            a href=(copy.url()) {
                                @if let Some(title) = &copy.book_title { (title) " : " }
                                (copy.imprint)
                            }
                            " - " (copy.status)
                        }
                    }
                }
            }
        },
    )
}

pub fn detail_page(instance: &BookInstance) -> Markup {
    let title = instance.book_title.as_deref().unwrap_or("Book");
    layout(
        &format!("Copy: {}", title),
        html! {
            h1 { "Copy: " (title) }
            p {
                strong { "Book: " }
                a href=(format!("/catalog/book/{}", instance.book_id)) { (title) }
            }
            p { strong { "Imprint: " } (instance.imprint) }
            p { strong { "Status: " } (instance.status) }
            p { strong { "Due back: " } (instance.due_back_formatted()) }
            div {
                a href=(format!("{}/update", instance.url())) { "Update book instance" }
                " | "
                a href=(format!("{}/delete", instance.url())) { "Delete book instance" }
            }
        },
    )
}

pub fn form_page(
    title: &str,
    form: &BookInstanceForm,
    books: &[BookTitle],
    errors: &[FieldError],
) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            (errors_list(errors))
            form method="POST" {
                label for="book" { "Book:" }
                select id="book" name="book" {
                    option value="" disabled[true] selected[form.book.is_empty()] { "Select a book" }
                    @for book in books {
                        option value=(book.id) selected[form.book == book.id.to_string()] {
                            (book.title)
                        }
                    }
                }
                label for="imprint" { "Imprint:" }
                input id="imprint" type="text" name="imprint" value=(form.imprint);
                label for="due_back" { "Date when book available:" }
                input id="due_back" type="date" name="due_back" value=(form.due_back);
                label for="status" { "Status:" }
                select id="status" name="status" {
                    @for status in CopyStatus::ALL {
                        option value=(status.as_str()) selected[form.status == status.as_str()] {
                            (status)
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
        },
    )
}

pub fn delete_page(instance: &BookInstance) -> Markup {
    layout(
        "Delete Book Instance",
        html! {
            h1 { "Delete Book Instance" }
            p { strong { "Imprint: " } (instance.imprint) }
            p { "Do you really want to delete this copy?" }
            form method="POST" action=(format!("{}/delete", instance.url())) {
                input type="hidden" name="id" value=(instance.id);
                button type="submit" { "Delete" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instance() -> BookInstance {
        BookInstance {
            id: 8,
            book_id: 4,
            imprint: "Allen & Unwin, 1937".to_string(),
            status: CopyStatus::Loaned,
            due_back: NaiveDate::from_ymd_opt(2014, 10, 6).unwrap(),
            book_title: Some("The Hobbit".to_string()),
        }
    }

    #[test]
    fn detail_page_shows_book_link_and_due_date() {
        let html = detail_page(&instance()).into_string();
        assert!(html.contains("Copy: The Hobbit"));
        assert!(html.contains(r#"href="/catalog/book/4""#));
        assert!(html.contains("Oct 6, 2014"));
    }

    #[test]
    fn form_page_marks_selected_book_and_status() {
        let form = BookInstanceForm::from_instance(&instance());
        let books = vec![
            BookTitle {
                id: 4,
                title: "The Hobbit".to_string(),
            },
            BookTitle {
                id: 5,
                title: "Emma".to_string(),
            },
        ];
        let html = form_page("Update Book Instance", &form, &books, &[]).into_string();
        assert!(html.contains(r#"<option value="4" selected>"#));
        assert!(html.contains(r#"<option value="Loaned" selected>"#));
        assert!(!html.contains(r#"<option value="5" selected>"#));
    }

    #[test]
    fn delete_page_posts_hidden_id() {
        let html = delete_page(&instance()).into_string();
        assert!(html.contains(r#"name="id""#));
        assert!(html.contains(r#"value="8""#));
    }
}
