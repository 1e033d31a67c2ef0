//! Book form and its field rules

use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{Book, NewBook};

use super::{collect_errors, escape_html, parse_id, FieldError};

/// Raw book form. `genre` carries the checked genre ids, one form entry per
/// checkbox, which is why this form must be extracted with
/// `axum_extra::extract::Form`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title must not be empty."))]
    pub title: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Author must not be empty."),
        custom(
            function = "crate::forms::selected_id",
            message = "A valid author must be selected."
        )
    )]
    pub author: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Summary must not be empty."))]
    pub summary: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "ISBN must not be empty."))]
    pub isbn: String,
    #[serde(default)]
    #[validate(custom(function = "crate::forms::id_list", message = "Invalid genre selection."))]
    pub genre: Vec<String>,
}

impl BookForm {
    const FIELD_ORDER: [&'static str; 5] = ["title", "author", "summary", "isbn", "genre"];

    /// Pre-populate the update form from an existing book
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author_id.to_string(),
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
            genre: book.genres.iter().map(|g| g.id.to_string()).collect(),
        }
    }

    pub fn trimmed(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.author = self.author.trim().to_string();
        self.summary = self.summary.trim().to_string();
        self.isbn = self.isbn.trim().to_string();
        for id in &mut self.genre {
            *id = id.trim().to_string();
        }
        self
    }

    pub fn validate_form(&self) -> Vec<FieldError> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_errors(&errors, &Self::FIELD_ORDER),
        }
    }

    pub fn payload(&self) -> AppResult<NewBook> {
        Ok(NewBook {
            title: escape_html(&self.title),
            author_id: parse_id(&self.author)?,
            summary: escape_html(&self.summary),
            isbn: escape_html(&self.isbn),
            genre_ids: self
                .genre
                .iter()
                .map(|id| parse_id(id))
                .collect::<AppResult<Vec<i32>>>()?,
        })
    }

    /// Whether a genre checkbox should be rendered checked
    pub fn has_genre(&self, genre_id: i32) -> bool {
        let id = genre_id.to_string();
        self.genre.iter().any(|g| *g == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> BookForm {
        BookForm {
            title: "A Wizard of Earthsea".to_string(),
            author: "3".to_string(),
            summary: "Ged learns the true names of things.".to_string(),
            isbn: "9780547773742".to_string(),
            genre: vec!["1".to_string(), "4".to_string()],
        }
    }

    #[test]
    fn valid_form_produces_payload() {
        let form = valid_form();
        assert!(form.validate_form().is_empty());
        let payload = form.payload().unwrap();
        assert_eq!(payload.author_id, 3);
        assert_eq!(payload.genre_ids, vec![1, 4]);
    }

    #[test]
    fn missing_author_selection_is_one_error() {
        let mut form = valid_form();
        form.author = String::new();
        let errors = form.validate_form();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "author");
        assert_eq!(errors[0].message, "Author must not be empty.");
    }

    #[test]
    fn non_numeric_genre_id_is_rejected() {
        let mut form = valid_form();
        form.genre = vec!["1".to_string(), "fantasy".to_string()];
        let errors = form.validate_form();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "genre");
    }

    #[test]
    fn no_genres_is_valid() {
        let mut form = valid_form();
        form.genre.clear();
        assert!(form.validate_form().is_empty());
        assert!(form.payload().unwrap().genre_ids.is_empty());
    }

    #[test]
    fn has_genre_matches_checked_ids() {
        let form = valid_form();
        assert!(form.has_genre(1));
        assert!(form.has_genre(4));
        assert!(!form.has_genre(2));
    }
}
