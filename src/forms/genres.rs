//! Genre form and its field rules

use serde::Deserialize;
use validator::Validate;

use crate::models::{Genre, NewGenre};

use super::{collect_errors, escape_html, FieldError};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenreForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Genre name required"))]
    pub name: String,
}

impl GenreForm {
    const FIELD_ORDER: [&'static str; 1] = ["name"];

    pub fn from_genre(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
        }
    }

    pub fn trimmed(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }

    pub fn validate_form(&self) -> Vec<FieldError> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_errors(&errors, &Self::FIELD_ORDER),
        }
    }

    pub fn payload(&self) -> NewGenre {
        NewGenre {
            name: escape_html(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let form = GenreForm {
            name: "   ".to_string(),
        }
        .trimmed();
        let errors = form.validate_form();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "Genre name required");
    }

    #[test]
    fn payload_escapes_markup() {
        let form = GenreForm {
            name: "Sword & Sorcery".to_string(),
        };
        assert!(form.validate_form().is_empty());
        assert_eq!(form.payload().name, "Sword &amp; Sorcery");
    }
}
