//! Author form and its field rules

use serde::Deserialize;
use validator::Validate;

use crate::models::{Author, NewAuthor};

use super::{collect_errors, escape_html, parse_date, FieldError};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AuthorForm {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "First name must be specified."),
        custom(
            function = "crate::forms::alphanumeric",
            message = "First name has non-alphanumeric characters."
        )
    )]
    pub first_name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Family name must be specified."),
        custom(
            function = "crate::forms::alphanumeric",
            message = "Family name has non-alphanumeric characters."
        )
    )]
    pub family_name: String,
    #[serde(default)]
    #[validate(custom(function = "crate::forms::iso_date", message = "Invalid date of birth"))]
    pub date_of_birth: String,
    #[serde(default)]
    #[validate(custom(function = "crate::forms::iso_date", message = "Invalid date of death"))]
    pub date_of_death: String,
}

impl AuthorForm {
    const FIELD_ORDER: [&'static str; 4] = [
        "first_name",
        "family_name",
        "date_of_birth",
        "date_of_death",
    ];

    /// Pre-populate the update form from an existing author
    pub fn from_author(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author.born_ymd(),
            date_of_death: author.died_ymd(),
        }
    }

    /// Trim whitespace from every field
    pub fn trimmed(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.family_name = self.family_name.trim().to_string();
        self.date_of_birth = self.date_of_birth.trim().to_string();
        self.date_of_death = self.date_of_death.trim().to_string();
        self
    }

    /// Run every field rule, collecting all errors
    pub fn validate_form(&self) -> Vec<FieldError> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_errors(&errors, &Self::FIELD_ORDER),
        }
    }

    /// Convert into a typed payload. Call only after `validate_form`
    /// returned no errors.
    pub fn payload(&self) -> NewAuthor {
        NewAuthor {
            first_name: escape_html(&self.first_name),
            family_name: escape_html(&self.family_name),
            date_of_birth: parse_date(&self.date_of_birth),
            date_of_death: parse_date(&self.date_of_death),
        }
    }
}
