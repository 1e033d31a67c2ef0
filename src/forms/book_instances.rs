//! Book instance (copy) form and its field rules

use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{BookInstance, CopyStatus, NewBookInstance};

use super::{collect_errors, escape_html, parse_date, parse_id, FieldError};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookInstanceForm {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Book must be specified"),
        custom(
            function = "crate::forms::selected_id",
            message = "A valid book must be selected"
        )
    )]
    pub book: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Imprint must be specified"))]
    pub imprint: String,
    #[serde(default)]
    #[validate(custom(function = "crate::forms::iso_date", message = "Invalid date"))]
    pub due_back: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Status must be specified"),
        custom(function = "crate::forms::copy_status", message = "Invalid status")
    )]
    pub status: String,
}

impl BookInstanceForm {
    const FIELD_ORDER: [&'static str; 4] = ["book", "imprint", "due_back", "status"];

    /// Pre-populate the update form from an existing copy
    pub fn from_instance(instance: &BookInstance) -> Self {
        Self {
            book: instance.book_id.to_string(),
            imprint: instance.imprint.clone(),
            due_back: instance.due_back_ymd(),
            status: instance.status.as_str().to_string(),
        }
    }

    pub fn trimmed(mut self) -> Self {
        self.book = self.book.trim().to_string();
        self.imprint = self.imprint.trim().to_string();
        self.due_back = self.due_back.trim().to_string();
        self.status = self.status.trim().to_string();
        self
    }

    pub fn validate_form(&self) -> Vec<FieldError> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_errors(&errors, &Self::FIELD_ORDER),
        }
    }

    /// Convert into a typed payload. An omitted due-back date defaults to
    /// today, mirroring the schema default.
    pub fn payload(&self) -> AppResult<NewBookInstance> {
        let status = CopyStatus::parse(&self.status)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid status '{}'", self.status)))?;
        Ok(NewBookInstance {
            book_id: parse_id(&self.book)?,
            imprint: escape_html(&self.imprint),
            status,
            due_back: parse_date(&self.due_back).unwrap_or_else(|| Utc::now().date_naive()),
        })
    }
}
