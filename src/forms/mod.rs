//! Form parsing, sanitization, and validation.
//!
//! Each entity has a raw form type whose fields are the strings exactly as
//! posted. A form is first trimmed, then validated field by field — every
//! rule runs and every error is collected, so the user sees all invalid
//! fields at once — and only then converted into a typed payload for the
//! store. Markup-significant characters are escaped when the payload is
//! built.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{ValidationError, ValidationErrors};

use crate::error::{AppError, AppResult};
use crate::models::CopyStatus;

pub use authors::AuthorForm;
pub use book_instances::BookInstanceForm;
pub use books::BookForm;
pub use genres::GenreForm;

/// A single failed field rule, rendered next to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Flatten [`ValidationErrors`] into a list ordered by the form's declared
/// field order.
pub(crate) fn collect_errors(
    errors: &ValidationErrors,
    order: &[&'static str],
) -> Vec<FieldError> {
    let by_field = errors.field_errors();
    let mut out = Vec::new();
    for &field in order {
        if let Some(list) = by_field.get(field) {
            for error in list.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                out.push(FieldError { field, message });
            }
        }
    }
    out
}

/// Escape markup-significant characters before persisting a field
pub(crate) fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parse an optional ISO-8601 date field; empty means absent
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parse a validated id field
pub(crate) fn parse_id(value: &str) -> AppResult<i32> {
    value
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid id '{}'", value)))
}

// --- custom field rules -----------------------------------------------------
//
// Each rule accepts the empty string: "required" is expressed separately by
// a length rule so an empty field produces exactly one error.

pub fn alphanumeric(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_alphanumeric()) {
        Ok(())
    } else {
        Err(ValidationError::new("alphanumeric"))
    }
}

pub fn iso_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || parse_date(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("iso_date"))
    }
}

pub fn selected_id(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.parse::<i32>().map_or(false, |id| id >= 0) {
        Ok(())
    } else {
        Err(ValidationError::new("selected_id"))
    }
}

pub fn copy_status(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || CopyStatus::parse(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("copy_status"))
    }
}

pub fn id_list(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|v| v.parse::<i32>().is_ok()) {
        Ok(())
    } else {
        Err(ValidationError::new("id_list"))
    }
}

/// Body of every delete confirmation form. The target id is taken from the
/// posted form, not the URL, so the confirmation view controls what gets
/// deleted.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub id: String,
}

impl DeleteForm {
    pub fn target_id(&self) -> AppResult<i32> {
        parse_id(self.id.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"war & peace"</b> 'n'/"#),
            "&lt;b&gt;&quot;war &amp; peace&quot;&lt;&#x2F;b&gt; &#x27;n&#x27;&#x2F;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn iso_date_accepts_only_iso_8601() {
        assert!(iso_date("").is_ok());
        assert!(iso_date("2020-02-29").is_ok());
        assert!(iso_date("06/10/2014").is_err());
        assert!(iso_date("2021-02-29").is_err());
        assert!(iso_date("yesterday").is_err());
    }

    #[test]
    fn selected_id_requires_digits() {
        assert!(selected_id("").is_ok());
        assert!(selected_id("42").is_ok());
        assert!(selected_id("abc").is_err());
        assert!(selected_id("4e2").is_err());
    }

    #[test]
    fn delete_form_parses_body_id() {
        let form = DeleteForm {
            id: " 17 ".to_string(),
        };
        assert_eq!(form.target_id().unwrap(), 17);

        let bad = DeleteForm {
            id: "droptable".to_string(),
        };
        assert!(bad.target_id().is_err());
    }
}
