//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full author model from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Create/replace author payload, produced by form validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display name, "Family, First". Empty when either part is missing.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Lifespan string such as "Jun 5, 1900 - Feb 16, 1975"; unknown dates
    /// are left blank.
    pub fn lifespan(&self) -> String {
        match (self.date_of_birth, self.date_of_death) {
            (Some(b), Some(d)) => format!("{} - {}", medium_date(b), medium_date(d)),
            (Some(b), None) => format!("{} -", medium_date(b)),
            (None, Some(d)) => format!("- {}", medium_date(d)),
            (None, None) => String::new(),
        }
    }

    /// Canonical detail URL
    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }

    /// Date of birth as "YYYY-MM-DD" for form values, empty when unknown
    pub fn born_ymd(&self) -> String {
        self.date_of_birth.map(ymd).unwrap_or_default()
    }

    /// Date of death as "YYYY-MM-DD" for form values, empty when unknown
    pub fn died_ymd(&self) -> String {
        self.date_of_death.map(ymd).unwrap_or_default()
    }
}

/// Medium date format, e.g. "Oct 6, 2014"
pub(crate) fn medium_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub(crate) fn ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
