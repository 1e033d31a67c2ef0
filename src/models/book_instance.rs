//! Book instance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::author::{medium_date, ymd};

/// Loan status of a physical copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "copy_status")]
pub enum CopyStatus {
    Available,
    Maintenance,
    Loaned,
    Reserved,
}

impl CopyStatus {
    pub const ALL: [CopyStatus; 4] = [
        CopyStatus::Available,
        CopyStatus::Maintenance,
        CopyStatus::Loaned,
        CopyStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CopyStatus::Available => "Available",
            CopyStatus::Maintenance => "Maintenance",
            CopyStatus::Loaned => "Loaned",
            CopyStatus::Reserved => "Reserved",
        }
    }

    /// Parse a form value. Only the exact variant names are accepted.
    pub fn parse(value: &str) -> Option<CopyStatus> {
        match value {
            "Available" => Some(CopyStatus::Available),
            "Maintenance" => Some(CopyStatus::Maintenance),
            "Loaned" => Some(CopyStatus::Loaned),
            "Reserved" => Some(CopyStatus::Reserved),
            _ => None,
        }
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full book instance model from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: i32,
    pub imprint: String,
    pub status: CopyStatus,
    pub due_back: NaiveDate,
    // Populated when queried with a JOIN on books, None otherwise
    #[sqlx(default)]
    #[serde(default)]
    pub book_title: Option<String>,
}

/// Create/replace book instance payload, produced by form validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookInstance {
    pub book_id: i32,
    pub imprint: String,
    pub status: CopyStatus,
    pub due_back: NaiveDate,
}

impl BookInstance {
    /// Canonical detail URL
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }

    /// Human-formatted due date, e.g. "Oct 6, 2014"
    pub fn due_back_formatted(&self) -> String {
        medium_date(self.due_back)
    }

    /// Due date as "YYYY-MM-DD" for form values
    pub fn due_back_ymd(&self) -> String {
        ymd(self.due_back)
    }
}
