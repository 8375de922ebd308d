//! Article record and draft model.
//!
//! # Responsibility
//! - Define the canonical article record and its JSON shape.
//! - Validate drafts before they are handed to a store.
//!
//! # Invariants
//! - `ArticleId` is opaque: any non-empty string loaded from storage is kept
//!   verbatim, freshly generated ids are simple-form v4 UUIDs.
//! - `date` is an ISO-8601 calendar date (`YYYY-MM-DD`) without timezone.
//! - The store does not re-validate; `ArticleDraft::validate()` is the gate.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("valid date regex")
});

/// Opaque identifier assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArticleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ArticleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for ArticleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content fields submitted by callers for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub summary: String,
    /// ISO-8601 calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub publisher: String,
}

/// Stored article record.
///
/// Field order and names match the persisted JSON array entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub summary: String,
    pub date: String,
    pub publisher: String,
}

/// Field named by a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleField {
    Title,
    Summary,
    Date,
    Publisher,
}

impl ArticleField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Summary => "summary",
            Self::Date => "date",
            Self::Publisher => "publisher",
        }
    }
}

/// Draft rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    /// Field is empty after trimming.
    Required(ArticleField),
    /// `date` is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required", field.as_str()),
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for ArticleValidationError {}

impl ArticleDraft {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        date: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            date: date.into(),
            publisher: publisher.into(),
        }
    }

    /// Checks the draft the way the submission form does.
    ///
    /// Fields are checked in display order; the first failure is returned.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.title.trim().is_empty() {
            return Err(ArticleValidationError::Required(ArticleField::Title));
        }
        if self.summary.trim().is_empty() {
            return Err(ArticleValidationError::Required(ArticleField::Summary));
        }
        if self.date.trim().is_empty() {
            return Err(ArticleValidationError::Required(ArticleField::Date));
        }
        if !ISO_DATE_RE.is_match(&self.date) {
            return Err(ArticleValidationError::InvalidDate(self.date.clone()));
        }
        if self.publisher.trim().is_empty() {
            return Err(ArticleValidationError::Required(ArticleField::Publisher));
        }
        Ok(())
    }

    /// Builds the stored record under the given identity.
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            summary: self.summary,
            date: self.date,
            publisher: self.publisher,
        }
    }
}

impl Article {
    /// Returns the content fields without identity.
    pub fn draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            summary: self.summary.clone(),
            date: self.date.clone(),
            publisher: self.publisher.clone(),
        }
    }
}
