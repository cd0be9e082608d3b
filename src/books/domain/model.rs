use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use crate::books::domain::Book;
use crate::core::domain::{Identifiable, Versioned};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Filterable;
use crate::utils::date::serializer;

/// Physical state of a printed copy, improved one step at a time by repair.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Condition {
    New,
    Good,
    Poor,
}

impl Condition {
    pub fn repaired(self) -> Condition {
        match self {
            Condition::Poor => Condition::Good,
            Condition::Good | Condition::New => Condition::New,
        }
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "new" => Condition::New,
            "poor" => Condition::Poor,
            _ => Condition::Good,
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Condition::New => write!(f, "new"),
            Condition::Good => write!(f, "good"),
            Condition::Poor => write!(f, "poor"),
        }
    }
}

/// Variant specific part of a catalog item.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BookFormat {
    Printed {
        pages: u32,
        condition: Condition,
    },
    Electronic {
        file_size_mb: f64,
        format: String,
    },
}

impl Display for BookFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookFormat::Printed { pages, condition } => {
                write!(f, "{} pages, condition: {}", pages, condition)
            }
            BookFormat::Electronic { file_size_mb, format } => {
                write!(f, "{}MB, format: {}", file_size_mb, format)
            }
        }
    }
}

// BookEntity abstracts a single catalog item. Titles are not unique, the
// generated book_id is what borrowed collections refer to.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    book_id: String,
    version: i64,
    title: String,
    author: String,
    year: i32,
    book_status: BookStatus,
    format: BookFormat,
    #[serde(with = "serializer")]
    created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn printed(title: &str, author: &str, year: i32, pages: u32, condition: Condition) -> LibraryResult<Self> {
        if pages == 0 {
            return Err(LibraryError::validation(
                format!("printed book {} must have pages", title).as_str(), Some("400".to_string())));
        }
        Ok(Self::build(title, author, year, BookFormat::Printed { pages, condition }))
    }

    pub fn electronic(title: &str, author: &str, year: i32, file_size_mb: f64, format: &str) -> LibraryResult<Self> {
        if !file_size_mb.is_finite() || file_size_mb < 0.0 {
            return Err(LibraryError::validation(
                format!("ebook {} has invalid file size {}", title, file_size_mb).as_str(), Some("400".to_string())));
        }
        Ok(Self::build(title, author, year, BookFormat::Electronic { file_size_mb, format: format.to_string() }))
    }

    fn build(title: &str, author: &str, year: i32, format: BookFormat) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            year,
            book_status: BookStatus::Available,
            format,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // another physical copy with the same details under a new id
    pub(crate) fn copy(&self) -> Self {
        Self::build(self.title.as_str(), self.author.as_str(), self.year, self.format.clone())
    }

    pub fn format(&self) -> &BookFormat {
        &self.format
    }

    pub fn condition(&self) -> Option<Condition> {
        match &self.format {
            BookFormat::Printed { condition, .. } => Some(*condition),
            BookFormat::Electronic { .. } => None,
        }
    }

    /// Advances a printed copy one step toward new and returns the resulting condition.
    pub fn repair(&mut self) -> LibraryResult<Condition> {
        match &mut self.format {
            BookFormat::Printed { condition, .. } => {
                *condition = condition.repaired();
                info!("{} repaired, condition: {}.", self.title, condition);
                Ok(*condition)
            }
            BookFormat::Electronic { .. } => {
                Err(LibraryError::validation(
                    format!("{} is an ebook and cannot be repaired", self.title).as_str(), None))
            }
        }
    }

    /// Emits the download notification of an ebook, nothing is changed.
    pub fn download(&self) -> LibraryResult<String> {
        match &self.format {
            BookFormat::Electronic { format, .. } => {
                let message = format!("Downloading {} in {} format...", self.title, format);
                info!("{}", message);
                Ok(message)
            }
            BookFormat::Printed { .. } => {
                Err(LibraryError::validation(
                    format!("{} is a printed book and cannot be downloaded", self.title).as_str(), None))
            }
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Versioned for BookEntity {
    fn advance(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Filterable for BookEntity {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "book_id" => Some(self.book_id.to_string()),
            "title" => Some(self.title.to_string()),
            "author" => Some(self.author.to_string()),
            "book_status" => Some(self.book_status.to_string()),
            _ => None,
        }
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn mark_as_taken(&mut self) {
        self.book_status = BookStatus::Borrowed;
    }

    fn mark_as_returned(&mut self) {
        self.book_status = BookStatus::Available;
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} by {} ({}), {}", self.title, self.author, self.year, self.format)
    }
}
