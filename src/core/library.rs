use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    // Repository lookup by id missed.
    NotFound {
        message: String,
    },
    BookNotFound {
        message: String,
    },
    UserNotFound {
        message: String,
    },
    // The book exists but is held by someone, so it cannot be lent or removed.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // The user exists but does not hold the book being returned.
    NotHeld {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn book_not_found(message: &str) -> LibraryError {
        LibraryError::BookNotFound { message: message.to_string() }
    }

    pub fn user_not_found(message: &str) -> LibraryError {
        LibraryError::UserNotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_held(message: &str) -> LibraryError {
        LibraryError::NotHeld { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // database conflicts and unavailable holds carry their own flag
    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Database { retryable, .. } |
            LibraryError::CurrentlyUnavailable { retryable, .. } => *retryable,
            _ => false,
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } |
            LibraryError::NotFound { message } |
            LibraryError::BookNotFound { message } |
            LibraryError::UserNotFound { message } |
            LibraryError::NotHeld { message } |
            LibraryError::Serialization { message } => write!(f, "{}", message),
            LibraryError::Database { message, reason_code, .. } |
            LibraryError::CurrentlyUnavailable { message, reason_code, .. } |
            LibraryError::Validation { message, reason_code } |
            LibraryError::Runtime { message, reason_code } => match reason_code {
                Some(code) => write!(f, "{} ({})", message, code),
                None => write!(f, "{}", message),
            },
        }
    }
}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page token, an offset into the scanned rows
    pub page: Option<String>,
    // page size
    pub page_size: usize,
    // Next page if available
    pub next_page: Option<String>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}


#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Borrowed" => BookStatus::Borrowed,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Role {
    Regular,
    Librarian,
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Librarian" => Role::Librarian,
            _ => Role::Regular,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Role::Regular => write!(f, "Regular"),
            Role::Librarian => write!(f, "Librarian"),
        }
    }
}
