use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, Condition};
use crate::catalog::domain::CatalogService;
use crate::core::domain::Identifiable;
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::library::Library;
use crate::users::User;

impl CatalogService for Library {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<BookEntity> {
        if !book.is_available() {
            let message = format!("Book '{}' is marked as borrowed and cannot be cataloged.", book.title());
            warn!("{}", message);
            return Err(LibraryError::validation(message.as_str(), Some("borrowed".to_string())));
        }
        // adding a book that is already cataloged appends another copy
        let book = match self.book_repository.get(book.id().as_str()) {
            Ok(_) => book.copy(),
            Err(LibraryError::NotFound { .. }) => book,
            Err(err) => return Err(err),
        };
        let _ = self.book_repository.create(&book)?;
        let message = format!("{} added to the catalog.", book.title());
        self.publish(DomainEvent::added(
            "books", "books", book.id().as_str(), message.as_str(), &book));
        Ok(book)
    }

    fn remove_book(&mut self, title: &str) -> LibraryResult<BookEntity> {
        let book = match self.book_repository.find_by_title(title)? {
            Some(book) => book,
            None => {
                let message = format!("Book titled '{}' not found.", title);
                warn!("{}", message);
                return Err(LibraryError::book_not_found(message.as_str()));
            }
        };
        // a borrowed book stays until it is returned, borrowed collections only reference cataloged books
        if !book.is_available() {
            let holders: Vec<String> = self.user_repository.find_by_borrowed(book.id().as_str())?
                .iter().map(|user| user.name().to_string()).collect();
            let message = format!("Book '{}' is currently borrowed by {} and cannot be removed.", title, holders.join(", "));
            warn!("{}", message);
            return Err(LibraryError::unavailable(message.as_str(), Some("borrowed".to_string()), false));
        }
        let _ = self.book_repository.delete(book.id().as_str())?;
        let message = format!("{} removed from the catalog.", book.title());
        self.publish(DomainEvent::deleted(
            "books", "books", book.id().as_str(), message.as_str(), &book));
        Ok(book)
    }

    fn find_book(&self, title: &str) -> LibraryResult<Option<BookEntity>> {
        self.book_repository.find_by_title(title)
    }

    fn show_all_books(&self) -> LibraryResult<Vec<String>> {
        let books = self.scan_books(None)?;
        if books.is_empty() {
            info!("No books available in the library.");
        }
        Ok(listing(&books))
    }

    fn show_available_books(&self) -> LibraryResult<Vec<String>> {
        let books = self.scan_books(Some(BookStatus::Available))?;
        if books.is_empty() {
            info!("No available books found.");
        }
        Ok(listing(&books))
    }

    fn repair_book(&mut self, title: &str) -> LibraryResult<Condition> {
        let mut book = self.require_book(title)?;
        let condition = book.repair()?;
        let _ = self.book_repository.update(&book)?;
        let message = format!("{} repaired, condition: {}.", book.title(), condition);
        self.publish(DomainEvent::updated(
            "book_repaired", "books", book.id().as_str(), message.as_str(), &book));
        Ok(condition)
    }

    fn download_book(&self, title: &str) -> LibraryResult<String> {
        self.require_book(title)?.download()
    }
}

fn listing(books: &[BookEntity]) -> Vec<String> {
    books.iter().map(|book| {
        let description = book.describe();
        info!("{}", description);
        description
    }).collect()
}
