use tracing::warn;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::Identifiable;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::library::Library;
use crate::users::domain::model::UserEntity;

impl Library {
    fn persist_checkout(&mut self, book: &BookEntity, user: &UserEntity) -> LibraryResult<()> {
        let _ = self.book_repository.update(book)?;
        if let Err(err) = self.user_repository.update(user) {
            // put the book back the way it was before the user side failed
            let mut restored = self.book_repository.get(book.id().as_str())?;
            if book.is_available() {
                restored.mark_as_taken();
            } else {
                restored.mark_as_returned();
            }
            let _ = self.book_repository.update(&restored)?;
            return Err(err);
        }
        Ok(())
    }
}

impl CheckoutService for Library {
    fn lend_book(&mut self, title: &str, user_name: &str) -> LibraryResult<BookEntity> {
        let mut book = self.require_book(title)?;
        if !book.is_available() {
            let message = format!("Book '{}' is currently not available.", title);
            warn!("{}", message);
            return Err(LibraryError::unavailable(message.as_str(), Some("borrowed".to_string()), false));
        }
        let mut user = self.require_user(user_name)?;
        user.borrow(&mut book)?;
        self.persist_checkout(&book, &user)?;

        let message = format!("{} borrowed {}.", user_name, book.title());
        self.publish(DomainEvent::updated(
            "book_borrowed", "books", book.id().as_str(), message.as_str(), &book));
        Ok(book)
    }

    fn return_book(&mut self, title: &str, user_name: &str) -> LibraryResult<BookEntity> {
        let mut user = self.require_user(user_name)?;
        let mut book = match self.book_repository.find_by_title(title)? {
            Some(book) if user.holds(book.id().as_str()) => book,
            _ => {
                let message = format!("{} does not have the book '{}'.", user_name, title);
                warn!("{}", message);
                return Err(LibraryError::not_held(message.as_str()));
            }
        };
        user.return_book(&mut book)?;
        self.persist_checkout(&book, &user)?;

        let message = format!("{} returned {}.", user_name, book.title());
        self.publish(DomainEvent::updated(
            "book_returned", "books", book.id().as_str(), message.as_str(), &book));
        Ok(book)
    }
}
