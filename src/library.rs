use std::collections::HashMap;
use tracing::{error, warn};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, BRANCH};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;

pub mod factory;

// Library owns the catalog and the registry. Catalog, registry and checkout
// operations are implemented on it by the catalog, users and checkout modules.
pub struct Library {
    branch_id: String,
    page_size: usize,
    pub(crate) book_repository: Box<dyn BookRepository>,
    pub(crate) user_repository: Box<dyn UserRepository>,
    pub(crate) events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               user_repository: Box<dyn UserRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            page_size: config.page_size.max(1),
            book_repository,
            user_repository,
            events_publisher,
        }
    }

    pub fn branch_id(&self) -> &str {
        self.branch_id.as_str()
    }

    pub fn book_count(&self) -> usize {
        self.book_repository.count()
    }

    pub fn published_events(&self) -> LibraryResult<Vec<DomainEvent>> {
        self.events_publisher.published()
    }

    // the change is already stored, so a failed publish is logged and not returned
    pub(crate) fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from).and_then(|event| {
            let event = event.with_metadata(BRANCH, self.branch_id.as_str());
            self.events_publisher.publish(&event)
        });
        if let Err(err) = res {
            error!(branch = self.branch_id.as_str(), "failed to publish event: {}", err);
        }
    }

    pub(crate) fn require_book(&self, title: &str) -> LibraryResult<BookEntity> {
        match self.book_repository.find_by_title(title)? {
            Some(book) => Ok(book),
            None => {
                let message = format!("Book '{}' not found in the library.", title);
                warn!("{}", message);
                Err(LibraryError::book_not_found(message.as_str()))
            }
        }
    }

    pub(crate) fn require_user(&self, name: &str) -> LibraryResult<UserEntity> {
        match self.user_repository.find_by_name(name)? {
            Some(user) => Ok(user),
            None => {
                let message = format!("User '{}' not found.", name);
                warn!("{}", message);
                Err(LibraryError::user_not_found(message.as_str()))
            }
        }
    }

    // walks every page of the catalog in insertion order
    pub(crate) fn scan_books(&self, status: Option<BookStatus>) -> LibraryResult<Vec<BookEntity>> {
        let mut books = vec![];
        let mut page: Option<String> = None;
        loop {
            let res = match status {
                Some(status) => self.book_repository.find_by_status(
                    status.to_string().as_str(), page.as_deref(), self.page_size)?,
                None => self.book_repository.query(&HashMap::new(), page.as_deref(), self.page_size)?,
            };
            books.extend(res.records);
            match res.next_page {
                Some(next) => page = Some(next),
                None => return Ok(books),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::{BookEntity, Condition};
    use crate::books::factory::create_book_repository;
    use crate::catalog::domain::CatalogService;
    use crate::checkout::domain::CheckoutService;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEvent;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::gateway::events::EventPublisher;
    use crate::library::Library;
    use crate::users::domain::RegistryService;
    use crate::users::domain::model::UserEntity;
    use crate::users::factory::create_user_repository;

    struct BrokenPublisher {}

    impl EventPublisher for BrokenPublisher {
        fn publish(&self, _event: &DomainEvent) -> Result<(), LibraryError> {
            Err(LibraryError::runtime("publisher is down", None))
        }
    }

    #[test]
    fn test_should_keep_changes_when_publish_fails() {
        let mut library = Library::new(&Configuration::new("test"), create_book_repository(),
                                       create_user_repository(), Box::new(BrokenPublisher {}));
        let _ = library.add_book(BookEntity::printed("War and Peace", "Tolstoy", 1869, 1225, Condition::Good)
            .expect("should build book")).expect("should add book");
        let _ = library.add_user(UserEntity::new("Anna")).expect("should add user");
        let lent = library.lend_book("War and Peace", "Anna").expect("should lend");
        assert_eq!(BookStatus::Borrowed, lent.status());
        assert_eq!(1, library.book_count());
        assert_eq!(1, library.show_user_books("Anna").expect("should show").len());
        assert!(library.published_events().expect("should list events").is_empty());
    }

    #[test]
    fn test_should_scan_by_status() {
        let mut config = Configuration::new("test");
        config.page_size = 1;
        let mut library = Library::new(&config, create_book_repository(),
                                       create_user_repository(), Box::new(BrokenPublisher {}));
        for title in ["War and Peace", "Anna Karenina", "Resurrection"] {
            let _ = library.add_book(BookEntity::printed(title, "Tolstoy", 1869, 100, Condition::Good)
                .expect("should build book")).expect("should add book");
        }
        let _ = library.add_user(UserEntity::new("Anna")).expect("should add user");
        let _ = library.lend_book("Anna Karenina", "Anna").expect("should lend");

        assert_eq!(3, library.scan_books(None).expect("should scan").len());
        let borrowed = library.scan_books(Some(BookStatus::Borrowed)).expect("should scan");
        assert_eq!(1, borrowed.len());
        let available = library.scan_books(Some(BookStatus::Available)).expect("should scan");
        assert_eq!(2, available.len());
    }
}
