use tracing::warn;
use crate::core::domain::Identifiable;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::library::Library;
use crate::users::User;
use crate::users::domain::RegistryService;
use crate::users::domain::model::UserEntity;

// books are only borrowed through lend_book, so a new user holds nothing
fn check_references(user: &UserEntity) -> LibraryResult<()> {
    if let Some(book_id) = user.get_borrowed_books().first() {
        let message = format!("User '{}' already holds book {} borrowed outside this library.", user.name(), book_id);
        warn!("{}", message);
        return Err(LibraryError::validation(message.as_str(), None));
    }
    Ok(())
}

impl RegistryService for Library {
    fn add_user(&mut self, user: UserEntity) -> LibraryResult<UserEntity> {
        check_references(&user)?;
        let _ = self.user_repository.create(&user)?;
        let message = format!("{} registered.", user.name());
        self.publish(DomainEvent::added(
            "users", "users", user.id().as_str(), message.as_str(), &user));
        Ok(user)
    }

    fn find_user(&self, name: &str) -> LibraryResult<Option<UserEntity>> {
        self.user_repository.find_by_name(name)
    }

    fn show_user_books(&self, name: &str) -> LibraryResult<Vec<String>> {
        let user = self.require_user(name)?;
        user.show_books(self.book_repository.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::{BookEntity, Condition};
    use crate::catalog::domain::CatalogService;
    use crate::checkout::domain::CheckoutService;
    use crate::core::domain::{Configuration, Identifiable};
    use crate::core::library::LibraryError;
    use crate::gateway::GatewayPublisherVia;
    use crate::library::Library;
    use crate::library::factory::create_library;
    use crate::users::User;
    use crate::users::domain::RegistryService;
    use crate::users::domain::model::UserEntity;

    fn sut() -> Library {
        create_library(&Configuration::new("test").with_publisher(GatewayPublisherVia::Memory))
    }

    #[test]
    fn test_should_add_and_find_user() {
        let mut library = sut();
        let anna = library.add_user(UserEntity::new("Anna")).expect("should add user");
        let found = library.find_user("Anna").expect("should query").expect("should find user");
        assert_eq!(anna.id(), found.id());
        assert!(library.find_user("anna").expect("should query").is_none());

        let events = library.published_events().expect("should list events");
        assert_eq!(Some("Anna registered."), events[0].notification());
    }

    #[test]
    fn test_should_find_first_registered() {
        let mut library = sut();
        let first = library.add_user(UserEntity::new("Anna")).expect("should add user");
        let _ = library.add_user(UserEntity::new("Anna")).expect("should add user");
        let found = library.find_user("Anna").expect("should query").expect("should find user");
        assert_eq!(first.id(), found.id());
    }

    #[test]
    fn test_should_reject_same_user_twice() {
        let mut library = sut();
        let anna = library.add_user(UserEntity::new("Anna")).expect("should add user");
        let res = library.add_user(anna);
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
    }

    #[test]
    fn test_should_reject_foreign_references() {
        let mut library = sut();
        let mut anna = UserEntity::new("Anna");
        let mut book = BookEntity::printed("War and Peace", "Tolstoy", 1869, 1225, Condition::Good).expect("should build book");
        anna.borrow(&mut book).expect("should borrow");
        let res = library.add_user(anna);
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(library.find_user("Anna").expect("should query").is_none());
    }

    #[test]
    fn test_should_reject_user_holding_cataloged_book() {
        let mut library = sut();
        let _ = library.add_book(BookEntity::printed("War and Peace", "Tolstoy", 1869, 1225, Condition::Good)
            .expect("should build book")).expect("should add book");
        let mut cataloged = library.find_book("War and Peace").expect("should query").expect("should find book");
        let mut anna = UserEntity::new("Anna");
        anna.borrow(&mut cataloged).expect("should borrow");

        let res = library.add_user(anna);
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(library.find_user("Anna").expect("should query").is_none());
        assert_eq!(1, library.show_available_books().expect("should list").len());
    }

    #[test]
    fn test_should_show_user_books() {
        let mut library = sut();
        let _ = library.add_book(BookEntity::printed("War and Peace", "Tolstoy", 1869, 1225, Condition::Good)
            .expect("should build book")).expect("should add book");
        let _ = library.add_user(UserEntity::new("Anna")).expect("should add user");
        assert!(library.show_user_books("Anna").expect("should show").is_empty());

        let _ = library.lend_book("War and Peace", "Anna").expect("should lend");
        assert_eq!(vec!["War and Peace by Tolstoy (1869), 1225 pages, condition: good".to_string()],
                   library.show_user_books("Anna").expect("should show"));
        let anna = library.find_user("Anna").expect("should query").expect("should find user");
        assert_eq!("Anna", anna.name());
    }

    #[test]
    fn test_should_report_unknown_user() {
        let library = sut();
        assert!(matches!(library.show_user_books("Ivan"), Err(LibraryError::UserNotFound { .. })));
    }
}
