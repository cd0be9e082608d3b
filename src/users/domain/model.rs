use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::{Identifiable, Versioned};
use crate::core::library::{LibraryError, LibraryResult, Role};
use crate::core::repository::Filterable;
use crate::users::User;
use crate::utils::date::serializer;

// UserEntity abstracts a library member. Names are lookup keys but are not
// unique; borrowed_books holds book ids in borrow order.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserEntity {
    user_id: String,
    version: i64,
    name: String,
    group_roles: Vec<Role>,
    borrowed_books: Vec<String>,
    #[serde(with = "serializer")]
    created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    updated_at: NaiveDateTime,
}

impl UserEntity {
    pub fn new(name: &str) -> Self {
        Self::with_roles(name, vec![])
    }

    pub(crate) fn with_roles(name: &str, group_roles: Vec<Role>) -> Self {
        Self {
            user_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            group_roles,
            borrowed_books: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    /// Takes the book when it is available. This is the only place a book
    /// becomes borrowed, so a book never sits in two collections.
    pub fn borrow(&mut self, book: &mut BookEntity) -> LibraryResult<()> {
        if !book.is_available() {
            let message = format!("Sorry, {} is currently unavailable.", book.title());
            warn!("{}", message);
            return Err(LibraryError::unavailable(message.as_str(), Some("borrowed".to_string()), false));
        }
        book.mark_as_taken();
        self.borrowed_books.push(book.id());
        info!("{} borrowed {}.", self.name, book.title());
        Ok(())
    }

    pub fn return_book(&mut self, book: &mut BookEntity) -> LibraryResult<()> {
        let book_id = book.id();
        let pos = match self.borrowed_books.iter().position(|id| *id == book_id) {
            Some(pos) => pos,
            None => {
                let message = format!("{} doesn't have {}.", self.name, book.title());
                warn!("{}", message);
                return Err(LibraryError::not_held(message.as_str()));
            }
        };
        book.mark_as_returned();
        self.borrowed_books.remove(pos);
        info!("{} returned {}.", self.name, book.title());
        Ok(())
    }

    /// Lists the borrowed books in borrow order, resolving ids against the catalog.
    pub fn show_books(&self, books: &dyn BookRepository) -> LibraryResult<Vec<String>> {
        if self.borrowed_books.is_empty() {
            info!("{} has not borrowed any books.", self.name);
            return Ok(vec![]);
        }
        info!("{} has borrowed these books:", self.name);
        let mut listing = Vec::with_capacity(self.borrowed_books.len());
        for book_id in self.borrowed_books.iter() {
            let description = books.get(book_id.as_str())?.describe();
            info!(" - {}", description);
            listing.push(description);
        }
        Ok(listing)
    }

    pub fn get_borrowed_books(&self) -> &[String] {
        self.borrowed_books.as_slice()
    }

    pub fn holds(&self, book_id: &str) -> bool {
        self.borrowed_books.iter().any(|id| id == book_id)
    }
}

impl Identifiable for UserEntity {
    fn id(&self) -> String {
        self.user_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Versioned for UserEntity {
    fn advance(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Filterable for UserEntity {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "user_id" => Some(self.user_id.to_string()),
            "name" => Some(self.name.to_string()),
            _ => None,
        }
    }
}

impl User for UserEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }
    fn is_librarian(&self) -> bool {
        self.is_role(Role::Librarian)
    }
    fn is_role(&self, match_role: Role) -> bool {
        self.group_roles.iter().any(|role| *role == match_role)
    }
    fn is_regular(&self) -> bool {
        self.group_roles.is_empty() || self.is_role(Role::Regular)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::{BookEntity, Condition};
    use crate::books::factory::create_book_repository;
    use crate::core::domain::Identifiable;
    use crate::core::library::{LibraryError, Role};
    use crate::users::User;
    use crate::users::domain::model::UserEntity;

    fn war_and_peace() -> BookEntity {
        BookEntity::printed("War and Peace", "Tolstoy", 1869, 1225, Condition::Good).expect("should build book")
    }

    #[test]
    fn test_should_build_user() {
        let user = UserEntity::new("Anna");
        assert_eq!("Anna", user.name());
        assert!(user.is_regular());
        assert!(!user.is_librarian());
        assert!(user.get_borrowed_books().is_empty());

        let librarian = UserEntity::with_roles("Maria", vec![Role::Librarian]);
        assert!(librarian.is_librarian());
        assert!(!librarian.is_regular());
    }

    #[test]
    fn test_should_borrow_available_book() {
        let mut user = UserEntity::new("Anna");
        let mut book = war_and_peace();
        user.borrow(&mut book).expect("should borrow");
        assert!(!book.is_available());
        assert_eq!(vec![book.id()], user.get_borrowed_books().to_vec());
        assert!(user.holds(book.id().as_str()));
    }

    #[test]
    fn test_should_reject_unavailable_book() {
        let mut anna = UserEntity::new("Anna");
        let mut ivan = UserEntity::new("Ivan");
        let mut book = war_and_peace();
        anna.borrow(&mut book).expect("should borrow");

        let book_before = book.clone();
        let ivan_before = ivan.clone();
        let res = ivan.borrow(&mut book);
        assert!(matches!(res, Err(LibraryError::CurrentlyUnavailable { .. })));
        assert_eq!(book_before, book);
        assert_eq!(ivan_before, ivan);

        // the holder cannot take it twice either
        assert!(anna.borrow(&mut book).is_err());
        assert_eq!(1, anna.get_borrowed_books().len());
    }

    #[test]
    fn test_should_return_borrowed_book() {
        let mut user = UserEntity::new("Anna");
        let mut book = war_and_peace();
        user.borrow(&mut book).expect("should borrow");
        user.return_book(&mut book).expect("should return");
        assert!(book.is_available());
        assert!(user.get_borrowed_books().is_empty());
    }

    #[test]
    fn test_should_reject_return_not_held() {
        let mut anna = UserEntity::new("Anna");
        let mut ivan = UserEntity::new("Ivan");
        let mut book = war_and_peace();
        anna.borrow(&mut book).expect("should borrow");

        let res = ivan.return_book(&mut book);
        assert!(matches!(res, Err(LibraryError::NotHeld { .. })));
        assert!(!book.is_available());
        assert!(anna.holds(book.id().as_str()));
    }

    #[test]
    fn test_should_keep_borrow_order() {
        let mut user = UserEntity::new("Anna");
        let mut first = war_and_peace();
        let mut second = BookEntity::electronic("The Master and Margarita", "Bulgakov", 1966, 5.0, "epub").expect("should build book");
        let mut third = BookEntity::printed("Crime and Punishment", "Dostoevsky", 1866, 480, Condition::Poor).expect("should build book");
        user.borrow(&mut first).expect("should borrow");
        user.borrow(&mut second).expect("should borrow");
        user.borrow(&mut third).expect("should borrow");
        user.return_book(&mut second).expect("should return");
        assert_eq!(vec![first.id(), third.id()], user.get_borrowed_books().to_vec());
    }

    #[test]
    fn test_should_show_books() {
        let mut repo = create_book_repository();
        let mut user = UserEntity::new("Anna");
        assert!(user.show_books(repo.as_ref()).expect("should show").is_empty());

        let mut book = war_and_peace();
        user.borrow(&mut book).expect("should borrow");
        let _ = repo.create(&book).expect("should create book");
        let listing = user.show_books(repo.as_ref()).expect("should show");
        assert_eq!(vec!["War and Peace by Tolstoy (1869), 1225 pages, condition: good".to_string()], listing);
    }
}
