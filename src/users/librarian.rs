use tracing::info;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryResult, Role};
use crate::users::User;
use crate::users::domain::RegistryService;
use crate::users::domain::model::UserEntity;

/// A user who may also change the catalog and the registry. Borrowing and
/// returning go through the wrapped user like for anyone else.
#[derive(Debug, Clone, PartialEq)]
pub struct Librarian {
    user: UserEntity,
}

impl Librarian {
    pub fn new(name: &str) -> Self {
        Self {
            user: UserEntity::with_roles(name, vec![Role::Librarian]),
        }
    }

    pub fn as_user(&self) -> &UserEntity {
        &self.user
    }

    pub fn into_user(self) -> UserEntity {
        self.user
    }

    pub fn add_book(&self, catalog: &mut dyn CatalogService, book: BookEntity) -> LibraryResult<BookEntity> {
        let book = catalog.add_book(book)?;
        info!("Librarian {} added {}.", self.user.name(), book.title());
        Ok(book)
    }

    pub fn remove_book(&self, catalog: &mut dyn CatalogService, title: &str) -> LibraryResult<BookEntity> {
        let book = catalog.remove_book(title)?;
        info!("Librarian {} removed {}.", self.user.name(), title);
        Ok(book)
    }

    pub fn register_user(&self, registry: &mut dyn RegistryService, user: UserEntity) -> LibraryResult<UserEntity> {
        let user = registry.add_user(user)?;
        info!("Librarian {} registered user {}.", self.user.name(), user.name());
        Ok(user)
    }
}

impl Identifiable for Librarian {
    fn id(&self) -> String {
        self.user.id()
    }

    fn version(&self) -> i64 {
        self.user.version()
    }
}

impl User for Librarian {
    fn name(&self) -> &str {
        self.user.name()
    }
    fn is_librarian(&self) -> bool {
        true
    }
    fn is_role(&self, match_role: Role) -> bool {
        self.user.is_role(match_role)
    }
    fn is_regular(&self) -> bool {
        false
    }
}
