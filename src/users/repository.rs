pub mod memory_user_repository;

use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::users::domain::model::UserEntity;


pub trait UserRepository: Repository<UserEntity> {
    fn find_by_name(&self, name: &str) -> LibraryResult<Option<UserEntity>>;

    // users whose borrowed collection references the book
    fn find_by_borrowed(&self, book_id: &str) -> LibraryResult<Vec<UserEntity>>;
}
