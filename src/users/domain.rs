pub mod model;
pub mod service;

use crate::core::library::LibraryResult;
use crate::users::domain::model::UserEntity;

pub trait RegistryService: Sync + Send {
    fn add_user(&mut self, user: UserEntity) -> LibraryResult<UserEntity>;
    // first registered user with exactly this name
    fn find_user(&self, name: &str) -> LibraryResult<Option<UserEntity>>;
    fn show_user_books(&self, name: &str) -> LibraryResult<Vec<String>>;
}
