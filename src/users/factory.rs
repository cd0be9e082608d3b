use crate::users::repository::UserRepository;
use crate::users::repository::memory_user_repository::MemoryUserRepository;

pub fn create_user_repository() -> Box<dyn UserRepository> {
    Box::new(MemoryUserRepository::new("users"))
}
