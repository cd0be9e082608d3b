use crate::books::factory::create_book_repository;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::library::Library;
use crate::users::factory::create_user_repository;

pub fn create_library(config: &Configuration) -> Library {
    let book_repo = create_book_repository();
    let user_repo = create_user_repository();
    let publisher = create_publisher(config.publisher);
    Library::new(config, book_repo, user_repo, publisher)
}
