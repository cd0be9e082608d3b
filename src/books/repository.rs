pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    // first catalog entry with exactly this title
    fn find_by_title(&self, title: &str) -> LibraryResult<Option<BookEntity>>;

    fn find_by_status(&self, status: &str,
                      page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>>;

    fn count(&self) -> usize;
}
