use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;

pub fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(MemoryBookRepository::new("books"))
}
