pub mod service;

use crate::books::domain::model::{BookEntity, Condition};
use crate::core::library::LibraryResult;

pub trait CatalogService: Sync + Send {
    // appends even when the title is already cataloged
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<BookEntity>;
    fn remove_book(&mut self, title: &str) -> LibraryResult<BookEntity>;
    fn find_book(&self, title: &str) -> LibraryResult<Option<BookEntity>>;
    fn show_all_books(&self) -> LibraryResult<Vec<String>>;
    fn show_available_books(&self) -> LibraryResult<Vec<String>>;
    fn repair_book(&mut self, title: &str) -> LibraryResult<Condition>;
    fn download_book(&self, title: &str) -> LibraryResult<String>;
}
