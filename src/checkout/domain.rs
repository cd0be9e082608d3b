pub mod service;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

// CheckoutService moves books between the catalog and borrowed collections.
// Both sides are updated together or not at all.
pub trait CheckoutService: Sync + Send {
    fn lend_book(&mut self, title: &str, user_name: &str) -> LibraryResult<BookEntity>;
    fn return_book(&mut self, title: &str, user_name: &str) -> LibraryResult<BookEntity>;
}
