//! In-memory library lending: a catalog of printed and electronic books, a
//! registry of users and librarians, and the lend/return workflow that keeps
//! book availability and borrowed collections in step.

pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod gateway;
pub mod library;
pub mod users;
pub mod utils;

pub use crate::books::domain::model::{BookEntity, BookFormat, Condition};
pub use crate::catalog::domain::CatalogService;
pub use crate::checkout::domain::CheckoutService;
pub use crate::core::library::{LibraryError, LibraryResult};
pub use crate::library::Library;
pub use crate::library::factory::create_library;
pub use crate::users::domain::RegistryService;
pub use crate::users::domain::model::UserEntity;
pub use crate::users::librarian::Librarian;
